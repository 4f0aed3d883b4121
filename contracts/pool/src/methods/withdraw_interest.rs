use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::event;
use crate::storage::{
    add_reserve_liquidity, read_reserve, read_reserve_liquidity, write_user_interest,
};

use super::utils::accrue_interest::settle_user_interest;
use super::utils::validation::{
    require_active_reserve, require_not_paused, require_withdrawals_enabled,
};

/// Pays out everything accrued on the caller's deposit. Interest is funded
/// by repayments, so the reserve must hold enough underlying to cover it.
pub fn withdraw_interest(
    env: &Env,
    who: &Address,
    asset: &Address,
    to: &Address,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);

    let reserve = read_reserve(env, asset)?;
    require_active_reserve(env, &reserve);
    require_withdrawals_enabled(env, &reserve);

    let mut snapshot = settle_user_interest(env, asset, &reserve, who)?;
    let accrued = snapshot.accrued;

    assert_with_error!(env, accrued > 0, Error::NotEnoughAvailableUserBalance);
    assert_with_error!(
        env,
        accrued <= read_reserve_liquidity(env, asset),
        Error::NotEnoughReserveLiquidity
    );

    snapshot.accrued = 0;
    write_user_interest(env, asset, who, &snapshot);

    add_reserve_liquidity(env, asset, accrued.checked_neg().ok_or(Error::MathOverflowError)?)?;
    token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &accrued);

    event::interest_withdrawn(env, who, asset, to, accrued);

    Ok(())
}
