use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::event;
use crate::storage::{
    add_reserve_liquidity, read_reserve, read_reserve_liquidity, read_token_balance,
    read_token_total_supply, write_token_balance, write_token_total_supply,
};

use super::utils::accrue_interest::settle_user_interest;
use super::utils::validation::{
    require_active_reserve, require_not_paused, require_positive_amount,
    require_withdrawals_enabled,
};

pub fn withdraw(
    env: &Env,
    who: &Address,
    asset: &Address,
    amount: i128,
    to: &Address,
) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let reserve = read_reserve(env, asset)?;
    require_active_reserve(env, &reserve);
    require_withdrawals_enabled(env, &reserve);

    // settle against the pre-withdrawal balance
    settle_user_interest(env, asset, &reserve, who)?;

    let balance = read_token_balance(env, &reserve.deposit_token, who);
    assert_with_error!(env, balance > 0, Error::NotEnoughAvailableUserBalance);

    // amount at or above the balance means a full withdrawal
    let to_withdraw = amount.min(balance);

    assert_with_error!(
        env,
        to_withdraw <= read_reserve_liquidity(env, asset),
        Error::NotEnoughReserveLiquidity
    );

    let supply = read_token_total_supply(env, &reserve.deposit_token)
        .checked_sub(to_withdraw)
        .ok_or(Error::MathOverflowError)?;
    let balance_after = balance
        .checked_sub(to_withdraw)
        .ok_or(Error::MathOverflowError)?;

    write_token_total_supply(env, &reserve.deposit_token, supply);
    write_token_balance(env, &reserve.deposit_token, who, balance_after);

    add_reserve_liquidity(env, asset, to_withdraw.checked_neg().ok_or(Error::MathOverflowError)?)?;
    token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &to_withdraw);

    event::withdraw(env, who, asset, to, to_withdraw);

    Ok(())
}
