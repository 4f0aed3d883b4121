use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::event;
use crate::storage::{
    add_reserve_liquidity, read_reserve, read_reserve_liquidity, read_token_balance,
    read_token_total_supply, write_token_balance, write_token_total_supply,
};

use super::utils::validation::{
    require_active_reserve, require_borrowing_enabled, require_not_frozen, require_not_paused,
    require_positive_amount, require_project_borrower,
};

/// Gate order: pause, active, frozen, borrowing flag, borrower identity.
pub fn borrow(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let reserve = read_reserve(env, asset)?;
    require_active_reserve(env, &reserve);
    require_not_frozen(env, &reserve);
    require_borrowing_enabled(env, &reserve);
    require_project_borrower(env, who, &reserve)?;

    assert_with_error!(
        env,
        amount <= read_reserve_liquidity(env, asset),
        Error::NotEnoughReserveLiquidity
    );

    let supply = read_token_total_supply(env, &reserve.variable_debt_token)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    let debt = read_token_balance(env, &reserve.variable_debt_token, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_token_total_supply(env, &reserve.variable_debt_token, supply);
    write_token_balance(env, &reserve.variable_debt_token, who, debt);

    add_reserve_liquidity(env, asset, amount.checked_neg().ok_or(Error::MathOverflowError)?)?;
    token::Client::new(env, asset).transfer(&env.current_contract_address(), who, &amount);

    event::borrow(env, who, asset, amount);

    Ok(())
}
