use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

use crate::event;
use crate::storage::{
    add_reserve_liquidity, read_reserve, read_token_balance, read_token_total_supply,
    write_token_balance, write_token_total_supply,
};

use super::utils::validation::{require_active_reserve, require_not_paused, require_positive_amount};

/// Repay stays available on a frozen reserve.
pub fn repay(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let reserve = read_reserve(env, asset)?;
    require_active_reserve(env, &reserve);

    let debt = read_token_balance(env, &reserve.variable_debt_token, who);
    assert_with_error!(env, debt > 0, Error::MustHaveDebt);

    let payback = amount.min(debt);

    token::Client::new(env, asset).transfer(who, &env.current_contract_address(), &payback);
    add_reserve_liquidity(env, asset, payback)?;

    let supply = read_token_total_supply(env, &reserve.variable_debt_token)
        .checked_sub(payback)
        .ok_or(Error::MathOverflowError)?;
    let debt_after = debt.checked_sub(payback).ok_or(Error::MathOverflowError)?;

    write_token_total_supply(env, &reserve.variable_debt_token, supply);
    write_token_balance(env, &reserve.variable_debt_token, who, debt_after);

    event::repay(env, who, asset, payback);

    Ok(())
}
