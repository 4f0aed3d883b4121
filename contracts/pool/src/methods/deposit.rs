use pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::{
    add_reserve_liquidity, read_reserve, read_token_balance, read_token_total_supply,
    write_token_balance, write_token_total_supply,
};

use super::utils::accrue_interest::settle_user_interest;
use super::utils::validation::{
    require_active_reserve, require_deposits_enabled, require_not_frozen, require_not_paused,
    require_positive_amount,
};

pub fn deposit(env: &Env, who: &Address, asset: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let reserve = read_reserve(env, asset)?;
    require_active_reserve(env, &reserve);
    require_not_frozen(env, &reserve);
    require_deposits_enabled(env, &reserve);

    // settle against the pre-deposit balance
    settle_user_interest(env, asset, &reserve, who)?;

    token::Client::new(env, asset).transfer(who, &env.current_contract_address(), &amount);
    add_reserve_liquidity(env, asset, amount)?;

    let supply = read_token_total_supply(env, &reserve.deposit_token)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    let balance = read_token_balance(env, &reserve.deposit_token, who)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_token_total_supply(env, &reserve.deposit_token, supply);
    write_token_balance(env, &reserve.deposit_token, who, balance);

    event::deposit(env, who, asset, amount);

    Ok(())
}
