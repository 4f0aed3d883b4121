use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::accrue_interest::current_liquidity_index;
use super::utils::validation::{require_non_negative_rate, require_pool_admin};

/// Manual rate mode: accrual rates are set directly instead of being derived
/// from a utilization curve. The period since the last change is folded into
/// the liquidity index at the old rate, so new rates apply from the current
/// ledger time only.
pub fn update_reserve_rates(
    env: &Env,
    who: &Address,
    asset: &Address,
    liquidity_rate: i128,
    stable_borrow_rate: i128,
) -> Result<(), Error> {
    require_pool_admin(env, who)?;
    require_non_negative_rate(env, liquidity_rate);
    require_non_negative_rate(env, stable_borrow_rate);

    let mut reserve = read_reserve(env, asset)?;
    reserve.liquidity_index = current_liquidity_index(env, &reserve)?;
    reserve.liquidity_rate = liquidity_rate;
    reserve.stable_borrow_rate = stable_borrow_rate;
    reserve.last_update_timestamp = env.ledger().timestamp();
    write_reserve(env, asset, &reserve);

    event::reserve_rates_updated(env, asset, liquidity_rate, stable_borrow_rate);

    Ok(())
}
