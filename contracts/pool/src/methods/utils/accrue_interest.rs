use common::{FixedI128, ONE_YEAR};
use pool_interface::types::error::Error;
use pool_interface::types::reserve_data::ReserveData;
use soroban_sdk::{Address, Env};

use crate::storage::{read_token_balance, read_user_interest, write_user_interest};
use crate::types::interest_snapshot::InterestSnapshot;

use super::get_elapsed_time::get_elapsed_time;

/// Liquidity index as of the current ledger time: the stored index plus the
/// open period accrued at the current rate. The stored index only moves when
/// the rate changes, which closes the period at the rate it ran under.
pub fn current_liquidity_index(env: &Env, reserve: &ReserveData) -> Result<i128, Error> {
    let (_, elapsed) = get_elapsed_time(env, reserve.last_update_timestamp);

    if reserve.liquidity_rate == 0 || elapsed == 0 {
        return Ok(reserve.liquidity_index);
    }

    let delta = reserve
        .liquidity_rate
        .checked_mul(elapsed as i128)
        .ok_or(Error::MathOverflowError)?
        .checked_div(ONE_YEAR as i128)
        .ok_or(Error::MathOverflowError)?;

    reserve
        .liquidity_index
        .checked_add(delta)
        .ok_or(Error::MathOverflowError)
}

/// Settles the pending accrual for `who` against the current deposit-token
/// balance and persists the snapshot. Must run before the balance changes.
pub fn settle_user_interest(
    env: &Env,
    asset: &Address,
    reserve: &ReserveData,
    who: &Address,
) -> Result<InterestSnapshot, Error> {
    let index = current_liquidity_index(env, reserve)?;

    let mut snapshot =
        read_user_interest(env, asset, who).unwrap_or_else(|| InterestSnapshot::new(index));

    let balance = read_token_balance(env, &reserve.deposit_token, who);
    let interest = interest_since(&snapshot, index, balance)?;

    snapshot.accrued = snapshot
        .accrued
        .checked_add(interest)
        .ok_or(Error::MathOverflowError)?;
    snapshot.index = index;
    write_user_interest(env, asset, who, &snapshot);

    Ok(snapshot)
}

/// Read-only variant of [`settle_user_interest`] for the data-provider
/// surface.
pub fn pending_user_interest(
    env: &Env,
    asset: &Address,
    reserve: &ReserveData,
    who: &Address,
) -> Result<i128, Error> {
    let index = current_liquidity_index(env, reserve)?;

    let snapshot =
        read_user_interest(env, asset, who).unwrap_or_else(|| InterestSnapshot::new(index));

    let balance = read_token_balance(env, &reserve.deposit_token, who);
    let interest = interest_since(&snapshot, index, balance)?;

    snapshot
        .accrued
        .checked_add(interest)
        .ok_or(Error::MathOverflowError)
}

fn interest_since(snapshot: &InterestSnapshot, index: i128, balance: i128) -> Result<i128, Error> {
    let delta = index
        .checked_sub(snapshot.index)
        .ok_or(Error::MathOverflowError)?;

    if delta == 0 || balance == 0 {
        return Ok(0);
    }

    FixedI128::from_inner(delta)
        .mul_int(balance)
        .ok_or(Error::MathOverflowError)
}
