use pool_interface::types::error::Error;
use pool_interface::types::user_reserve_data::UserReserveData;
use soroban_sdk::{Address, Env};

use crate::storage::{read_reserve, read_token_balance};

use super::utils::accrue_interest::pending_user_interest;

pub fn user_reserve_data(
    env: &Env,
    who: &Address,
    asset: &Address,
) -> Result<UserReserveData, Error> {
    let reserve = read_reserve(env, asset)?;

    Ok(UserReserveData {
        deposit_balance: read_token_balance(env, &reserve.deposit_token, who),
        stable_debt: read_token_balance(env, &reserve.stable_debt_token, who),
        variable_debt: read_token_balance(env, &reserve.variable_debt_token, who),
        accrued_interest: pending_user_interest(env, asset, &reserve, who)?,
    })
}
