use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::storage::{read_reserve, read_token_balance, write_token_balance};

use super::utils::accrue_interest::settle_user_interest;
use super::utils::validation::{
    require_active_reserve, require_not_paused, require_positive_amount,
};

/// Deposit-token transfer between accounts. Blocked pool-wide while paused;
/// both parties are settled before balances move so accrual stays attached
/// to the period each side actually held the tokens.
pub fn transfer_deposit(
    env: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    from.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let reserve = read_reserve(env, asset)?;
    require_active_reserve(env, &reserve);

    settle_user_interest(env, asset, &reserve, from)?;
    settle_user_interest(env, asset, &reserve, to)?;

    let from_balance = read_token_balance(env, &reserve.deposit_token, from);
    assert_with_error!(env, amount <= from_balance, Error::NotEnoughAvailableUserBalance);

    // a self-transfer must not touch the ledger, the writes would
    // otherwise double-count against the same key
    if from != to {
        let from_after = from_balance
            .checked_sub(amount)
            .ok_or(Error::MathOverflowError)?;
        let to_after = read_token_balance(env, &reserve.deposit_token, to)
            .checked_add(amount)
            .ok_or(Error::MathOverflowError)?;

        write_token_balance(env, &reserve.deposit_token, from, from_after);
        write_token_balance(env, &reserve.deposit_token, to, to_after);
    }

    event::deposit_transferred(env, from, to, asset, amount);

    Ok(())
}
