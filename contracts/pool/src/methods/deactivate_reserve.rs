use pool_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::storage::{read_reserve, read_token_total_supply, write_reserve};

use super::utils::validation::require_pool_admin;

/// A reserve can only be deactivated once every deposit has been withdrawn.
pub fn deactivate_reserve(env: &Env, who: &Address, asset: &Address) -> Result<(), Error> {
    require_pool_admin(env, who)?;

    let mut reserve = read_reserve(env, asset)?;

    let deposit_token_supply = read_token_total_supply(env, &reserve.deposit_token);
    assert_with_error!(env, deposit_token_supply == 0, Error::ReserveLiquidityNotZero);

    reserve.configuration.is_active = false;
    write_reserve(env, asset, &reserve);

    event::reserve_deactivated(env, asset);

    Ok(())
}
