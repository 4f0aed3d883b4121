use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::validation::require_pool_admin;

/// Enabling borrowing also decides whether stable-rate borrowing is
/// permitted on this reserve.
pub fn enable_borrowing_on_reserve(
    env: &Env,
    who: &Address,
    asset: &Address,
    stable_rate_enabled: bool,
) -> Result<(), Error> {
    require_pool_admin(env, who)?;

    let mut reserve = read_reserve(env, asset)?;
    reserve.configuration.borrowing_enabled = true;
    reserve.configuration.stable_rate_enabled = stable_rate_enabled;
    write_reserve(env, asset, &reserve);

    event::borrowing_enabled(env, asset, stable_rate_enabled);

    Ok(())
}
