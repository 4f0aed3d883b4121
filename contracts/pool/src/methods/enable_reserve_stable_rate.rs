use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::validation::require_pool_admin;

pub fn enable_reserve_stable_rate(env: &Env, who: &Address, asset: &Address) -> Result<(), Error> {
    require_pool_admin(env, who)?;

    let mut reserve = read_reserve(env, asset)?;
    reserve.configuration.stable_rate_enabled = true;
    write_reserve(env, asset, &reserve);

    event::stable_rate_enabled(env, asset);

    Ok(())
}
