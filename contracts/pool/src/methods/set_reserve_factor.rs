use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::validation::{require_pool_admin, require_valid_reserve_factor};

pub fn set_reserve_factor(
    env: &Env,
    who: &Address,
    asset: &Address,
    factor: u32,
) -> Result<(), Error> {
    require_pool_admin(env, who)?;
    require_valid_reserve_factor(env, factor);

    let mut reserve = read_reserve(env, asset)?;
    reserve.configuration.reserve_factor = factor;
    write_reserve(env, asset, &reserve);

    event::reserve_factor_changed(env, asset, factor);

    Ok(())
}
