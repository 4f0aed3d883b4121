use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::validation::require_pool_admin;

pub fn disable_borrowing_on_reserve(env: &Env, who: &Address, asset: &Address) -> Result<(), Error> {
    require_pool_admin(env, who)?;

    let mut reserve = read_reserve(env, asset)?;
    reserve.configuration.borrowing_enabled = false;
    write_reserve(env, asset, &reserve);

    event::borrowing_disabled(env, asset);

    Ok(())
}
