use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_pause;

use super::utils::validation::require_emergency_admin;

/// Pool-wide switch. Only the emergency admin may flip it; the pool admin
/// is rejected like any other caller.
pub fn set_pool_pause(env: &Env, who: &Address, value: bool) -> Result<(), Error> {
    require_emergency_admin(env, who)?;

    write_pause(env, value);

    event::pool_paused(env, value);

    Ok(())
}
