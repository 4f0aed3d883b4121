use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_admin, write_emergency_admin, write_pause};

use super::utils::validation::require_admin_not_exist;

pub fn initialize(env: &Env, admin: &Address, emergency_admin: &Address) -> Result<(), Error> {
    require_admin_not_exist(env);

    write_admin(env, admin);
    write_emergency_admin(env, emergency_admin);
    write_pause(env, false);

    event::initialized(env, admin, emergency_admin);

    Ok(())
}
