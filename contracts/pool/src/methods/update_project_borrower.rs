use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::validation::require_pool_admin;

/// Rebinds the single address allowed to draw on this reserve's credit line.
pub fn update_project_borrower(
    env: &Env,
    who: &Address,
    asset: &Address,
    borrower: &Address,
) -> Result<(), Error> {
    require_pool_admin(env, who)?;

    let mut reserve = read_reserve(env, asset)?;
    reserve.project_borrower = Some(borrower.clone());
    write_reserve(env, asset, &reserve);

    event::project_borrower_updated(env, asset, borrower);

    Ok(())
}
