use pool_interface::types::collateral_params_input::CollateralParamsInput;
use pool_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_reserve, write_reserve};

use super::utils::validation::{require_pool_admin, require_valid_collateral_params};

/// Field-scoped: only the three risk parameters change, every flag keeps
/// its current value. Setting all three to zero removes the reserve as
/// usable collateral.
pub fn configure_as_collateral(
    env: &Env,
    who: &Address,
    asset: &Address,
    params: &CollateralParamsInput,
) -> Result<(), Error> {
    require_pool_admin(env, who)?;
    require_valid_collateral_params(env, params);

    let mut reserve = read_reserve(env, asset)?;
    reserve.configuration.ltv = params.ltv;
    reserve.configuration.liquidation_threshold = params.liquidation_threshold;
    reserve.configuration.liquidation_bonus = params.liquidation_bonus;
    write_reserve(env, asset, &reserve);

    event::collat_config_change(env, asset, params);

    Ok(())
}
