use soroban_sdk::contracttype;

/// Collateralization parameters, all in basis points
#[contracttype]
#[derive(Clone, Copy)]
pub struct CollateralParamsInput {
    pub ltv: u32,
    pub liquidation_threshold: u32,
    pub liquidation_bonus: u32,
}
