use soroban_sdk::contracttype;

/// Per (asset, user) accrual state, settled lazily on every operation that
/// changes the deposit balance.
#[contracttype]
#[derive(Debug, Clone)]
pub struct InterestSnapshot {
    pub accrued: i128,
    /// Reserve liquidity index at the last settlement
    pub index: i128,
}

impl InterestSnapshot {
    pub fn new(index: i128) -> Self {
        Self { accrued: 0, index }
    }
}
