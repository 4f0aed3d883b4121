use soroban_sdk::contracttype;

/// Per-user view of a reserve, the data-provider read surface
#[contracttype]
#[derive(Debug, Clone)]
pub struct UserReserveData {
    pub deposit_balance: i128,
    pub stable_debt: i128,
    pub variable_debt: i128,
    /// Interest accrued on the deposit up to the current ledger time
    pub accrued_interest: i128,
}
