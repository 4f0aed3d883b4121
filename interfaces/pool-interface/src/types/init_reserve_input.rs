use soroban_sdk::{contracttype, Address};

/// Reserve initialization parameters: the ledger ids of the token triplet
/// and the underlying decimals.
#[contracttype]
#[derive(Clone)]
pub struct InitReserveInput {
    pub deposit_token: Address,
    pub stable_debt_token: Address,
    pub variable_debt_token: Address,
    pub decimals: u32,
}
