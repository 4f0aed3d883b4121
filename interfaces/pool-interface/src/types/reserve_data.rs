use soroban_sdk::{contracttype, Address, BytesN, Env};

use super::init_reserve_input::InitReserveInput;
use super::reserve_configuration::ReserveConfiguration;

#[derive(Debug, Clone)]
#[contracttype]
pub struct ReserveData {
    pub configuration: ReserveConfiguration,
    /// Yearly depositor accrual rate, FixedI128 inner value
    pub liquidity_rate: i128,
    /// Yearly stable borrow rate, FixedI128 inner value
    pub stable_borrow_rate: i128,
    /// Cumulative depositor interest per unit of deposit since reserve
    /// creation, FixedI128 inner value. Folded forward on every rate change
    /// so past periods keep the rate they accrued under.
    pub liquidity_index: i128,
    /// The single address authorized to borrow against this reserve
    pub project_borrower: Option<Address>,
    pub deposit_token: Address,
    pub stable_debt_token: Address,
    pub variable_debt_token: Address,
    pub last_update_timestamp: u64,
    /// The id of the reserve (position in the list of the active reserves).
    pub id: BytesN<1>,
}

impl ReserveData {
    pub fn new(env: &Env, input: &InitReserveInput) -> Self {
        Self {
            configuration: ReserveConfiguration::new(input.decimals),
            liquidity_rate: 0,
            stable_borrow_rate: 0,
            liquidity_index: 0,
            project_borrower: None,
            deposit_token: input.deposit_token.clone(),
            stable_debt_token: input.stable_debt_token.clone(),
            variable_debt_token: input.variable_debt_token.clone(),
            last_update_timestamp: env.ledger().timestamp(),
            id: BytesN::from_array(env, &[0; 1]),
        }
    }

    pub fn get_id(&self) -> u8 {
        self.id.get(0).unwrap()
    }
}
