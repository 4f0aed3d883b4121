use soroban_sdk::contracttype;

/// Per-reserve configuration record. Owned by the control plane, read by
/// every gated operation.
#[contracttype]
#[derive(Debug, Clone)]
pub struct ReserveConfiguration {
    pub is_active: bool,
    pub is_frozen: bool,
    pub borrowing_enabled: bool,
    pub deposits_enabled: bool,
    pub withdrawals_enabled: bool,
    pub stable_rate_enabled: bool,
    /// Share of borrower interest kept by the protocol, in basis points
    pub reserve_factor: u32,
    pub decimals: u32,
    /// Loan-to-value, in basis points
    pub ltv: u32,
    pub liquidation_threshold: u32,
    pub liquidation_bonus: u32,
}

impl ReserveConfiguration {
    pub(crate) fn new(decimals: u32) -> Self {
        Self {
            is_active: true,
            is_frozen: false,
            borrowing_enabled: false,
            deposits_enabled: false,
            withdrawals_enabled: false,
            stable_rate_enabled: false,
            reserve_factor: 0,
            decimals,
            ltv: 0,
            liquidation_threshold: 0,
            liquidation_bonus: 0,
        }
    }
}
