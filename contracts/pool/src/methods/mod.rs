pub mod activate_reserve;
pub mod borrow;
pub mod configure_as_collateral;
pub mod deactivate_reserve;
pub mod deposit;
pub mod disable_borrowing_on_reserve;
pub mod disable_deposits_on_reserve;
pub mod disable_reserve_stable_rate;
pub mod disable_withdrawals_on_reserve;
pub mod enable_borrowing_on_reserve;
pub mod enable_deposits_on_reserve;
pub mod enable_reserve_stable_rate;
pub mod enable_withdrawals_on_reserve;
pub mod freeze_reserve;
pub mod init_reserve;
pub mod initialize;
pub mod repay;
pub mod set_pool_pause;
pub mod set_reserve_factor;
pub mod transfer_deposit;
pub mod unfreeze_reserve;
pub mod update_project_borrower;
pub mod update_reserve_rates;
pub mod user_reserve_data;
pub mod utils;
pub mod withdraw;
pub mod withdraw_interest;
