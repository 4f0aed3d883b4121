pub mod collateral_params_input;
pub mod error;
pub mod init_reserve_input;
pub mod reserve_configuration;
pub mod reserve_data;
pub mod user_reserve_data;
