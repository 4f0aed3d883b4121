pub mod accrue_interest;
pub mod get_elapsed_time;
pub mod validation;
