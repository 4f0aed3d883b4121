#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::collateral_params_input::CollateralParamsInput;
use types::error::Error;
use types::init_reserve_input::InitReserveInput;
use types::reserve_data::ReserveData;
use types::user_reserve_data::UserReserveData;

pub mod types;

pub struct Spec;

/// Interface for the lending pool: per-reserve configuration control plane
/// plus the user-facing data plane gated by it.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    /// Writes the pool admin and the emergency admin. Fails when called twice.
    fn initialize(env: Env, admin: Address, emergency_admin: Address) -> Result<(), Error>;

    fn version() -> u32;

    /// Registers a reserve for `asset`. The reserve starts active with
    /// borrowing, deposits, withdrawals and stable rate all disabled.
    fn init_reserve(
        env: Env,
        who: Address,
        asset: Address,
        input: InitReserveInput,
    ) -> Result<(), Error>;

    fn activate_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    /// Fails with `ReserveLiquidityNotZero` while deposit tokens are
    /// outstanding.
    fn deactivate_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn freeze_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn unfreeze_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    /// Enables borrowing and sets the stable-rate flag from the argument.
    fn enable_borrowing_on_reserve(
        env: Env,
        who: Address,
        asset: Address,
        stable_rate_enabled: bool,
    ) -> Result<(), Error>;

    fn disable_borrowing_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn enable_deposits_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn disable_deposits_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn enable_withdrawals_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn disable_withdrawals_on_reserve(env: Env, who: Address, asset: Address)
        -> Result<(), Error>;

    fn enable_reserve_stable_rate(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    fn disable_reserve_stable_rate(env: Env, who: Address, asset: Address) -> Result<(), Error>;

    /// Sets the risk parameters. All-zero params remove the reserve as
    /// usable collateral without touching any other flag.
    fn configure_as_collateral(
        env: Env,
        who: Address,
        asset: Address,
        params: CollateralParamsInput,
    ) -> Result<(), Error>;

    fn set_reserve_factor(env: Env, who: Address, asset: Address, factor: u32)
        -> Result<(), Error>;

    /// Rebinds the single address authorized to borrow against the reserve.
    fn update_project_borrower(
        env: Env,
        who: Address,
        asset: Address,
        borrower: Address,
    ) -> Result<(), Error>;

    /// Manual rate mode: sets the yearly accrual rates directly instead of
    /// deriving them from a utilization curve.
    fn update_reserve_rates(
        env: Env,
        who: Address,
        asset: Address,
        liquidity_rate: i128,
        stable_borrow_rate: i128,
    ) -> Result<(), Error>;

    /// Pool-wide switch, gated by the emergency admin only.
    fn set_pool_pause(env: Env, who: Address, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error>;

    fn withdraw(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), Error>;

    fn borrow(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error>;

    fn repay(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error>;

    /// Pays out the interest accrued on the caller's deposit.
    fn withdraw_interest(env: Env, who: Address, asset: Address, to: Address)
        -> Result<(), Error>;

    /// Deposit-token transfer between accounts, blocked while paused.
    fn transfer_deposit(
        env: Env,
        from: Address,
        to: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error>;

    fn get_reserve(env: Env, asset: Address) -> Option<ReserveData>;

    fn reserves(env: Env) -> Vec<Address>;

    fn user_reserve_data(env: Env, who: Address, asset: Address) -> Result<UserReserveData, Error>;

    fn token_balance(env: Env, token: Address, account: Address) -> i128;

    fn token_total_supply(env: Env, token: Address) -> i128;

    fn reserve_liquidity(env: Env, asset: Address) -> i128;

    fn pool_admin(env: Env) -> Result<Address, Error>;

    fn emergency_admin(env: Env) -> Result<Address, Error>;
}
