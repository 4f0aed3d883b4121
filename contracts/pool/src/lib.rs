#![deny(warnings)]
#![no_std]

use methods::{
    activate_reserve::activate_reserve, borrow::borrow,
    configure_as_collateral::configure_as_collateral, deactivate_reserve::deactivate_reserve,
    deposit::deposit, disable_borrowing_on_reserve::disable_borrowing_on_reserve,
    disable_deposits_on_reserve::disable_deposits_on_reserve,
    disable_reserve_stable_rate::disable_reserve_stable_rate,
    disable_withdrawals_on_reserve::disable_withdrawals_on_reserve,
    enable_borrowing_on_reserve::enable_borrowing_on_reserve,
    enable_deposits_on_reserve::enable_deposits_on_reserve,
    enable_reserve_stable_rate::enable_reserve_stable_rate,
    enable_withdrawals_on_reserve::enable_withdrawals_on_reserve, freeze_reserve::freeze_reserve,
    init_reserve::init_reserve, initialize::initialize, repay::repay,
    set_pool_pause::set_pool_pause, set_reserve_factor::set_reserve_factor,
    transfer_deposit::transfer_deposit, unfreeze_reserve::unfreeze_reserve,
    update_project_borrower::update_project_borrower,
    update_reserve_rates::update_reserve_rates, user_reserve_data::user_reserve_data,
    withdraw::withdraw, withdraw_interest::withdraw_interest,
};
use pool_interface::types::{
    collateral_params_input::CollateralParamsInput, error::Error,
    init_reserve_input::InitReserveInput, reserve_data::ReserveData,
    user_reserve_data::UserReserveData,
};
use pool_interface::LendingPoolTrait;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPoolTrait for LendingPool {
    fn initialize(env: Env, admin: Address, emergency_admin: Address) -> Result<(), Error> {
        initialize(&env, &admin, &emergency_admin)
    }

    fn version() -> u32 {
        1
    }

    fn init_reserve(
        env: Env,
        who: Address,
        asset: Address,
        input: InitReserveInput,
    ) -> Result<(), Error> {
        init_reserve(&env, &who, &asset, &input)
    }

    fn activate_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        activate_reserve(&env, &who, &asset)
    }

    fn deactivate_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        deactivate_reserve(&env, &who, &asset)
    }

    fn freeze_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        freeze_reserve(&env, &who, &asset)
    }

    fn unfreeze_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        unfreeze_reserve(&env, &who, &asset)
    }

    fn enable_borrowing_on_reserve(
        env: Env,
        who: Address,
        asset: Address,
        stable_rate_enabled: bool,
    ) -> Result<(), Error> {
        enable_borrowing_on_reserve(&env, &who, &asset, stable_rate_enabled)
    }

    fn disable_borrowing_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        disable_borrowing_on_reserve(&env, &who, &asset)
    }

    fn enable_deposits_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        enable_deposits_on_reserve(&env, &who, &asset)
    }

    fn disable_deposits_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        disable_deposits_on_reserve(&env, &who, &asset)
    }

    fn enable_withdrawals_on_reserve(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        enable_withdrawals_on_reserve(&env, &who, &asset)
    }

    fn disable_withdrawals_on_reserve(
        env: Env,
        who: Address,
        asset: Address,
    ) -> Result<(), Error> {
        disable_withdrawals_on_reserve(&env, &who, &asset)
    }

    fn enable_reserve_stable_rate(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        enable_reserve_stable_rate(&env, &who, &asset)
    }

    fn disable_reserve_stable_rate(env: Env, who: Address, asset: Address) -> Result<(), Error> {
        disable_reserve_stable_rate(&env, &who, &asset)
    }

    fn configure_as_collateral(
        env: Env,
        who: Address,
        asset: Address,
        params: CollateralParamsInput,
    ) -> Result<(), Error> {
        configure_as_collateral(&env, &who, &asset, &params)
    }

    fn set_reserve_factor(
        env: Env,
        who: Address,
        asset: Address,
        factor: u32,
    ) -> Result<(), Error> {
        set_reserve_factor(&env, &who, &asset, factor)
    }

    fn update_project_borrower(
        env: Env,
        who: Address,
        asset: Address,
        borrower: Address,
    ) -> Result<(), Error> {
        update_project_borrower(&env, &who, &asset, &borrower)
    }

    fn update_reserve_rates(
        env: Env,
        who: Address,
        asset: Address,
        liquidity_rate: i128,
        stable_borrow_rate: i128,
    ) -> Result<(), Error> {
        update_reserve_rates(&env, &who, &asset, liquidity_rate, stable_borrow_rate)
    }

    fn set_pool_pause(env: Env, who: Address, value: bool) -> Result<(), Error> {
        set_pool_pause(&env, &who, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn deposit(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error> {
        deposit(&env, &who, &asset, amount)
    }

    fn withdraw(
        env: Env,
        who: Address,
        asset: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), Error> {
        withdraw(&env, &who, &asset, amount, &to)
    }

    fn borrow(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error> {
        borrow(&env, &who, &asset, amount)
    }

    fn repay(env: Env, who: Address, asset: Address, amount: i128) -> Result<(), Error> {
        repay(&env, &who, &asset, amount)
    }

    fn withdraw_interest(
        env: Env,
        who: Address,
        asset: Address,
        to: Address,
    ) -> Result<(), Error> {
        withdraw_interest(&env, &who, &asset, &to)
    }

    fn transfer_deposit(
        env: Env,
        from: Address,
        to: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), Error> {
        transfer_deposit(&env, &from, &to, &asset, amount)
    }

    fn get_reserve(env: Env, asset: Address) -> Option<ReserveData> {
        read_reserve(&env, &asset).ok()
    }

    fn reserves(env: Env) -> Vec<Address> {
        read_reserves(&env)
    }

    fn user_reserve_data(env: Env, who: Address, asset: Address) -> Result<UserReserveData, Error> {
        user_reserve_data(&env, &who, &asset)
    }

    fn token_balance(env: Env, token: Address, account: Address) -> i128 {
        read_token_balance(&env, &token, &account)
    }

    fn token_total_supply(env: Env, token: Address) -> i128 {
        read_token_total_supply(&env, &token)
    }

    fn reserve_liquidity(env: Env, asset: Address) -> i128 {
        read_reserve_liquidity(&env, &asset)
    }

    fn pool_admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    fn emergency_admin(env: Env) -> Result<Address, Error> {
        read_emergency_admin(&env)
    }
}
