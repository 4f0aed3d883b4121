use common::{MAX_RESERVE_FACTOR, PERCENTAGE_FACTOR};
use pool_interface::types::collateral_params_input::CollateralParamsInput;
use pool_interface::types::error::Error;
use pool_interface::types::reserve_data::ReserveData;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, has_reserve, paused, read_admin, read_emergency_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

/// Caller-identity check for the standard configuration plane.
pub fn require_pool_admin(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    let admin = read_admin(env)?;
    assert_with_error!(env, who.eq(&admin), Error::NotPoolAdmin);

    Ok(())
}

/// Caller-identity check for the pool-wide pause switch only.
pub fn require_emergency_admin(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    let emergency_admin = read_emergency_admin(env)?;
    assert_with_error!(env, who.eq(&emergency_admin), Error::NotEmergencyAdmin);

    Ok(())
}

/// Borrowing is a permissioned credit line: only the configured project
/// borrower or the emergency admin may draw on a reserve.
pub fn require_project_borrower(
    env: &Env,
    who: &Address,
    reserve: &ReserveData,
) -> Result<(), Error> {
    let emergency_admin = read_emergency_admin(env)?;

    let is_borrower = reserve
        .project_borrower
        .as_ref()
        .map_or(false, |borrower| borrower.eq(who));

    assert_with_error!(
        env,
        is_borrower || who.eq(&emergency_admin),
        Error::NotProjectBorrower
    );

    Ok(())
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_active_reserve(env: &Env, reserve: &ReserveData) {
    assert_with_error!(env, reserve.configuration.is_active, Error::NoActiveReserve);
}

pub fn require_not_frozen(env: &Env, reserve: &ReserveData) {
    assert_with_error!(env, !reserve.configuration.is_frozen, Error::ReserveFrozen);
}

pub fn require_borrowing_enabled(env: &Env, reserve: &ReserveData) {
    assert_with_error!(
        env,
        reserve.configuration.borrowing_enabled,
        Error::BorrowingDisabled
    );
}

pub fn require_deposits_enabled(env: &Env, reserve: &ReserveData) {
    assert_with_error!(
        env,
        reserve.configuration.deposits_enabled,
        Error::DepositsDisabled
    );
}

pub fn require_withdrawals_enabled(env: &Env, reserve: &ReserveData) {
    assert_with_error!(
        env,
        reserve.configuration.withdrawals_enabled,
        Error::WithdrawalsDisabled
    );
}

pub fn require_uninitialized_reserve(env: &Env, asset: &Address) {
    assert_with_error!(
        env,
        !has_reserve(env, asset),
        Error::ReserveAlreadyInitialized
    );
}

pub fn require_valid_reserve_factor(env: &Env, factor: u32) {
    assert_with_error!(env, factor <= MAX_RESERVE_FACTOR, Error::InvalidReserveFactor);
}

/// All-zero params clear the collateral configuration; any other combination
/// must describe a usable collateral: ltv bounded by the threshold, the
/// threshold bounded by 100% and a bonus strictly above 100%.
pub fn require_valid_collateral_params(env: &Env, params: &CollateralParamsInput) {
    if params.liquidation_threshold == 0 {
        assert_with_error!(env, params.ltv == 0, Error::InvalidLtv);
        assert_with_error!(
            env,
            params.liquidation_bonus == 0,
            Error::InvalidLiquidationBonus
        );
        return;
    }

    assert_with_error!(
        env,
        params.ltv <= params.liquidation_threshold,
        Error::InvalidLtv
    );
    assert_with_error!(
        env,
        params.liquidation_threshold <= PERCENTAGE_FACTOR,
        Error::InvalidLiquidationThreshold
    );
    assert_with_error!(
        env,
        params.liquidation_bonus > PERCENTAGE_FACTOR,
        Error::InvalidLiquidationBonus
    );
}

pub fn require_non_negative_rate(env: &Env, rate: i128) {
    assert_with_error!(env, rate >= 0, Error::InvalidAmount);
}
