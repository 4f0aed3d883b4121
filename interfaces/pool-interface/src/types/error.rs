use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,
    NotPoolAdmin = 3,
    NotEmergencyAdmin = 4,
    NotProjectBorrower = 5,

    NoReserveExistForAsset = 100,
    ReserveAlreadyInitialized = 101,
    ReservesMaxCapacityExceeded = 102,
    ReserveLiquidityNotZero = 103,

    NoActiveReserve = 200,
    ReserveFrozen = 201,
    BorrowingDisabled = 202,
    DepositsDisabled = 203,
    WithdrawalsDisabled = 204,

    InvalidAmount = 300,
    NotEnoughAvailableUserBalance = 301,
    NotEnoughReserveLiquidity = 302,
    MustHaveDebt = 303,

    InvalidReserveFactor = 400,
    InvalidLtv = 401,
    InvalidLiquidationThreshold = 402,
    InvalidLiquidationBonus = 403,
    MathOverflowError = 500,
}
