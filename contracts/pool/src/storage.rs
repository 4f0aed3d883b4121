use pool_interface::types::error::Error;
use pool_interface::types::reserve_data::ReserveData;
use soroban_sdk::{contracttype, vec, Address, Env, Vec};

use crate::types::interest_snapshot::InterestSnapshot;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    EmergencyAdmin,
    Pause,
    Reserves,
    ReserveAssetKey(Address),
    ReserveLiquidity(Address),
    TokenSupply(Address),
    TokenBalance(Address, Address),
    UserInterest(Address, Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_emergency_admin(env: &Env, emergency_admin: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::EmergencyAdmin, emergency_admin);
}

pub fn read_emergency_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::EmergencyAdmin)
        .ok_or(Error::Uninitialized)
}

pub fn write_pause(env: &Env, value: bool) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pause, &value);
}

pub fn paused(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn read_reserve(env: &Env, asset: &Address) -> Result<ReserveData, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::ReserveAssetKey(asset.clone()))
        .ok_or(Error::NoReserveExistForAsset)
}

pub fn write_reserve(env: &Env, asset: &Address, reserve_data: &ReserveData) {
    bump_instance(env);

    let asset_key = DataKey::ReserveAssetKey(asset.clone());
    env.storage().instance().set(&asset_key, reserve_data);
}

pub fn has_reserve(env: &Env, asset: &Address) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .has(&DataKey::ReserveAssetKey(asset.clone()))
}

pub fn read_reserves(env: &Env) -> Vec<Address> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or(vec![env])
}

pub fn write_reserves(env: &Env, reserves: &Vec<Address>) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Reserves, reserves);
}

pub fn read_reserve_liquidity(env: &Env, asset: &Address) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::ReserveLiquidity(asset.clone()))
        .unwrap_or(0)
}

/// Applies a signed delta to the underlying held for the reserve. The
/// balance must stay non-negative.
pub fn add_reserve_liquidity(env: &Env, asset: &Address, delta: i128) -> Result<(), Error> {
    bump_instance(env);

    let balance = read_reserve_liquidity(env, asset)
        .checked_add(delta)
        .ok_or(Error::MathOverflowError)?;

    if balance.is_negative() {
        return Err(Error::NotEnoughReserveLiquidity);
    }

    env.storage()
        .instance()
        .set(&DataKey::ReserveLiquidity(asset.clone()), &balance);

    Ok(())
}

pub fn read_token_total_supply(env: &Env, token: &Address) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::TokenSupply(token.clone()))
        .unwrap_or(0)
}

pub fn write_token_total_supply(env: &Env, token: &Address, total_supply: i128) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::TokenSupply(token.clone()), &total_supply);
}

pub fn read_token_balance(env: &Env, token: &Address, account: &Address) -> i128 {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::TokenBalance(token.clone(), account.clone()))
        .unwrap_or(0)
}

pub fn write_token_balance(env: &Env, token: &Address, account: &Address, balance: i128) {
    bump_instance(env);

    let key = DataKey::TokenBalance(token.clone(), account.clone());
    env.storage().instance().set(&key, &balance);
}

pub fn read_user_interest(env: &Env, asset: &Address, who: &Address) -> Option<InterestSnapshot> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::UserInterest(asset.clone(), who.clone()))
}

pub fn write_user_interest(env: &Env, asset: &Address, who: &Address, snapshot: &InterestSnapshot) {
    bump_instance(env);

    let key = DataKey::UserInterest(asset.clone(), who.clone());
    env.storage().instance().set(&key, snapshot);
}
