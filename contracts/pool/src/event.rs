use pool_interface::types::collateral_params_input::CollateralParamsInput;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, emergency_admin: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin);
    e.events().publish(topics, emergency_admin.clone());
}

pub(crate) fn reserve_activated(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "reserve_activated"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn reserve_deactivated(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "reserve_deactivated"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn reserve_frozen(e: &Env, asset: &Address) {
    let topics = (symbol_short!("frozen"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn reserve_unfrozen(e: &Env, asset: &Address) {
    let topics = (symbol_short!("unfrozen"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn borrowing_enabled(e: &Env, asset: &Address, stable_rate_enabled: bool) {
    let topics = (Symbol::new(e, "borrowing_enabled"), asset.clone());
    e.events().publish(topics, stable_rate_enabled);
}

pub(crate) fn borrowing_disabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "borrowing_disabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn deposits_enabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "deposits_enabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn deposits_disabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "deposits_disabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn withdrawals_enabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "withdrawals_enabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn withdrawals_disabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "withdrawals_disabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn stable_rate_enabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "stable_rate_enabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn stable_rate_disabled(e: &Env, asset: &Address) {
    let topics = (Symbol::new(e, "stable_rate_disabled"), asset.clone());
    e.events().publish(topics, ());
}

pub(crate) fn collat_config_change(e: &Env, asset: &Address, params: &CollateralParamsInput) {
    let topics = (Symbol::new(e, "collat_config_change"), asset.clone());
    e.events().publish(
        topics,
        (
            params.ltv,
            params.liquidation_threshold,
            params.liquidation_bonus,
        ),
    );
}

pub(crate) fn reserve_factor_changed(e: &Env, asset: &Address, factor: u32) {
    let topics = (Symbol::new(e, "reserve_factor_changed"), asset.clone());
    e.events().publish(topics, factor);
}

pub(crate) fn project_borrower_updated(e: &Env, asset: &Address, borrower: &Address) {
    let topics = (Symbol::new(e, "borrower_updated"), asset.clone());
    e.events().publish(topics, borrower.clone());
}

pub(crate) fn reserve_rates_updated(
    e: &Env,
    asset: &Address,
    liquidity_rate: i128,
    stable_borrow_rate: i128,
) {
    let topics = (Symbol::new(e, "rates_updated"), asset.clone());
    e.events().publish(topics, (liquidity_rate, stable_borrow_rate));
}

pub(crate) fn pool_paused(e: &Env, value: bool) {
    let topics = (symbol_short!("paused"),);
    e.events().publish(topics, value);
}

pub(crate) fn deposit(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("deposit"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn withdraw(e: &Env, who: &Address, asset: &Address, to: &Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), who.clone());
    e.events().publish(topics, (to, asset.clone(), amount));
}

pub(crate) fn borrow(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("borrow"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn repay(e: &Env, who: &Address, asset: &Address, amount: i128) {
    let topics = (symbol_short!("repay"), who.clone());
    e.events().publish(topics, (asset.clone(), amount));
}

pub(crate) fn interest_withdrawn(
    e: &Env,
    who: &Address,
    asset: &Address,
    to: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "interest_withdrawn"), who.clone());
    e.events().publish(topics, (to, asset.clone(), amount));
}

pub(crate) fn deposit_transferred(
    e: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) {
    let topics = (Symbol::new(e, "deposit_transferred"), from.clone());
    e.events().publish(topics, (to, asset.clone(), amount));
}
