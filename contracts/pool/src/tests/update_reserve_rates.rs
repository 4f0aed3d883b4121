use common::{FixedI128, ONE_YEAR};

use crate::tests::sut::init_pool;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Env};

#[test]
fn should_store_rates_and_timestamp() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    env.ledger().with_mut(|li| li.timestamp = 123_456);

    let liquidity_rate = FixedI128::from_percentage(1_000).unwrap().into_inner();
    let stable_borrow_rate = FixedI128::from_percentage(1_200).unwrap().into_inner();

    sut.pool
        .update_reserve_rates(&sut.pool_admin, &asset, &liquidity_rate, &stable_borrow_rate);

    let reserve = sut.pool.get_reserve(&asset).unwrap();
    assert_eq!(reserve.liquidity_rate, liquidity_rate);
    assert_eq!(reserve.stable_borrow_rate, stable_borrow_rate);
    assert_eq!(reserve.last_update_timestamp, 123_456);
}

#[test]
fn zero_rates_are_allowed() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool.update_reserve_rates(&sut.pool_admin, &asset, &0, &0);

    let reserve = sut.pool.get_reserve(&asset).unwrap();
    assert_eq!(reserve.liquidity_rate, 0);
    assert_eq!(reserve.stable_borrow_rate, 0);
}

#[test]
fn lowering_the_rate_keeps_interest_already_earned() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let user = Address::generate(&env);
    let asset = sut.token().address.clone();

    let rate = FixedI128::from_percentage(1_000).unwrap().into_inner();
    sut.pool.update_reserve_rates(&sut.pool_admin, &asset, &rate, &0);
    sut.mint_and_deposit(&user, 1_000_000_000);

    env.ledger().with_mut(|li| li.timestamp += ONE_YEAR);

    sut.pool.update_reserve_rates(&sut.pool_admin, &asset, &0, &0);

    // the year already earned at 10% survives the rate drop
    assert_eq!(
        sut.pool.user_reserve_data(&user, &asset).accrued_interest,
        100_000_000
    );

    env.ledger().with_mut(|li| li.timestamp += ONE_YEAR);

    // and nothing accrues at the zero rate afterwards
    assert_eq!(
        sut.pool.user_reserve_data(&user, &asset).accrued_interest,
        100_000_000
    );
}

#[test]
fn raising_the_rate_does_not_backfill_past_periods() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let user = Address::generate(&env);
    let asset = sut.token().address.clone();

    sut.mint_and_deposit(&user, 1_000_000_000);

    env.ledger().with_mut(|li| li.timestamp += ONE_YEAR);

    let rate = FixedI128::from_percentage(1_000).unwrap().into_inner();
    sut.pool.update_reserve_rates(&sut.pool_admin, &asset, &rate, &0);

    assert_eq!(
        sut.pool.user_reserve_data(&user, &asset).accrued_interest,
        0
    );

    env.ledger().with_mut(|li| li.timestamp += ONE_YEAR);

    // only the year spent at 10% pays out
    assert_eq!(
        sut.pool.user_reserve_data(&user, &asset).accrued_interest,
        100_000_000
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #300)")]
fn should_fail_when_rate_is_negative() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool
        .update_reserve_rates(&sut.pool_admin, &sut.token().address, &-1, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn should_fail_when_caller_is_not_pool_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    sut.pool
        .update_reserve_rates(&stranger, &sut.token().address, &0, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_for_unknown_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool
        .update_reserve_rates(&sut.pool_admin, &Address::generate(&env), &0, &0);
}
