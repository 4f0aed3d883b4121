use crate::tests::sut::init_pool;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn should_deactivate_and_activate() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool.deactivate_reserve(&sut.pool_admin, &asset);
    assert!(!sut.pool.get_reserve(&asset).unwrap().configuration.is_active);

    sut.pool.activate_reserve(&sut.pool_admin, &asset);
    assert!(sut.pool.get_reserve(&asset).unwrap().configuration.is_active);
}

#[test]
fn should_deactivate_after_all_deposits_are_withdrawn() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let user = Address::generate(&env);
    let asset = sut.token().address.clone();

    sut.mint_and_deposit(&user, 1_000_000_000);
    sut.pool.withdraw(&user, &asset, &i128::MAX, &user);

    sut.pool.deactivate_reserve(&sut.pool_admin, &asset);

    assert!(!sut.pool.get_reserve(&asset).unwrap().configuration.is_active);
}

#[test]
fn activation_restores_operations() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let user = Address::generate(&env);
    let asset = sut.token().address.clone();

    sut.pool.deactivate_reserve(&sut.pool_admin, &asset);
    sut.pool.activate_reserve(&sut.pool_admin, &asset);

    sut.mint_and_deposit(&user, 1_000_000_000);

    assert_eq!(sut.pool.reserve_liquidity(&asset), 1_000_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #103)")]
fn should_fail_to_deactivate_with_outstanding_deposits() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let user = Address::generate(&env);
    let asset = sut.token().address.clone();

    sut.mint_and_deposit(&user, 1_000_000_000);

    sut.pool.deactivate_reserve(&sut.pool_admin, &asset);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn deactivate_should_fail_when_caller_is_not_pool_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    sut.pool.deactivate_reserve(&stranger, &sut.token().address);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn activate_should_fail_when_caller_is_not_pool_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    sut.pool.activate_reserve(&stranger, &sut.token().address);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_for_unknown_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool
        .deactivate_reserve(&sut.pool_admin, &Address::generate(&env));
}
