use crate::tests::sut::init_pool;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn enable_borrowing_decides_stable_rate_flag() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool
        .enable_borrowing_on_reserve(&sut.pool_admin, &asset, &true);

    let config = sut.pool.get_reserve(&asset).unwrap().configuration;
    assert!(config.borrowing_enabled);
    assert!(config.stable_rate_enabled);

    sut.pool
        .enable_borrowing_on_reserve(&sut.pool_admin, &asset, &false);

    let config = sut.pool.get_reserve(&asset).unwrap().configuration;
    assert!(config.borrowing_enabled);
    assert!(!config.stable_rate_enabled);
}

#[test]
fn disable_borrowing_keeps_stable_rate_flag() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool
        .enable_borrowing_on_reserve(&sut.pool_admin, &asset, &true);
    sut.pool
        .disable_borrowing_on_reserve(&sut.pool_admin, &asset);

    let config = sut.pool.get_reserve(&asset).unwrap().configuration;
    assert!(!config.borrowing_enabled);
    assert!(config.stable_rate_enabled);
}

#[test]
fn should_toggle_flag_independently() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool
        .enable_reserve_stable_rate(&sut.pool_admin, &asset);
    assert!(
        sut.pool
            .get_reserve(&asset)
            .unwrap()
            .configuration
            .stable_rate_enabled
    );

    sut.pool
        .disable_reserve_stable_rate(&sut.pool_admin, &asset);
    assert!(
        !sut.pool
            .get_reserve(&asset)
            .unwrap()
            .configuration
            .stable_rate_enabled
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn enable_should_fail_when_caller_is_not_pool_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    sut.pool
        .enable_reserve_stable_rate(&stranger, &sut.token().address);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn disable_should_fail_when_caller_is_not_pool_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    sut.pool
        .disable_reserve_stable_rate(&stranger, &sut.token().address);
}
