use pool_interface::types::error::Error;

use crate::tests::sut::init_pool;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

#[test]
fn should_store_factor() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool.set_reserve_factor(&sut.pool_admin, &asset, &1_000);

    assert_eq!(
        sut.pool
            .get_reserve(&asset)
            .unwrap()
            .configuration
            .reserve_factor,
        1_000
    );
}

#[test]
fn should_accept_max_value() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool.set_reserve_factor(&sut.pool_admin, &asset, &65_535);

    assert_eq!(
        sut.pool
            .get_reserve(&asset)
            .unwrap()
            .configuration
            .reserve_factor,
        65_535
    );
}

#[test]
fn should_leave_other_fields_untouched() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let asset = sut.token().address.clone();

    sut.pool
        .enable_borrowing_on_reserve(&sut.pool_admin, &asset, &true);
    sut.pool.set_reserve_factor(&sut.pool_admin, &asset, &1_000);

    let config = sut.pool.get_reserve(&asset).unwrap().configuration;

    assert!(config.is_active);
    assert!(!config.is_frozen);
    assert!(config.borrowing_enabled);
    assert!(config.stable_rate_enabled);
    assert!(config.deposits_enabled);
    assert!(config.withdrawals_enabled);
    assert_eq!(config.decimals, 7);
}

#[test]
fn rejected_caller_leaves_configuration_untouched() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);
    let asset = sut.token().address.clone();

    let result = sut.pool.try_set_reserve_factor(&stranger, &asset, &2_000);
    assert_eq!(result.unwrap_err().unwrap(), Error::NotPoolAdmin);

    assert_eq!(
        sut.pool
            .get_reserve(&asset)
            .unwrap()
            .configuration
            .reserve_factor,
        0
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #400)")]
fn should_fail_when_factor_above_max() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    sut.pool
        .set_reserve_factor(&sut.pool_admin, &sut.token().address, &65_536);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn should_fail_when_caller_is_not_pool_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let stranger = Address::generate(&env);

    sut.pool
        .set_reserve_factor(&stranger, &sut.token().address, &1_000);
}
