use crate::LendingPool;
use pool_interface::LendingPoolClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use crate::tests::sut::init_pool;

#[test]
fn should_store_roles() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(sut.pool.pool_admin(), sut.pool_admin);
    assert_eq!(sut.pool.emergency_admin(), sut.emergency_admin);
    assert_eq!(sut.pool.version(), 1);
    assert!(!sut.pool.paused());
    assert_eq!(sut.pool.reserves().len(), 2);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_called_twice() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let admin = Address::generate(&env);
    let emergency_admin = Address::generate(&env);

    sut.pool.initialize(&admin, &emergency_admin);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn roles_are_unset_before_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let pool = LendingPoolClient::new(&env, &env.register_contract(None, LendingPool));

    pool.pool_admin();
}
