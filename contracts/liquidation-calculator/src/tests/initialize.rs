use crate::tests::sut::{create_calculator_contract, init_calculator};
use crate::*;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, IntoVal, Symbol};

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_already_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);

    sut.calculator.initialize(&Address::generate(&env));
}

#[test]
fn should_set_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);

    assert_eq!(sut.calculator.admin(), Some(sut.admin.clone()));
    assert_eq!(sut.calculator.version(), 1);
}

#[test]
fn should_emit_events() {
    let env = Env::default();

    let admin = Address::generate(&env);
    let calculator = create_calculator_contract(&env, &admin);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                calculator.address.clone(),
                (Symbol::new(&env, "initialize"), admin).into_val(&env),
                ().into_val(&env)
            ),
        ]
    );
}
