use crate::tests::sut::{
    example_position, fixed, fixed_rational, init_calculator, set_feed_price, Sut,
};
use crate::*;
use common::FixedI128;
use liquidation_calculator_interface::types::health_report::Health;
use liquidation_calculator_interface::types::position_entry::PositionEntry;
use liquidation_calculator_interface::types::price_result::{
    BreakevenPrice, LiquidationDirection,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::vec;

fn breakeven(price: i128, direction: LiquidationDirection) -> PriceResult {
    PriceResult::Breakeven(BreakevenPrice { price, direction })
}

fn is_liquidatable_at(sut: &Sut, position: &Position, asset: &Address, price: i128) -> bool {
    let position = sut.calculator.set_price(position, asset, &price);

    sut.calculator.account_health(&position).liquidatable
}

#[test]
fn should_solve_for_collateral_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = example_position(&env, &sut);

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(0)),
        breakeven(6_250_000_000, LiquidationDirection::PriceBelow)
    );

    assert!(is_liquidatable_at(
        &sut,
        &position,
        &sut.asset(0),
        fixed_rational(6_249, 1_000)
    ));
    assert!(!is_liquidatable_at(
        &sut,
        &position,
        &sut.asset(0),
        fixed_rational(6_251, 1_000)
    ));
}

#[test]
fn should_solve_for_debt_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = example_position(&env, &sut);

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(1)),
        breakeven(fixed(16), LiquidationDirection::PriceAbove)
    );

    assert!(is_liquidatable_at(
        &sut,
        &position,
        &sut.asset(1),
        fixed_rational(16_001, 1_000)
    ));
    assert!(!is_liquidatable_at(
        &sut,
        &position,
        &sut.asset(1),
        fixed_rational(15_999, 1_000)
    ));
}

fn assert_breakeven_boundary(sut: &Sut, position: &Position, asset: &Address, price: i128) {
    let at_price = sut.calculator.set_price(position, asset, &price);
    let report = sut.calculator.account_health(&at_price);

    assert!(!report.liquidatable);
    match report.health {
        Health::Ratio(ratio) => assert!((ratio - FixedI128::ONE.into_inner()).abs() <= 10),
        Health::NoBorrow => panic!("position has debt"),
    }
}

#[test]
fn should_stay_healthy_at_inexact_collateral_breakeven() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(1, 7)],
        &vec![&env, sut.balance(2, 20)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(1)),
        breakeven(4_761_904_762, LiquidationDirection::PriceBelow)
    );

    assert_breakeven_boundary(&sut, &position, &sut.asset(1), 4_761_904_762);
    assert!(is_liquidatable_at(&sut, &position, &sut.asset(1), 4_761_904_761));
}

#[test]
fn should_stay_healthy_at_inexact_debt_breakeven() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(2, 20)],
        &vec![&env, sut.balance(1, 7)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(1)),
        breakeven(2_857_142_857, LiquidationDirection::PriceAbove)
    );

    assert_breakeven_boundary(&sut, &position, &sut.asset(1), 2_857_142_857);
    assert!(is_liquidatable_at(&sut, &position, &sut.asset(1), 2_857_142_858));
}

#[test]
fn should_count_dust_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let dust = Address::generate(&env);

    sut.calculator.set_asset_config(
        &dust,
        &AssetConfig {
            decimals: 18,
            weight: 10_000,
        },
    );
    set_feed_price(&env, &sut.price_feed, &dust, 1);
    sut.calculator
        .set_price_feed(&sut.price_feed.address, &vec![&env, dust.clone()]);

    let position = sut.calculator.snapshot(
        &vec![
            &env,
            AssetBalance {
                asset: dust.clone(),
                amount: 1,
            },
        ],
        &vec![&env, sut.balance(2, 1)],
    );

    let price = 10i128.pow(27);

    assert_eq!(
        sut.calculator.breakeven_price(&position, &dust),
        breakeven(price, LiquidationDirection::PriceBelow)
    );

    assert_breakeven_boundary(&sut, &position, &dust, price);
    assert!(is_liquidatable_at(&sut, &position, &dust, price - 1));
}

#[test]
fn should_return_unreachable() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(0, 100), sut.balance(2, 600)],
        &vec![&env, sut.balance(1, 50)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(0)),
        PriceResult::Unreachable
    );
    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(2)),
        PriceResult::Unreachable
    );
    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(1)),
        breakeven(fixed(28), LiquidationDirection::PriceAbove)
    );
}

#[test]
fn should_return_no_borrow() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut
        .calculator
        .snapshot(&vec![&env, sut.balance(0, 100)], &vec![&env]);

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(0)),
        PriceResult::NoBorrow
    );
}

#[test]
fn should_return_not_present() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(0, 100), sut.balance(2, 0)],
        &vec![&env, sut.balance(1, 50)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(2)),
        PriceResult::NotPresent
    );
}

#[test]
fn should_prefer_not_present_over_no_borrow() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(0, 100)],
        &vec![&env, sut.balance(1, 0)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(1)),
        PriceResult::NotPresent
    );
    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(0)),
        PriceResult::NoBorrow
    );
}

#[test]
fn should_net_deposit_and_borrow_of_same_asset() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(0, 100)],
        &vec![&env, sut.balance(0, 20), sut.balance(1, 50)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(0)),
        breakeven(8_333_333_334, LiquidationDirection::PriceBelow)
    );

    assert!(is_liquidatable_at(
        &sut,
        &position,
        &sut.asset(0),
        fixed_rational(8_332, 1_000)
    ));
    assert!(!is_liquidatable_at(
        &sut,
        &position,
        &sut.asset(0),
        fixed_rational(8_334, 1_000)
    ));
}

#[test]
fn should_flip_direction_when_borrow_dominates() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = sut.calculator.snapshot(
        &vec![&env, sut.balance(0, 10), sut.balance(2, 1_000)],
        &vec![&env, sut.balance(0, 20)],
    );

    assert_eq!(
        sut.calculator.breakeven_price(&position, &sut.asset(0)),
        breakeven(83_333_333_333, LiquidationDirection::PriceAbove)
    );
}

#[test]
fn should_not_modify_position() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = example_position(&env, &sut);
    let before = sut.calculator.account_health(&position);

    sut.calculator.breakeven_price(&position, &sut.asset(0));

    assert_eq!(sut.calculator.account_health(&position), before);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_asset_not_in_position() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = example_position(&env, &sut);

    sut.calculator.breakeven_price(&position, &sut.asset(2));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_asset_unknown() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let position = example_position(&env, &sut);

    sut.calculator
        .breakeven_price(&position, &Address::generate(&env));
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_position_invalid() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_calculator(&env);
    let mut position = example_position(&env, &sut);
    position.borrows.set(
        sut.asset(2),
        PositionEntry {
            amount: -5,
            price: fixed(1),
        },
    );

    sut.calculator.breakeven_price(&position, &sut.asset(0));
}
