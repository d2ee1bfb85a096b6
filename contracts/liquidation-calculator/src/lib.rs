#![deny(warnings)]
#![no_std]

use liquidation_calculator_interface::types::{
    asset_balance::AssetBalance, asset_config::AssetConfig, asset_summary::AssetSummary,
    error::Error, health_report::HealthReport, position::Position, position_kind::PositionKind,
    price_result::PriceResult,
};
use liquidation_calculator_interface::LiquidationCalculatorTrait;
use methods::{
    account_health::account_health, breakeven_price::breakeven_price, initialize::initialize,
    position_summary::position_summary, scale_amount::scale_amount, scale_price::scale_price,
    set_amount::set_amount, set_asset_config::set_asset_config, set_price::set_price,
    set_price_feed::set_price_feed, snapshot::snapshot,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LiquidationCalculator;

#[contractimpl]
impl LiquidationCalculatorTrait for LiquidationCalculator {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        initialize(&env, &admin)
    }

    fn admin(env: Env) -> Option<Address> {
        read_admin(&env).ok()
    }

    fn version() -> u32 {
        1
    }

    fn set_asset_config(env: Env, asset: Address, config: AssetConfig) -> Result<(), Error> {
        set_asset_config(&env, &asset, &config)
    }

    fn asset_config(env: Env, asset: Address) -> Option<AssetConfig> {
        read_asset_config(&env, &asset)
    }

    fn assets(env: Env) -> Vec<Address> {
        read_assets(&env)
    }

    fn set_price_feed(env: Env, feed: Address, assets: Vec<Address>) -> Result<(), Error> {
        set_price_feed(&env, &feed, &assets)
    }

    fn price_feed(env: Env, asset: Address) -> Option<Address> {
        read_price_feed(&env, &asset).ok()
    }

    fn snapshot(
        env: Env,
        deposits: Vec<AssetBalance>,
        borrows: Vec<AssetBalance>,
    ) -> Result<Position, Error> {
        snapshot(&env, &deposits, &borrows)
    }

    fn set_price(
        env: Env,
        position: Position,
        asset: Address,
        price: i128,
    ) -> Result<Position, Error> {
        set_price(&env, position, &asset, price)
    }

    fn set_amount(
        env: Env,
        position: Position,
        asset: Address,
        kind: PositionKind,
        amount: i128,
    ) -> Result<Position, Error> {
        set_amount(&env, position, &asset, kind, amount)
    }

    fn scale_price(
        env: Env,
        position: Position,
        asset: Address,
        change: i32,
    ) -> Result<Position, Error> {
        scale_price(&env, position, &asset, change)
    }

    fn scale_amount(
        env: Env,
        position: Position,
        asset: Address,
        kind: PositionKind,
        change: i32,
    ) -> Result<Position, Error> {
        scale_amount(&env, position, &asset, kind, change)
    }

    fn account_health(env: Env, position: Position) -> Result<HealthReport, Error> {
        account_health(&env, &position)
    }

    fn breakeven_price(
        env: Env,
        position: Position,
        asset: Address,
    ) -> Result<PriceResult, Error> {
        breakeven_price(&env, &position, &asset)
    }

    fn position_summary(env: Env, position: Position) -> Result<Vec<AssetSummary>, Error> {
        position_summary(&env, &position)
    }
}
