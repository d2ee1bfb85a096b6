#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Vec};
use types::asset_balance::AssetBalance;
use types::asset_config::AssetConfig;
use types::asset_summary::AssetSummary;
use types::error::Error;
use types::health_report::HealthReport;
use types::position::Position;
use types::position_kind::PositionKind;
use types::price_result::PriceResult;

pub mod types;

pub struct Spec;

/// Interface for liquidation calculator
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LiquidationCalculatorClient")]
pub trait LiquidationCalculatorTrait {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;

    fn admin(env: Env) -> Option<Address>;

    fn version() -> u32;

    fn set_asset_config(env: Env, asset: Address, config: AssetConfig) -> Result<(), Error>;

    fn asset_config(env: Env, asset: Address) -> Option<AssetConfig>;

    fn assets(env: Env) -> Vec<Address>;

    fn set_price_feed(env: Env, feed: Address, assets: Vec<Address>) -> Result<(), Error>;

    fn price_feed(env: Env, asset: Address) -> Option<Address>;

    /// Builds position from raw balances priced by the bound feeds
    fn snapshot(
        env: Env,
        deposits: Vec<AssetBalance>,
        borrows: Vec<AssetBalance>,
    ) -> Result<Position, Error>;

    fn set_price(
        env: Env,
        position: Position,
        asset: Address,
        price: i128,
    ) -> Result<Position, Error>;

    fn set_amount(
        env: Env,
        position: Position,
        asset: Address,
        kind: PositionKind,
        amount: i128,
    ) -> Result<Position, Error>;

    fn scale_price(
        env: Env,
        position: Position,
        asset: Address,
        change: i32,
    ) -> Result<Position, Error>;

    fn scale_amount(
        env: Env,
        position: Position,
        asset: Address,
        kind: PositionKind,
        change: i32,
    ) -> Result<Position, Error>;

    fn account_health(env: Env, position: Position) -> Result<HealthReport, Error>;

    fn breakeven_price(env: Env, position: Position, asset: Address)
        -> Result<PriceResult, Error>;

    fn position_summary(env: Env, position: Position) -> Result<Vec<AssetSummary>, Error>;
}
