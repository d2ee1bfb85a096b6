#![deny(warnings)]
#![no_std]

mod constants;
mod storage;

use crate::storage::*;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::types::price_data::PriceData;
use price_feed_interface::PriceFeedTrait;
use soroban_sdk::{contract, contractimpl, symbol_short, Env, Vec};

pub use crate::constants::DECIMALS;

#[contract]
pub struct PriceFeedMock;

#[contractimpl]
impl PriceFeedTrait for PriceFeedMock {
    fn base(_env: Env) -> Asset {
        Asset::Other(symbol_short!("USD"))
    }

    fn assets(env: Env) -> Vec<Asset> {
        read_assets(&env)
    }

    fn decimals(_env: Env) -> u32 {
        constants::DECIMALS
    }

    fn resolution(_env: Env) -> u32 {
        constants::RESOLUTION
    }

    fn price(env: Env, asset: Asset, timestamp: u64) -> Option<PriceData> {
        read_prices(&env, &asset)?
            .into_iter()
            .find(|p| p.timestamp == timestamp)
    }

    fn prices(env: Env, asset: Asset, records: u32) -> Option<Vec<PriceData>> {
        let prices = read_prices(&env, &asset)?;
        let len = prices.len();
        let mut latest = Vec::new(&env);

        for i in 0..records.min(len) {
            latest.push_back(prices.get_unchecked(len - 1 - i));
        }

        Some(latest)
    }

    fn lastprice(env: Env, asset: Asset) -> Option<PriceData> {
        read_prices(&env, &asset)?.last()
    }

    fn init(env: Env, asset: Asset, prices: Vec<PriceData>) {
        write_prices(&env, &asset, &prices);
    }
}
