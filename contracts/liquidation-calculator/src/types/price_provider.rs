use common::FixedI128;
use liquidation_calculator_interface::types::error::Error;
use price_feed_interface::types::asset::Asset;
use price_feed_interface::PriceFeedClient;
use soroban_sdk::{Address, Env, Map};

use crate::storage::read_price_feed;

pub struct PriceProvider<'a> {
    env: &'a Env,
    feed_decimals: Map<Address, u32>,
    prices: Map<Address, i128>,
}

impl<'a> PriceProvider<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            feed_decimals: Map::new(env),
            prices: Map::new(env),
        }
    }

    /// Last feed price of one whole token, fixed point with 10^9 denominator
    pub fn price(&mut self, asset: &Address) -> Result<i128, Error> {
        if let Some(price) = self.prices.get(asset.clone()) {
            return Ok(price);
        }

        let feed = read_price_feed(self.env, asset)?;
        let client = PriceFeedClient::new(self.env, &feed);

        let price_data = client
            .lastprice(&Asset::Stellar(asset.clone()))
            .ok_or(Error::NoPriceForAsset)?;

        let decimals = self.decimals(&client, &feed);

        let price = 10i128
            .checked_pow(decimals)
            .and_then(|denom| FixedI128::from_rational(price_data.price, denom))
            .ok_or(Error::InvalidAssetPrice)?;

        if !price.is_positive() {
            return Err(Error::InvalidAssetPrice);
        }

        self.prices.set(asset.clone(), price.into_inner());

        Ok(price.into_inner())
    }

    fn decimals(&mut self, client: &PriceFeedClient, feed: &Address) -> u32 {
        match self.feed_decimals.get(feed.clone()) {
            Some(decimals) => decimals,
            None => {
                let decimals = client.decimals();
                self.feed_decimals.set(feed.clone(), decimals);

                decimals
            }
        }
    }
}
