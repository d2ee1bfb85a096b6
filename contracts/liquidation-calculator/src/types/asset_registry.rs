use common::FixedI128;
use liquidation_calculator_interface::types::asset_config::AssetConfig;
use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position_entry::PositionEntry;
use soroban_sdk::{Address, Env, Map};

use crate::storage::read_asset_config;

/// Read-through cache over registered asset configs
pub struct AssetRegistry<'a> {
    env: &'a Env,
    configs: Map<Address, AssetConfig>,
}

impl<'a> AssetRegistry<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self {
            env,
            configs: Map::new(env),
        }
    }

    /// Fails with `InvalidPosition` when the asset is not registered
    pub fn config(&mut self, asset: &Address) -> Result<AssetConfig, Error> {
        match self.configs.get(asset.clone()) {
            Some(config) => Ok(config),
            None => {
                let config = read_asset_config(self.env, asset).ok_or(Error::InvalidPosition)?;
                self.configs.set(asset.clone(), config.clone());

                Ok(config)
            }
        }
    }

    /// `10^decimals`, raw units in one whole token
    pub fn unit(&mut self, asset: &Address) -> Result<i128, Error> {
        let config = self.config(asset)?;

        10i128
            .checked_pow(config.decimals)
            .ok_or(Error::MathOverflowError)
    }

    pub fn weight(&mut self, asset: &Address) -> Result<FixedI128, Error> {
        let config = self.config(asset)?;

        FixedI128::from_percentage(config.weight).ok_or(Error::MathOverflowError)
    }

    /// Unweighted entry value expressed in base currency
    pub fn value(&mut self, asset: &Address, entry: &PositionEntry) -> Result<FixedI128, Error> {
        if !entry.is_valid() {
            return Err(Error::InvalidPosition);
        }

        let unit = self.unit(asset)?;

        FixedI128::from_inner(entry.price)
            .mul_rational_floor(entry.amount, unit)
            .ok_or(Error::MathOverflowError)
    }

    /// Entry value counted toward collateral power
    pub fn weighted_value(
        &mut self,
        asset: &Address,
        entry: &PositionEntry,
    ) -> Result<FixedI128, Error> {
        let weight = self.weight(asset)?;

        self.value(asset, entry)?
            .checked_mul(weight)
            .ok_or(Error::MathOverflowError)
    }
}
