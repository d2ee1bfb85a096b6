use liquidation_calculator_interface::types::asset_config::AssetConfig;
use liquidation_calculator_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_asset_config;

use super::utils::validation::{require_admin, require_valid_asset_config};

pub fn set_asset_config(env: &Env, asset: &Address, config: &AssetConfig) -> Result<(), Error> {
    require_admin(env)?;
    require_valid_asset_config(env, config);

    write_asset_config(env, asset, config);
    event::asset_config_change(env, asset, config);

    Ok(())
}
