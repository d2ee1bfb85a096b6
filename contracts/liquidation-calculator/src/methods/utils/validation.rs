use common::PERCENTAGE_FACTOR;
use liquidation_calculator_interface::types::asset_config::AssetConfig;
use liquidation_calculator_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, read_admin};
use crate::types::asset_registry::AssetRegistry;

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

pub fn require_valid_asset_config(env: &Env, config: &AssetConfig) {
    require_positive(env, config.weight.into());
    require_lte_percentage_factor(env, config.weight);
    assert_with_error!(
        env,
        10i128.checked_pow(config.decimals).is_some(),
        Error::MathOverflowError
    );
}

pub fn require_lte_percentage_factor(env: &Env, value: u32) {
    assert_with_error!(
        env,
        value <= PERCENTAGE_FACTOR,
        Error::MustBeLtePercentageFactor
    );
}

pub fn require_positive(env: &Env, value: i128) {
    assert_with_error!(env, value > 0, Error::MustBePositive);
}

/// Edited asset must be known to the registry
pub fn require_registered(env: &Env, asset: &Address) -> Result<(), Error> {
    AssetRegistry::new(env).config(asset).map(|_| ())
}
