use liquidation_calculator_interface::types::asset_config::AssetConfig;
use liquidation_calculator_interface::types::error::Error;
use soroban_sdk::{contracttype, vec, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Assets,
    AssetConfig(Address),
    PriceFeed(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn read_asset_config(env: &Env, asset: &Address) -> Option<AssetConfig> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::AssetConfig(asset.clone()))
}

pub fn write_asset_config(env: &Env, asset: &Address, config: &AssetConfig) {
    bump_instance(env);

    let asset_key = DataKey::AssetConfig(asset.clone());

    if !env.storage().instance().has(&asset_key) {
        let mut assets = read_assets(env);
        assets.push_back(asset.clone());
        env.storage().instance().set(&DataKey::Assets, &assets);
    }

    env.storage().instance().set(&asset_key, config);
}

pub fn read_assets(env: &Env) -> Vec<Address> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .unwrap_or(vec![env])
}

pub fn write_price_feed(env: &Env, feed: &Address, assets: &Vec<Address>) {
    bump_instance(env);

    for asset in assets.iter() {
        env.storage().instance().set(&DataKey::PriceFeed(asset), feed);
    }
}

pub fn read_price_feed(env: &Env, asset: &Address) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::PriceFeed(asset.clone()))
        .ok_or(Error::NoPriceFeed)
}
