use liquidation_calculator_interface::types::asset_config::AssetConfig;
use soroban_sdk::{Address, Env, Symbol, Vec};

pub(crate) fn initialized(e: &Env, admin: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin.clone());
    e.events().publish(topics, ());
}

pub(crate) fn asset_config_change(e: &Env, asset: &Address, config: &AssetConfig) {
    let topics = (Symbol::new(e, "asset_config_change"), asset.clone());
    e.events().publish(topics, (config.decimals, config.weight));
}

pub(crate) fn price_feed_set(e: &Env, feed: &Address, assets: &Vec<Address>) {
    let topics = (Symbol::new(e, "price_feed_set"), feed.clone());
    e.events().publish(topics, assets.clone());
}
