pub mod account_health;
pub mod breakeven_price;
pub mod initialize;
pub mod position_summary;
pub mod scale_amount;
pub mod scale_price;
pub mod set_amount;
pub mod set_asset_config;
pub mod set_price;
pub mod set_price_feed;
pub mod snapshot;

mod utils;
