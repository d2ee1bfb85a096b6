pub mod asset_registry;
pub mod position_values;
pub mod price_provider;
