pub mod asset_balance;
pub mod asset_config;
pub mod asset_summary;
pub mod error;
pub mod health_report;
pub mod position;
pub mod position_entry;
pub mod position_kind;
pub mod price_result;
