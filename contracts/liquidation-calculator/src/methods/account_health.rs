use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::health_report::HealthReport;
use liquidation_calculator_interface::types::position::Position;
use soroban_sdk::Env;

use crate::types::asset_registry::AssetRegistry;
use crate::types::position_values::PositionValues;

pub fn account_health(env: &Env, position: &Position) -> Result<HealthReport, Error> {
    let mut registry = AssetRegistry::new(env);

    PositionValues::calc(position, &mut registry, None)?.report()
}
