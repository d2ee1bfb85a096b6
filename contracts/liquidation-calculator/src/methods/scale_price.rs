use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use soroban_sdk::{Address, Env};

use super::utils::validation::require_registered;

/// `change` is in basis points of percentage factor, -2_500 is -25%
pub fn scale_price(
    env: &Env,
    mut position: Position,
    asset: &Address,
    change: i32,
) -> Result<Position, Error> {
    require_registered(env, asset)?;

    position.scale_price(asset, change)?;

    Ok(position)
}
