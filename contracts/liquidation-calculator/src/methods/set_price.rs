use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use soroban_sdk::{Address, Env};

use super::utils::validation::require_registered;

pub fn set_price(
    env: &Env,
    mut position: Position,
    asset: &Address,
    price: i128,
) -> Result<Position, Error> {
    require_registered(env, asset)?;

    position.set_price(asset, price)?;

    Ok(position)
}
