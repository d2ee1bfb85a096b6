use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use liquidation_calculator_interface::types::position_kind::PositionKind;
use soroban_sdk::{Address, Env};

use super::utils::validation::require_registered;

pub fn set_amount(
    env: &Env,
    mut position: Position,
    asset: &Address,
    kind: PositionKind,
    amount: i128,
) -> Result<Position, Error> {
    require_registered(env, asset)?;

    position.set_amount(asset, kind, amount)?;

    Ok(position)
}
