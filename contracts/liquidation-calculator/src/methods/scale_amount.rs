use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use liquidation_calculator_interface::types::position_kind::PositionKind;
use soroban_sdk::{Address, Env};

use super::utils::validation::require_registered;

pub fn scale_amount(
    env: &Env,
    mut position: Position,
    asset: &Address,
    kind: PositionKind,
    change: i32,
) -> Result<Position, Error> {
    require_registered(env, asset)?;

    position.scale_amount(asset, kind, change)?;

    Ok(position)
}
