use liquidation_calculator_interface::types::asset_balance::AssetBalance;
use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use liquidation_calculator_interface::types::position_entry::PositionEntry;
use liquidation_calculator_interface::types::position_kind::PositionKind;
use soroban_sdk::{Env, Vec};

use crate::types::asset_registry::AssetRegistry;
use crate::types::price_provider::PriceProvider;

pub fn snapshot(
    env: &Env,
    deposits: &Vec<AssetBalance>,
    borrows: &Vec<AssetBalance>,
) -> Result<Position, Error> {
    let mut registry = AssetRegistry::new(env);
    let mut price_provider = PriceProvider::new(env);
    let mut position = Position::new(env);

    for (kind, balances) in [
        (PositionKind::Deposit, deposits),
        (PositionKind::Borrow, borrows),
    ] {
        for balance in balances.iter() {
            registry.config(&balance.asset)?;

            if balance.amount < 0 {
                return Err(Error::InvalidPosition);
            }

            let price = price_provider.price(&balance.asset)?;

            position.insert(
                &balance.asset,
                kind,
                PositionEntry {
                    amount: balance.amount,
                    price,
                },
            )?;
        }
    }

    Ok(position)
}
