use liquidation_calculator_interface::types::asset_summary::AssetSummary;
use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use liquidation_calculator_interface::types::position_kind::PositionKind;
use soroban_sdk::{vec, Env, Vec};

use crate::types::asset_registry::AssetRegistry;

use super::breakeven_price::solve_breakeven_price;

/// One row per position entry, deposits first
pub fn position_summary(env: &Env, position: &Position) -> Result<Vec<AssetSummary>, Error> {
    let mut registry = AssetRegistry::new(env);
    let mut rows = vec![env];

    for (kind, bucket) in [
        (PositionKind::Deposit, &position.deposits),
        (PositionKind::Borrow, &position.borrows),
    ] {
        for (asset, entry) in bucket.iter() {
            let value = registry.value(&asset, &entry)?;
            let breakeven = solve_breakeven_price(env, position, &asset, &mut registry)?;

            rows.push_back(AssetSummary {
                asset,
                kind,
                amount: entry.amount,
                price: entry.price,
                value: value.into_inner(),
                breakeven,
            });
        }
    }

    Ok(rows)
}
