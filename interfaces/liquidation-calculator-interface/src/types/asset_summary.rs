use soroban_sdk::{contracttype, Address};

use super::position_kind::PositionKind;
use super::price_result::PriceResult;

/// Single row of position overview
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetSummary {
    pub asset: Address,
    pub kind: PositionKind,
    pub amount: i128,
    pub price: i128,
    /// Unweighted value in base currency
    pub value: i128,
    pub breakeven: PriceResult,
}
