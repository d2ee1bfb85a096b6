use soroban_sdk::contracttype;

/// Side from which the asset price reaches liquidation
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiquidationDirection {
    /// Liquidates once the price drops below the breakeven price
    PriceBelow,
    /// Liquidates once the price rises above the breakeven price
    PriceAbove,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BreakevenPrice {
    /// Fixed point with 10^9 denominator
    pub price: i128,
    pub direction: LiquidationDirection,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriceResult {
    Breakeven(BreakevenPrice),
    /// Position has no debt, no price liquidates it
    NoBorrow,
    /// Asset price does not move the health ratio
    NotPresent,
    /// Breakeven price is zero or negative
    Unreachable,
}
