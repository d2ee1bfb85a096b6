use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Health {
    /// Account carries no debt
    NoBorrow,
    /// Weighted collateral over debt, fixed point with 10^9 denominator
    Ratio(i128),
}

/// Values are expressed in base currency, fixed point with 10^9 denominator
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthReport {
    pub weighted_collateral: i128,
    pub debt: i128,
    /// Net position value: weighted collateral minus debt
    pub npv: i128,
    pub health: Health,
    /// Health ratio strictly below one
    pub liquidatable: bool,
}
