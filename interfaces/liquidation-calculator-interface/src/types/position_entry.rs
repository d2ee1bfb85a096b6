use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PositionEntry {
    /// Token amount in the smallest unit of the asset
    pub amount: i128,
    /// Price of one whole token in base currency, fixed point with 10^9 denominator
    pub price: i128,
}

impl PositionEntry {
    pub fn is_valid(&self) -> bool {
        self.amount >= 0 && self.price > 0
    }
}
