use soroban_sdk::contracttype;

/// Price record. `price` is scaled by the feed `decimals()`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}
