use soroban_sdk::{contracttype, Address};

/// Raw account balance handed over by the account data source
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetBalance {
    pub asset: Address,
    pub amount: i128,
}
