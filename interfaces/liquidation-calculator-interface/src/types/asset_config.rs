use soroban_sdk::contracttype;

/// Asset registry record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetConfig {
    /// Token decimals, raw amounts are normalized by 10^decimals
    pub decimals: u32,
    /// Specifies what fraction of the deposited value counts toward
    /// the collateral power (0%, 100%].
    pub weight: u32,
}
