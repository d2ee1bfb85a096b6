use soroban_sdk::{contracttype, Address, Symbol};

/// Asset quoted by an oracle: either a Stellar token contract or an
/// off-chain ticker
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Stellar(Address),
    Other(Symbol),
}
