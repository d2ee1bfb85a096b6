use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    /// Negative amount, non-positive price or asset missing from the registry
    InvalidPosition = 100,
    /// Asset has no entry in the position
    UnknownAsset = 101,
    DuplicateAsset = 102,

    NoPriceFeed = 200,
    NoPriceForAsset = 201,
    InvalidAssetPrice = 202,

    MathOverflowError = 400,
    MustBeLtePercentageFactor = 401,
    MustBeGteMinusPercentageFactor = 402,
    MustBePositive = 404,
}
