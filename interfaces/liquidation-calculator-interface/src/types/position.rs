use common::{FixedI128, PERCENTAGE_FACTOR};
use soroban_sdk::{contracttype, Address, Env, Map};

use super::error::Error;
use super::position_entry::PositionEntry;
use super::position_kind::PositionKind;

/// Account deposits and borrows at one instant, keyed by asset.
///
/// Every edit either keeps `amount >= 0` and `price > 0` for all entries
/// or fails without touching the position.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub deposits: Map<Address, PositionEntry>,
    pub borrows: Map<Address, PositionEntry>,
}

impl Position {
    pub fn new(env: &Env) -> Self {
        Self {
            deposits: Map::new(env),
            borrows: Map::new(env),
        }
    }

    pub fn entry(&self, asset: &Address, kind: PositionKind) -> Option<PositionEntry> {
        self.bucket(kind).get(asset.clone())
    }

    pub fn contains(&self, asset: &Address) -> bool {
        self.deposits.contains_key(asset.clone()) || self.borrows.contains_key(asset.clone())
    }

    pub fn insert(
        &mut self,
        asset: &Address,
        kind: PositionKind,
        entry: PositionEntry,
    ) -> Result<(), Error> {
        if !entry.is_valid() {
            return Err(Error::InvalidPosition);
        }

        if self.bucket(kind).contains_key(asset.clone()) {
            return Err(Error::DuplicateAsset);
        }

        self.bucket_mut(kind).set(asset.clone(), entry);

        Ok(())
    }

    /// Overrides price of the asset in every bucket holding it
    pub fn set_price(&mut self, asset: &Address, price: i128) -> Result<(), Error> {
        if !self.contains(asset) {
            return Err(Error::UnknownAsset);
        }

        if price <= 0 {
            return Err(Error::InvalidPosition);
        }

        for kind in [PositionKind::Deposit, PositionKind::Borrow] {
            if let Some(mut entry) = self.entry(asset, kind) {
                entry.price = price;
                self.bucket_mut(kind).set(asset.clone(), entry);
            }
        }

        Ok(())
    }

    pub fn set_amount(
        &mut self,
        asset: &Address,
        kind: PositionKind,
        amount: i128,
    ) -> Result<(), Error> {
        let mut entry = self.entry(asset, kind).ok_or(Error::UnknownAsset)?;

        if amount < 0 {
            return Err(Error::InvalidPosition);
        }

        entry.amount = amount;
        self.bucket_mut(kind).set(asset.clone(), entry);

        Ok(())
    }

    /// Moves price by `change` percent, -100% is the lower bound.
    /// An asset held in both buckets must carry one price.
    pub fn scale_price(&mut self, asset: &Address, change: i32) -> Result<(), Error> {
        let deposit = self.entry(asset, PositionKind::Deposit);
        let borrow = self.entry(asset, PositionKind::Borrow);

        let current = match (deposit, borrow) {
            (Some(deposit), Some(borrow)) if deposit.price != borrow.price => {
                return Err(Error::InvalidPosition)
            }
            (Some(entry), _) | (None, Some(entry)) => entry,
            (None, None) => return Err(Error::UnknownAsset),
        };

        let price = scale_factor(change)?
            .checked_mul(FixedI128::from_inner(current.price))
            .ok_or(Error::MathOverflowError)?;

        self.set_price(asset, price.into_inner())
    }

    /// Moves amount by `change` percent, -100% is the lower bound
    pub fn scale_amount(
        &mut self,
        asset: &Address,
        kind: PositionKind,
        change: i32,
    ) -> Result<(), Error> {
        let current = self.entry(asset, kind).ok_or(Error::UnknownAsset)?;

        let amount = scale_factor(change)?
            .mul_int(current.amount)
            .ok_or(Error::MathOverflowError)?;

        self.set_amount(asset, kind, amount)
    }

    fn bucket(&self, kind: PositionKind) -> &Map<Address, PositionEntry> {
        match kind {
            PositionKind::Deposit => &self.deposits,
            PositionKind::Borrow => &self.borrows,
        }
    }

    fn bucket_mut(&mut self, kind: PositionKind) -> &mut Map<Address, PositionEntry> {
        match kind {
            PositionKind::Deposit => &mut self.deposits,
            PositionKind::Borrow => &mut self.borrows,
        }
    }
}

fn scale_factor(change: i32) -> Result<FixedI128, Error> {
    if i64::from(change) < -i64::from(PERCENTAGE_FACTOR) {
        return Err(Error::MustBeGteMinusPercentageFactor);
    }

    FixedI128::from_percentage_change(change).ok_or(Error::MathOverflowError)
}
