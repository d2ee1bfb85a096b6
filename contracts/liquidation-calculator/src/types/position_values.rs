use common::FixedI128;
use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::health_report::{Health, HealthReport};
use liquidation_calculator_interface::types::position::Position;
use soroban_sdk::Address;

use super::asset_registry::AssetRegistry;

/// Position sums expressed in base currency
#[derive(Debug, Clone, Copy)]
pub struct PositionValues {
    /// Sum of deposit values scaled by asset weight
    pub weighted_collateral: FixedI128,
    /// Sum of borrow values
    pub debt: FixedI128,
}

impl PositionValues {
    /// Sums every entry of the position, validating it against the registry.
    /// Entries of `excluded` asset are validated but left out of the sums.
    pub fn calc(
        position: &Position,
        registry: &mut AssetRegistry,
        excluded: Option<&Address>,
    ) -> Result<Self, Error> {
        let mut weighted_collateral = FixedI128::ZERO;
        let mut debt = FixedI128::ZERO;

        for (asset, deposit) in position.deposits.iter() {
            let weighted_value = registry.weighted_value(&asset, &deposit)?;

            if excluded != Some(&asset) {
                weighted_collateral = weighted_collateral
                    .checked_add(weighted_value)
                    .ok_or(Error::MathOverflowError)?;
            }
        }

        for (asset, borrow) in position.borrows.iter() {
            let value = registry.value(&asset, &borrow)?;

            if excluded != Some(&asset) {
                debt = debt.checked_add(value).ok_or(Error::MathOverflowError)?;
            }
        }

        Ok(Self {
            weighted_collateral,
            debt,
        })
    }

    pub fn health(&self) -> Result<Health, Error> {
        if self.debt.is_zero() {
            return Ok(Health::NoBorrow);
        }

        self.weighted_collateral
            .checked_div(self.debt)
            .map(|ratio| Health::Ratio(ratio.into_inner()))
            .ok_or(Error::MathOverflowError)
    }

    /// Same as health ratio below one, without rounding of the ratio
    pub fn is_liquidatable(&self) -> bool {
        self.weighted_collateral < self.debt
    }

    pub fn npv(&self) -> Result<FixedI128, Error> {
        self.weighted_collateral
            .checked_sub(self.debt)
            .ok_or(Error::MathOverflowError)
    }

    pub fn report(&self) -> Result<HealthReport, Error> {
        Ok(HealthReport {
            weighted_collateral: self.weighted_collateral.into_inner(),
            debt: self.debt.into_inner(),
            npv: self.npv()?.into_inner(),
            health: self.health()?,
            liquidatable: self.is_liquidatable(),
        })
    }
}
