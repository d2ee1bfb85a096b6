use common::{FixedI128, PERCENTAGE_FACTOR};
use liquidation_calculator_interface::types::error::Error;
use liquidation_calculator_interface::types::position::Position;
use liquidation_calculator_interface::types::position_kind::PositionKind;
use liquidation_calculator_interface::types::price_result::{
    BreakevenPrice, LiquidationDirection, PriceResult,
};
use soroban_sdk::{log, Address, Env};

use crate::types::asset_registry::AssetRegistry;
use crate::types::position_values::PositionValues;

const MAX_SETTLE_STEPS: u32 = 4;

pub fn breakeven_price(
    env: &Env,
    position: &Position,
    asset: &Address,
) -> Result<PriceResult, Error> {
    let mut registry = AssetRegistry::new(env);

    solve_breakeven_price(env, position, asset, &mut registry)
}

/// Price of `asset` at which weighted collateral equals debt, every other
/// price and amount of the position held fixed.
///
/// With `p` the asset price, `C(p) = C_other + d * w * p` and
/// `B(p) = B_other + b * p`, where `d`/`b` are the deposited/borrowed amounts
/// of the asset. `C(p) = B(p)` gives `p = (B_other - C_other) / (d * w - b)`.
///
/// Reported price is the closest one at which the position is not liquidatable.
pub fn solve_breakeven_price(
    env: &Env,
    position: &Position,
    asset: &Address,
    registry: &mut AssetRegistry,
) -> Result<PriceResult, Error> {
    if !position.contains(asset) {
        return Err(Error::UnknownAsset);
    }

    let total = PositionValues::calc(position, registry, None)?;

    let sensitivity = PriceSensitivity::calc(position, asset, registry)?;

    if sensitivity.net == 0 {
        log!(env, "breakeven: asset price does not affect health", asset.clone());
        return Ok(PriceResult::NotPresent);
    }

    if total.debt.is_zero() {
        return Ok(PriceResult::NoBorrow);
    }

    let other = PositionValues::calc(position, registry, Some(asset))?;

    let shortfall = other
        .debt
        .checked_sub(other.weighted_collateral)
        .ok_or(Error::MathOverflowError)?;

    // normalize to positive sensitivity, so health grows with price
    let (shortfall, direction) = if sensitivity.net < 0 {
        (
            shortfall.checked_neg().ok_or(Error::MathOverflowError)?,
            LiquidationDirection::PriceAbove,
        )
    } else {
        (shortfall, LiquidationDirection::PriceBelow)
    };

    if !shortfall.is_positive() {
        return Ok(PriceResult::Unreachable);
    }

    let price = sensitivity.price_move(
        shortfall,
        direction == LiquidationDirection::PriceBelow,
    )?;
    let price = settle_on_boundary(position, asset, registry, &sensitivity, price, direction)?;

    if !price.is_positive() {
        log!(env, "breakeven: price rounds to zero", asset.clone());
        return Ok(PriceResult::Unreachable);
    }

    Ok(PriceResult::Breakeven(BreakevenPrice {
        price: price.into_inner(),
        direction,
    }))
}

/// Change of `C - B` per unit of asset price, `d * w - b`, kept as exact
/// ratio `net / scale` of raw amounts
struct PriceSensitivity {
    net: i128,
    scale: i128,
}

impl PriceSensitivity {
    fn calc(
        position: &Position,
        asset: &Address,
        registry: &mut AssetRegistry,
    ) -> Result<Self, Error> {
        let config = registry.config(asset)?;

        let amount = |kind| position.entry(asset, kind).map_or(0, |entry| entry.amount);

        let collateral = amount(PositionKind::Deposit)
            .checked_mul(config.weight.into())
            .ok_or(Error::MathOverflowError)?;
        let debt = amount(PositionKind::Borrow)
            .checked_mul(PERCENTAGE_FACTOR.into())
            .ok_or(Error::MathOverflowError)?;

        let scale = registry
            .unit(asset)?
            .checked_mul(PERCENTAGE_FACTOR.into())
            .ok_or(Error::MathOverflowError)?;

        Ok(Self {
            net: collateral.checked_sub(debt).ok_or(Error::MathOverflowError)?,
            scale,
        })
    }

    /// Price move offsetting `value` change of `C - B`
    fn price_move(&self, value: FixedI128, round_up: bool) -> Result<FixedI128, Error> {
        let net = self.net.checked_abs().ok_or(Error::MathOverflowError)?;

        let exact = if round_up {
            value.mul_rational_ceil(self.scale, net)
        } else {
            value.mul_rational_floor(self.scale, net)
        };

        if let Some(price) = exact {
            return Ok(price);
        }

        // value * scale exceeds i128
        let sensitivity = FixedI128::from_rational(net, self.scale)
            .filter(|sensitivity| sensitivity.is_positive())
            .ok_or(Error::MathOverflowError)?;

        if round_up {
            value.checked_div_ceil(sensitivity)
        } else {
            value.checked_div(sensitivity)
        }
        .ok_or(Error::MathOverflowError)
    }
}

/// Shifts `price` off the liquidatable side until rounded health agrees
fn settle_on_boundary(
    position: &Position,
    asset: &Address,
    registry: &mut AssetRegistry,
    sensitivity: &PriceSensitivity,
    mut price: FixedI128,
    direction: LiquidationDirection,
) -> Result<FixedI128, Error> {
    for _ in 0..MAX_SETTLE_STEPS {
        if !price.is_positive() {
            break;
        }

        let mut shifted = position.clone();
        shifted.set_price(asset, price.into_inner())?;

        let values = PositionValues::calc(&shifted, registry, None)?;

        if !values.is_liquidatable() {
            break;
        }

        let deficit = values
            .debt
            .checked_sub(values.weighted_collateral)
            .ok_or(Error::MathOverflowError)?;
        let step = sensitivity
            .price_move(deficit, true)?
            .max(FixedI128::from_inner(1));

        price = match direction {
            LiquidationDirection::PriceBelow => price.checked_add(step),
            LiquidationDirection::PriceAbove => price.checked_sub(step),
        }
        .ok_or(Error::MathOverflowError)?;
    }

    Ok(price)
}
