use soroban_fixed_point_math::FixedPoint;

use crate::PERCENTAGE_FACTOR;

/// Fixed type with inner type of i128 and fixed denominator 10e9
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ZERO: FixedI128 = FixedI128(0);
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);

    /// Returns inner value
    pub const fn into_inner(self) -> i128 {
        self.0
    }

    /// Construct FixedI128 from inner value
    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    /// Construct fixed value from rational
    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Construct fixed value as percentage
    /// percentage expressed as 1% - 100, 100% - 10_000
    pub fn from_percentage<T: Into<i128>>(percentage: T) -> Option<FixedI128> {
        Self::from_rational(percentage, PERCENTAGE_FACTOR)
    }

    /// Construct multiplier `1 + change` where change is expressed as percentage,
    /// e.g. -25% - -2_500, +10% - 1_000
    pub fn from_percentage_change<T: Into<i128>>(change: T) -> Option<FixedI128> {
        Self::ONE.checked_add(Self::from_percentage(change)?)
    }

    /// Construct fixed from int value
    pub fn from_int<T: Into<i128>>(value: T) -> Option<FixedI128> {
        FixedI128::DENOMINATOR
            .checked_mul(value.into())
            .map(FixedI128)
    }

    /// Multiplication of two fixed values
    pub fn checked_mul(self, value: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_mul_floor(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Division of two FixedI128 values
    pub fn checked_div(self, value: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_div_floor(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Division of two FixedI128 values rounded up
    pub fn checked_div_ceil(self, value: FixedI128) -> Option<FixedI128> {
        self.0
            .fixed_div_ceil(value.0, Self::DENOMINATOR)
            .map(FixedI128)
    }

    /// Multiplication by `nom / denom` with single floor rounding,
    /// e.g. price of one token times raw amount over `10^decimals`
    pub fn mul_rational_floor<N: Into<i128>, D: Into<i128>>(
        self,
        nom: N,
        denom: D,
    ) -> Option<FixedI128> {
        self.0
            .fixed_mul_floor(nom.into(), denom.into())
            .map(FixedI128)
    }

    /// Multiplication by `nom / denom` rounded up
    pub fn mul_rational_ceil<N: Into<i128>, D: Into<i128>>(
        self,
        nom: N,
        denom: D,
    ) -> Option<FixedI128> {
        self.0
            .fixed_mul_ceil(nom.into(), denom.into())
            .map(FixedI128)
    }

    /// Sum of two fixed values
    pub fn checked_add(self, value: FixedI128) -> Option<FixedI128> {
        self.0.checked_add(value.0).map(FixedI128)
    }

    /// Subtraction of two fixed values
    pub fn checked_sub(self, other: FixedI128) -> Option<FixedI128> {
        self.0.checked_sub(other.0).map(FixedI128)
    }

    /// Negation of fixed value
    pub fn checked_neg(self) -> Option<FixedI128> {
        self.0.checked_neg().map(FixedI128)
    }

    /// Calculates product of fixed value and int value.
    /// Result is int value
    pub fn mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        self.0
            .checked_mul(other.into())?
            .checked_div(Self::DENOMINATOR)
    }

    /// Returns true if self is negative, false - when positive or zero
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    /// Returns true if self is positive, false - when negative or zero
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    /// Returns true if self is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns absolute value
    pub fn abs(mut self) -> FixedI128 {
        self.0 = self.0.abs();
        self
    }
}
