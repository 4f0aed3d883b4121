use soroban_fixed_point_math::FixedPoint;

use crate::PERCENTAGE_FACTOR;

/// Fixed-point value over i128 with a fixed denominator of 10^9
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedI128(i128);

impl FixedI128 {
    pub const DENOMINATOR: i128 = 1_000_000_000;
    pub const ONE: FixedI128 = FixedI128(Self::DENOMINATOR);

    pub const fn into_inner(self) -> i128 {
        self.0
    }

    pub fn from_inner<T: Into<i128>>(inner: T) -> FixedI128 {
        FixedI128(inner.into())
    }

    pub fn from_rational<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<FixedI128> {
        Self::DENOMINATOR
            .checked_mul(nom.into())?
            .checked_div(denom.into())
            .map(FixedI128)
    }

    /// Percentage expressed in basis points: 1% - 100, 100% - 10_000
    pub fn from_percentage<T: Into<i128>>(percentage: T) -> Option<FixedI128> {
        Self::from_rational(percentage, PERCENTAGE_FACTOR)
    }

    /// Product of the fixed value and an int value, floored to int
    pub fn mul_int<T: Into<i128>>(self, other: T) -> Option<i128> {
        self.0.fixed_mul_floor(other.into(), Self::DENOMINATOR)
    }
}
