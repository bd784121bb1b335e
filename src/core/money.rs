use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Whole-cent amount. Every balance, flow and threshold in the engine is one of these.
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars.saturating_mul(100))
    }

    /// Nearest cent to a floating dollar amount; used only at the input boundary.
    pub fn from_dollars_f64(dollars: f64) -> Self {
        Money((dollars * 100.0).round() as i64)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_dollars_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn max(self, other: Money) -> Money {
        Money(self.0.max(other.0))
    }

    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Clamp to zero from below; negative balances hold no withdrawable funds.
    pub fn non_negative(self) -> Money {
        self.max(Money::ZERO)
    }

    /// `self * bp / 10_000`, rounded half away from zero.
    pub fn apply_basis_points(self, bp: u32) -> Money {
        Money(round_div(self.0 as i128 * bp as i128, 10_000))
    }

    /// `self * numerator / denominator`, rounded half away from zero.
    pub fn mul_ratio(self, numerator: i64, denominator: i64) -> Money {
        Money(round_div(self.0 as i128 * numerator as i128, denominator as i128))
    }

    /// Scale by a floating factor and round to the nearest cent.
    pub fn scale(self, factor: f64) -> Money {
        Money((self.0 as f64 * factor).round() as i64)
    }
}

pub(crate) fn round_div(numerator: i128, denominator: i128) -> i64 {
    debug_assert!(denominator > 0);
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// `(1 + percent/100)^years`.
pub fn compound_factor(percent: f64, years: u32) -> f64 {
    (1.0 + percent / 100.0).powi(years as i32)
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_points_round_half_away_from_zero() {
        assert_eq!(Money::from_cents(5).apply_basis_points(1_000), Money::from_cents(1));
        assert_eq!(Money::from_cents(15).apply_basis_points(1_000), Money::from_cents(2));
        assert_eq!(Money::from_cents(-15).apply_basis_points(1_000), Money::from_cents(-2));
    }

    #[test]
    fn display_formats_dollars_and_cents() {
        assert_eq!(Money::from_cents(123_456).to_string(), "$1234.56");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
    }

    #[test]
    fn from_dollars_f64_rounds_to_nearest_cent() {
        assert_eq!(Money::from_dollars_f64(10.006), Money::from_cents(1_001));
        assert_eq!(Money::from_dollars_f64(25_000.0), Money::from_dollars(25_000));
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_dollars_f64(1e17);
        assert_eq!(huge, Money::from_cents(i64::MAX));
        assert_eq!(huge + Money::from_dollars(1), Money::from_cents(i64::MAX));

        let mut low = Money::from_cents(i64::MIN);
        low -= Money::from_dollars(1);
        assert_eq!(low, Money::from_cents(i64::MIN));
        assert_eq!(-low, Money::from_cents(i64::MAX));
        assert_eq!(huge.mul_ratio(3, 2), Money::from_cents(i64::MAX));
    }
}
