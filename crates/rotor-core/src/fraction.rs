//! Machine-word rational numbers.
//!
//! A thin wrapper over [`num_rational::Ratio<i64>`] for rational leaves.
//! Values are kept in lowest terms with a positive denominator, and every
//! operation is checked: an overflowing result is reported instead of
//! wrapping or panicking.

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};
use std::cmp::Ordering;
use std::fmt;

use crate::error::SymbolError;

/// A rational number with `i64` numerator and denominator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction(Ratio<i64>);

impl Fraction {
    /// Creates a fraction from numerator and denominator, reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if `den` is zero and
    /// [`SymbolError::Overflow`] if the sign cannot be normalised
    /// (`i64::MIN` operands).
    pub fn new(num: i64, den: i64) -> Result<Self, SymbolError> {
        if den == 0 {
            return Err(SymbolError::DivisionByZero);
        }
        // Ratio::new negates both parts for a negative denominator.
        let (num, den) = if den < 0 {
            (
                num.checked_neg().ok_or(SymbolError::Overflow)?,
                den.checked_neg().ok_or(SymbolError::Overflow)?,
            )
        } else {
            (num, den)
        };
        Ok(Self(Ratio::new(num, den)))
    }

    /// Creates an integral fraction.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Ratio::from_integer(n))
    }

    /// Returns the underlying ratio.
    #[must_use]
    pub const fn as_ratio(&self) -> &Ratio<i64> {
        &self.0
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(self) -> i64 {
        *self.0.numer()
    }

    /// Returns the (always positive) denominator.
    #[must_use]
    pub fn denominator(self) -> i64 {
        *self.0.denom()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.0.is_integer()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.numerator() < 0
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(self) -> i64 {
        self.numerator().signum()
    }

    /// Returns the absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] for `i64::MIN` numerators.
    pub fn checked_abs(self) -> Result<Self, SymbolError> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Negation.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] for `i64::MIN` numerators.
    pub fn checked_neg(self) -> Result<Self, SymbolError> {
        let num = self.numerator().checked_neg().ok_or(SymbolError::Overflow)?;
        // Negating the numerator keeps the ratio reduced.
        Ok(Self(Ratio::new_raw(num, self.denominator())))
    }

    /// Sum.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] if the reduced result does not fit.
    pub fn checked_add(self, rhs: Self) -> Result<Self, SymbolError> {
        self.0.checked_add(&rhs.0).map(Self).ok_or(SymbolError::Overflow)
    }

    /// Difference.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] if the reduced result does not fit.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, SymbolError> {
        self.0.checked_sub(&rhs.0).map(Self).ok_or(SymbolError::Overflow)
    }

    /// Product.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] if the reduced result does not fit.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, SymbolError> {
        self.0.checked_mul(&rhs.0).map(Self).ok_or(SymbolError::Overflow)
    }

    /// Quotient.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if `rhs` is zero and
    /// [`SymbolError::Overflow`] if the reduced result does not fit.
    pub fn checked_div(self, rhs: Self) -> Result<Self, SymbolError> {
        if rhs.0.is_zero() {
            return Err(SymbolError::DivisionByZero);
        }
        self.0.checked_div(&rhs.0).map(Self).ok_or(SymbolError::Overflow)
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if this fraction is zero.
    pub fn checked_recip(self) -> Result<Self, SymbolError> {
        Self::one().checked_div(self)
    }

    /// Converts to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self(Ratio::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self(Ratio::one())
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

// `Zero`/`One` need the operator traits; the panicking forms mirror the
// symbolic operators.
impl std::ops::Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<Ratio<i64>> for Fraction {
    fn from(r: Ratio<i64>) -> Self {
        Self(r)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({self})")
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction() {
        let r = Fraction::new(6, -8).unwrap();
        assert_eq!(r.numerator(), -3);
        assert_eq!(r.denominator(), 4);
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Fraction::new(1, 0), Err(SymbolError::DivisionByZero));
        let zero = Fraction::zero();
        assert_eq!(
            Fraction::one().checked_div(zero),
            Err(SymbolError::DivisionByZero)
        );
    }

    #[test]
    fn test_thirds_sum_to_one() {
        let third = Fraction::new(1, 3).unwrap();
        let sum = third.checked_add(third).unwrap().checked_add(third).unwrap();
        assert!(sum.is_one());
    }

    #[test]
    fn test_ordering() {
        let a = Fraction::new(-1, 2).unwrap();
        let b = Fraction::new(1, 3).unwrap();
        assert!(a < b);
        assert!(Fraction::from_integer(2) > b);
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Fraction::from_integer(i64::MAX);
        assert_eq!(big.checked_mul(big), Err(SymbolError::Overflow));
        assert_eq!(
            Fraction::from_integer(i64::MIN).checked_neg(),
            Err(SymbolError::Overflow)
        );
    }

    #[test]
    fn test_sign_normalisation_overflow() {
        assert_eq!(Fraction::new(i64::MIN, -1), Err(SymbolError::Overflow));
        let r = Fraction::new(i64::MIN, 2).unwrap();
        assert_eq!(r.numerator(), i64::MIN / 2);
        assert_eq!(r.denominator(), 1);
    }

    #[test]
    fn test_wraps_crate_ratio() {
        let r = Fraction::new(3, -9).unwrap();
        assert_eq!(*r.as_ratio(), Ratio::new(-1, 3));
        assert_eq!(Fraction::from(Ratio::new(2, 6)), Fraction::new(1, 3).unwrap());
        assert_eq!(
            Fraction::new(1, 2).unwrap().checked_sub(Fraction::new(1, 3).unwrap()),
            Fraction::new(1, 6)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(2, 4).unwrap().to_string(), "1/2");
        assert_eq!(Fraction::from_integer(-7).to_string(), "-7");
    }
}
