//! Coefficient types for multivectors.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use rotor_core::Symbol;
use rotor_simplify::normal_form;

use crate::error::GaError;

/// A commutative ring of multivector coefficients.
///
/// Multiplication must commute: left scalar multiplication is implemented
/// by multiplying on the right.
pub trait Coefficient:
    Clone
    + PartialEq
    + Display
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Brings an accumulated coefficient to canonical form. Zero detection
    /// runs on the result, so a sum that only cancels symbolically must
    /// come out as the zero value.
    #[must_use]
    fn simplify(self) -> Self {
        self
    }

    /// True if the coefficient prints with a leading minus sign.
    fn is_negative(&self) -> bool;

    /// True if the coefficient prints as a sum and needs parentheses next
    /// to a blade name.
    fn is_compound(&self) -> bool {
        false
    }

    /// The value `num / den`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `den` is zero.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// Division.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::DivisionByZero`] if `rhs` is zero.
    fn try_div(&self, rhs: &Self) -> Result<Self, GaError>;
}

macro_rules! impl_float_coefficient {
    ($ty:ty) => {
        impl Coefficient for $ty {
            fn is_negative(&self) -> bool {
                *self < 0.0
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            fn from_ratio(num: i64, den: i64) -> Self {
                (num as f64 / den as f64) as $ty
            }

            fn try_div(&self, rhs: &Self) -> Result<Self, GaError> {
                if *rhs == 0.0 {
                    return Err(GaError::DivisionByZero);
                }
                Ok(*self / *rhs)
            }
        }
    };
}

impl_float_coefficient!(f64);
impl_float_coefficient!(f32);

impl Coefficient for Symbol {
    /// # Panics
    ///
    /// Panics if a denominator inside the coefficient collapses to zero,
    /// the same way the `/` operator panics.
    fn simplify(self) -> Self {
        normal_form(&self).unwrap_or_else(|e| panic!("{e}"))
    }

    fn is_negative(&self) -> bool {
        Symbol::is_negative(self)
    }

    fn is_compound(&self) -> bool {
        matches!(self.node(), rotor_core::Node::Add(..) | rotor_core::Node::Sub(..))
    }

    /// # Panics
    ///
    /// Panics if `den` is zero.
    fn from_ratio(num: i64, den: i64) -> Self {
        Symbol::rational(num, den).unwrap_or_else(|e| panic!("{e}"))
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, GaError> {
        Ok(Symbol::try_div(self, rhs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotor_core::SymbolError;

    #[test]
    fn test_float_coefficients() {
        assert!((-2.0f64).is_negative());
        assert!(!0.0f64.is_negative());
        assert_eq!(f64::from_ratio(1, 2), 0.5);
        assert_eq!(f32::from_ratio(-3, 4), -0.75);
        assert_eq!(3.0f64.try_div(&0.0), Err(GaError::DivisionByZero));
        assert_eq!(3.0f64.try_div(&2.0), Ok(1.5));
    }

    #[test]
    fn test_symbol_coefficients() {
        let a = Symbol::var("a");
        let b = Symbol::var("b");
        let sum = &a + &b;
        assert!(sum.is_compound());
        assert!(!(&a * &b).is_compound());
        assert!(Coefficient::is_negative(&-&a));
        assert_eq!(Symbol::from_ratio(2, 4), Symbol::rational(1, 2).unwrap());

        let cancels = (&a + &b) - (&b + &a);
        assert_eq!(cancels.simplify(), Symbol::zero());

        assert_eq!(
            Coefficient::try_div(&a, &Symbol::zero()),
            Err(GaError::Symbol(SymbolError::DivisionByZero))
        );
    }
}
