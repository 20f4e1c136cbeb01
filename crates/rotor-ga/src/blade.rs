//! Basis blades.
//!
//! A blade is a set of basis vectors stored as a bit set: bit `i` holds
//! basis vector `i + 1`. The product of two blades is their symmetric
//! difference, with a sign from reordering the vectors into ascending
//! order and from squaring vectors of negative norm.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Mul, Neg};

use crate::basis::{Basis, E41};
use crate::error::GaError;

/// Sign `(-1)^(g(g-1)/2)` picked up by reversing a grade-`g` blade.
#[must_use]
pub const fn reversal_sign(grade: u32) -> i32 {
    match grade % 4 {
        2 | 3 => -1,
        _ => 1,
    }
}

/// Sign `(-1)^g` picked up by the grade involution of a grade-`g` blade.
#[must_use]
pub const fn involution_sign(grade: u32) -> i32 {
    if grade % 2 == 1 {
        -1
    } else {
        1
    }
}

/// Parity of the swaps needed to sort the vectors of `lhs` followed by the
/// vectors of `rhs` into ascending order.
fn reordering_is_odd(lhs: u32, rhs: u32) -> bool {
    let mut lhs = lhs >> 1;
    let mut swaps = 0;
    while lhs != 0 {
        swaps += (lhs & rhs).count_ones();
        lhs >>= 1;
    }
    swaps % 2 == 1
}

/// Sign flips applied to one operand of a blade product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flip {
    /// Apply the grade involution to the operand.
    pub involute: bool,
    /// Reverse the operand.
    pub reverse: bool,
}

impl Flip {
    /// No flips.
    pub const NONE: Flip = Flip {
        involute: false,
        reverse: false,
    };
    /// Grade involution only.
    pub const INVOLUTE: Flip = Flip {
        involute: true,
        reverse: false,
    };
    /// Reversion only.
    pub const REVERSE: Flip = Flip {
        involute: false,
        reverse: true,
    };

    /// True if these flips negate a blade of the given grade.
    #[must_use]
    pub const fn negates(self, grade: u32) -> bool {
        let involuted = self.involute && involution_sign(grade) < 0;
        let reversed = self.reverse && reversal_sign(grade) < 0;
        involuted != reversed
    }
}

/// A signed unit blade of the basis `B`.
///
/// Equality, ordering and hashing look at the vector set only; the sign is
/// carried along for products and read with [`BasisBlade::sign`].
pub struct BasisBlade<B: Basis = E41> {
    bits: u32,
    negative: bool,
    basis: PhantomData<B>,
}

impl<B: Basis> BasisBlade<B> {
    const fn from_parts(bits: u32, negative: bool) -> Self {
        let () = B::FITS_IN_BLADE;
        Self {
            bits,
            negative,
            basis: PhantomData,
        }
    }

    /// The scalar blade `1`.
    #[must_use]
    pub const fn scalar() -> Self {
        Self::from_parts(0, false)
    }

    /// Creates a positive blade from a bit set.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::OutOfRange`] if a bit at or above `B::DIM` is set.
    pub fn new(bits: u32) -> Result<Self, GaError> {
        if bits >> B::DIM != 0 {
            return Err(GaError::OutOfRange {
                index: 32 - bits.leading_zeros(),
                dim: B::DIM,
            });
        }
        Ok(Self::from_parts(bits, false))
    }

    /// The basis vector `e_n`, numbered from 1. Negative-norm vectors follow
    /// the positive ones: in [`E41`], `e5` prints as `e1i`.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::OutOfRange`] unless `1 <= n <= B::DIM`.
    pub fn basis_vector(n: u32) -> Result<Self, GaError> {
        if n == 0 || n > B::DIM {
            return Err(GaError::OutOfRange { index: n, dim: B::DIM });
        }
        Ok(Self::from_parts(1 << (n - 1), false))
    }

    /// The basis vector `e_n`, numbered from 1.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= n <= B::DIM`.
    #[must_use]
    pub fn e(n: u32) -> Self {
        match Self::basis_vector(n) {
            Ok(blade) => blade,
            Err(e) => panic!("{e}"),
        }
    }

    /// The unit blade spanning all of `B`.
    #[must_use]
    pub fn pseudo_scalar() -> Self {
        Self::from_parts((1 << B::DIM) - 1, false)
    }

    /// The unit blade spanning the first `dim` basis vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::OutOfRange`] if `dim > B::DIM`.
    pub fn pseudo_scalar_of(dim: u32) -> Result<Self, GaError> {
        if dim > B::DIM {
            return Err(GaError::OutOfRange { index: dim, dim: B::DIM });
        }
        Ok(Self::from_parts((1 << dim) - 1, false))
    }

    /// The vector set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Number of basis vectors in the blade.
    #[must_use]
    pub const fn grade(self) -> u32 {
        self.bits.count_ones()
    }

    /// True for the scalar blade.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        self.bits == 0
    }

    /// `-1` if the sign flag is set, else `1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        if self.negative {
            -1
        } else {
            1
        }
    }

    /// True if the sign flag is set.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    /// The same blade with the sign flag cleared.
    #[must_use]
    pub const fn unsigned(self) -> Self {
        Self::from_parts(self.bits, false)
    }

    /// [`reversal_sign`] of this blade's grade.
    #[must_use]
    pub const fn reversal_sign(self) -> i32 {
        reversal_sign(self.grade())
    }

    /// [`involution_sign`] of this blade's grade.
    #[must_use]
    pub const fn involution_sign(self) -> i32 {
        involution_sign(self.grade())
    }

    /// The geometric product of two blades.
    #[must_use]
    pub fn product(self, rhs: Self) -> Self {
        self.product_with(rhs, Flip::NONE, Flip::NONE)
    }

    /// The geometric product with each operand flipped first.
    ///
    /// The sign combines the operand signs, the reordering parity, one
    /// flip per shared negative-norm vector, and the requested flips.
    #[must_use]
    pub fn product_with(self, rhs: Self, left: Flip, right: Flip) -> Self {
        let shared_imaginary = (self.bits & rhs.bits) >> B::REAL_DIM;
        let negative = (self.negative != rhs.negative)
            ^ reordering_is_odd(self.bits, rhs.bits)
            ^ (shared_imaginary.count_ones() % 2 == 1)
            ^ left.negates(self.grade())
            ^ right.negates(rhs.grade());
        Self::from_parts(self.bits ^ rhs.bits, negative)
    }

    /// The printed name: `1` for the scalar, otherwise the vector names
    /// concatenated, such as `e1e2` or `e3e1i`.
    #[must_use]
    pub fn name(self) -> String {
        if self.bits == 0 {
            return "1".to_string();
        }
        let mut name = String::new();
        for index in 0..B::DIM {
            if self.bits & (1 << index) == 0 {
                continue;
            }
            if index < B::REAL_DIM {
                name.push_str(&format!("e{}", index + 1));
            } else {
                name.push_str(&format!("e{}i", index - B::REAL_DIM + 1));
            }
        }
        name
    }
}

impl<B: Basis> Default for BasisBlade<B> {
    fn default() -> Self {
        Self::scalar()
    }
}

impl<B: Basis> Clone for BasisBlade<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Basis> Copy for BasisBlade<B> {}

impl<B: Basis> PartialEq for BasisBlade<B> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<B: Basis> Eq for BasisBlade<B> {}

impl<B: Basis> Hash for BasisBlade<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<B: Basis> PartialOrd for BasisBlade<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Basis> Ord for BasisBlade<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl<B: Basis> Mul for BasisBlade<B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl<B: Basis> Neg for BasisBlade<B> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_parts(self.bits, !self.negative)
    }
}

impl<B: Basis> fmt::Debug for BasisBlade<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BasisBlade({self})")
    }
}

impl<B: Basis> fmt::Display for BasisBlade<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::E3;
    use std::collections::HashSet;

    type Blade = BasisBlade<E41>;

    #[test]
    fn test_anticommutative_vectors() {
        let e1 = Blade::e(1);
        let e2 = Blade::e(2);
        let e12 = e1 * e2;
        let e21 = e2 * e1;
        assert_eq!(e12.bits(), 0b11);
        assert_eq!(e12.bits(), e21.bits());
        assert_eq!(e12.sign(), 1);
        assert_eq!(e21.sign(), -1);
    }

    #[test]
    fn test_squares() {
        for n in 1..=4 {
            let square = Blade::e(n) * Blade::e(n);
            assert!(square.is_scalar());
            assert_eq!(square.sign(), 1);
        }
        let eminus = Blade::e(5);
        let square = eminus * eminus;
        assert!(square.is_scalar());
        assert_eq!(square.sign(), -1);
    }

    #[test]
    fn test_widest_basis() {
        type Wide = crate::basis::Signature<30, 1>;
        let i = BasisBlade::<Wide>::pseudo_scalar();
        assert_eq!(i.grade(), 31);
        assert_eq!(BasisBlade::<Wide>::e(31).name(), "e1i");
        assert!(BasisBlade::<Wide>::new(u32::MAX >> 1).is_ok());
        assert_eq!(
            BasisBlade::<Wide>::new(u32::MAX),
            Err(GaError::OutOfRange { index: 32, dim: 31 })
        );
    }

    #[test]
    fn test_pseudo_scalar_squares() {
        let i = BasisBlade::<E3>::pseudo_scalar();
        assert_eq!(i.grade(), 3);
        let square = i * i;
        assert!(square.is_scalar());
        assert_eq!(square.sign(), -1);

        assert_eq!(Blade::pseudo_scalar_of(3).unwrap().bits(), 0b111);
        assert_eq!(Blade::pseudo_scalar().bits(), 0b11111);
        assert_eq!(
            Blade::pseudo_scalar_of(6),
            Err(GaError::OutOfRange { index: 6, dim: 5 })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            BasisBlade::<E3>::basis_vector(4),
            Err(GaError::OutOfRange { index: 4, dim: 3 })
        );
        assert_eq!(
            BasisBlade::<E3>::basis_vector(0),
            Err(GaError::OutOfRange { index: 0, dim: 3 })
        );
        assert_eq!(
            BasisBlade::<E3>::new(0b1000),
            Err(GaError::OutOfRange { index: 4, dim: 3 })
        );
        assert!(BasisBlade::<E3>::new(0b111).is_ok());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_e_panics_out_of_range() {
        let _ = BasisBlade::<E3>::e(7);
    }

    #[test]
    fn test_names() {
        assert_eq!(Blade::scalar().name(), "1");
        assert_eq!(Blade::e(3).name(), "e3");
        assert_eq!(Blade::e(5).name(), "e1i");
        assert_eq!((Blade::e(1) * Blade::e(2)).name(), "e1e2");
        assert_eq!((Blade::e(2) * Blade::e(1)).to_string(), "-e1e2");
        assert_eq!((Blade::e(3) * Blade::e(5)).name(), "e3e1i");
    }

    #[test]
    fn test_signs() {
        let expected = [1, 1, -1, -1, 1, 1, -1, -1];
        for (grade, sign) in expected.iter().enumerate() {
            assert_eq!(reversal_sign(u32::try_from(grade).unwrap()), *sign);
        }
        assert_eq!(involution_sign(0), 1);
        assert_eq!(involution_sign(3), -1);
    }

    #[test]
    fn test_flipped_products() {
        let e12 = Blade::e(1) * Blade::e(2);
        let reversed = e12.product_with(Blade::scalar(), Flip::REVERSE, Flip::NONE);
        assert_eq!(reversed.bits(), e12.bits());
        assert!(reversed.is_negative());

        let e1 = Blade::e(1);
        let involuted = Blade::scalar().product_with(e1, Flip::NONE, Flip::INVOLUTE);
        assert!(involuted.is_negative());

        // Reversion and involution of a vector: only the involution flips.
        let both = Flip {
            involute: true,
            reverse: true,
        };
        assert!(both.negates(1));
        assert!(!both.negates(3));
    }

    #[test]
    fn test_sign_ignored_by_eq_and_hash() {
        let e1 = Blade::e(1);
        assert_eq!(-e1, e1);
        let mut set = HashSet::new();
        set.insert(e1);
        set.insert(-e1);
        assert_eq!(set.len(), 1);
    }
}
