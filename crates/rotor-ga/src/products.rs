//! Graded products of multivectors.
//!
//! Every product here expands both operands term by term, multiplies the
//! blades and keeps the terms its [`Selector`] accepts. The result goes
//! through the usual accumulate step, so coefficients of equal blades are
//! summed and simplified.

use std::ops::Mul;

use tracing::debug;

use crate::basis::Basis;
use crate::blade::{BasisBlade, Flip};
use crate::coefficient::Coefficient;
use crate::error::GaError;
use crate::multivector::Multivector;
use crate::selector::{
    FatDot, Geometric, Hestenes, Inner, LeftContraction, RightContraction, Selector, Wedge,
};

impl<T: Coefficient, B: Basis> Multivector<T, B> {
    /// The product of `self` and `rhs` restricted by `S`.
    #[must_use]
    pub fn product<S: Selector>(&self, rhs: &Self) -> Self {
        self.product_with::<S>(rhs, Flip::NONE, Flip::NONE)
    }

    /// The product restricted by `S`, with each operand's blades flipped
    /// first.
    #[must_use]
    pub fn product_with<S: Selector>(&self, rhs: &Self, left: Flip, right: Flip) -> Self {
        let mut raw = Vec::with_capacity(self.len() * rhs.len());
        for (lb, lc) in self.iter() {
            for (rb, rc) in rhs.iter() {
                let blade = lb.product_with(*rb, left, right);
                if !S::select(*lb, *rb, blade) {
                    continue;
                }
                raw.push((blade, lc.clone() * rc.clone()));
            }
        }
        Self::accumulate(raw)
    }

    /// The full geometric product.
    #[must_use]
    pub fn geometric(&self, rhs: &Self) -> Self {
        self.product::<Geometric>(rhs)
    }

    /// The scalar part of the product, as a bare coefficient.
    #[must_use]
    pub fn inner(&self, rhs: &Self) -> T {
        self.product::<Inner>(rhs).scalar_part()
    }

    /// The outer product `self ∧ rhs`.
    #[must_use]
    pub fn wedge(&self, rhs: &Self) -> Self {
        self.product::<Wedge>(rhs)
    }

    /// The fat dot product.
    #[must_use]
    pub fn fatdot(&self, rhs: &Self) -> Self {
        self.product::<FatDot>(rhs)
    }

    /// The Hestenes inner product: the fat dot without scalar operands.
    #[must_use]
    pub fn hestenes(&self, rhs: &Self) -> Self {
        self.product::<Hestenes>(rhs)
    }

    /// The left contraction `self ⌋ rhs`.
    #[must_use]
    pub fn left(&self, rhs: &Self) -> Self {
        self.product::<LeftContraction>(rhs)
    }

    /// The right contraction `self ⌊ rhs`.
    #[must_use]
    pub fn right(&self, rhs: &Self) -> Self {
        self.product::<RightContraction>(rhs)
    }

    /// Reversion: grade `g` is scaled by `(-1)^(g(g-1)/2)`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.signed_by_grade(BasisBlade::reversal_sign)
    }

    /// Grade involution: grade `g` is scaled by `(-1)^g`.
    #[must_use]
    pub fn involution(&self) -> Self {
        self.signed_by_grade(BasisBlade::involution_sign)
    }

    fn signed_by_grade(&self, sign: impl Fn(BasisBlade<B>) -> i32) -> Self {
        Self::from_sorted(
            self.iter()
                .map(|(blade, coeff)| {
                    if sign(*blade) < 0 {
                        (*blade, -coeff.clone())
                    } else {
                        (*blade, coeff.clone())
                    }
                })
                .collect(),
        )
    }

    /// The inverse `reverse(X) / (X · reverse(X))`.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::NotInvertible`] if the denominator is zero, as it
    /// is for null vectors, and propagates coefficient division errors.
    pub fn inverse(&self) -> Result<Self, GaError> {
        let reversed = self.reverse();
        let denominator = self.inner(&reversed);
        if denominator.is_zero() {
            debug!(value = %self, "refusing to invert a null multivector");
            return Err(GaError::NotInvertible);
        }
        let terms = reversed
            .iter()
            .map(|(blade, coeff)| Ok((*blade, coeff.try_div(&denominator)?)))
            .collect::<Result<Vec<_>, GaError>>()?;
        Ok(Self::from_sorted(terms))
    }

    /// The dual in the subspace of the first `dim` basis vectors: the
    /// product with the reversed pseudo-scalar of that subspace.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::OutOfRange`] if `dim > B::DIM`.
    pub fn dual(&self, dim: u32) -> Result<Self, GaError> {
        let pseudo = BasisBlade::pseudo_scalar_of(dim)?;
        Ok(Self::accumulate(self.iter().map(|(blade, coeff)| {
            (blade.product_with(pseudo, Flip::NONE, Flip::REVERSE), coeff.clone())
        })))
    }

    /// The meet `(dual(a) ∧ dual(b)) * I` of two blades in the subspace of
    /// the first `dim` basis vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::OutOfRange`] if `dim > B::DIM`.
    pub fn meet(a: &Self, b: &Self, dim: u32) -> Result<Self, GaError> {
        let pseudo = Self::basis(BasisBlade::pseudo_scalar_of(dim)?);
        Ok(a.dual(dim)?.wedge(&b.dual(dim)?).geometric(&pseudo))
    }
}

impl<T: Coefficient, B: Basis> Mul<&Multivector<T, B>> for &Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn mul(self, rhs: &Multivector<T, B>) -> Multivector<T, B> {
        self.geometric(rhs)
    }
}

impl<T: Coefficient, B: Basis> Mul for Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn mul(self, rhs: Multivector<T, B>) -> Multivector<T, B> {
        self.geometric(&rhs)
    }
}
