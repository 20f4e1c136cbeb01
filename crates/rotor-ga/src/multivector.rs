//! Sparse multivectors.
//!
//! A multivector is a linear combination of basis blades:
//! M = a₀·1 + a₁·e₁ + a₂·e₂ + a₁₂·e₁₂ + ...
//!
//! Terms are stored as `(blade, coefficient)` pairs sorted by blade bits,
//! each blade at most once and unsigned. Coefficients that simplify to zero
//! are dropped; the zero multivector keeps one explicit zero scalar term.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use rotor_core::Symbol;

use crate::basis::{Basis, E41};
use crate::blade::BasisBlade;
use crate::coefficient::Coefficient;

/// A sparse multivector with coefficients `T` over the basis `B`.
#[derive(Clone, Debug, PartialEq)]
pub struct Multivector<T, B: Basis = E41> {
    terms: Vec<(BasisBlade<B>, T)>,
}

impl<T: Coefficient, B: Basis> Multivector<T, B> {
    /// The zero multivector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: vec![(BasisBlade::scalar(), T::zero())],
        }
    }

    /// A scalar multivector.
    #[must_use]
    pub fn scalar(value: T) -> Self {
        Self::from_terms([(value, BasisBlade::scalar())])
    }

    /// A single blade with coefficient one; a negative blade gives `-1`.
    #[must_use]
    pub fn basis(blade: BasisBlade<B>) -> Self {
        Self::from_terms([(T::one(), blade)])
    }

    /// Builds a multivector from `(coefficient, blade)` pairs.
    ///
    /// Blade signs are folded into the coefficients and repeated blades are
    /// summed.
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = (T, BasisBlade<B>)>) -> Self {
        Self::accumulate(terms.into_iter().map(|(coeff, blade)| (blade, coeff)))
    }

    /// The multivector `s + x e1 + y e2 + z e3`.
    ///
    /// # Panics
    ///
    /// Panics if `B` has fewer than three basis vectors.
    #[must_use]
    pub fn vector(s: T, x: T, y: T, z: T) -> Self {
        Self::from_terms([
            (s, BasisBlade::scalar()),
            (x, BasisBlade::e(1)),
            (y, BasisBlade::e(2)),
            (z, BasisBlade::e(3)),
        ])
    }

    /// Sorts, merges and signs raw product terms.
    pub(crate) fn accumulate(terms: impl IntoIterator<Item = (BasisBlade<B>, T)>) -> Self {
        let mut unsigned: Vec<(BasisBlade<B>, T)> = terms
            .into_iter()
            .map(|(blade, coeff)| {
                if blade.is_negative() {
                    (blade.unsigned(), -coeff)
                } else {
                    (blade, coeff)
                }
            })
            .collect();
        unsigned.sort_by_key(|(blade, _)| *blade);

        let mut merged: Vec<(BasisBlade<B>, T)> = Vec::with_capacity(unsigned.len());
        for (blade, coeff) in unsigned {
            if let Some((last, acc)) = merged.last_mut() {
                if *last == blade {
                    let previous = std::mem::replace(acc, T::zero());
                    *acc = previous + coeff;
                    continue;
                }
            }
            merged.push((blade, coeff));
        }
        Self::from_sorted(merged)
    }

    /// Simplifies and drops zero terms of an already sorted, unsigned,
    /// duplicate-free term list.
    pub(crate) fn from_sorted(terms: Vec<(BasisBlade<B>, T)>) -> Self {
        let mut terms: Vec<(BasisBlade<B>, T)> = terms
            .into_iter()
            .map(|(blade, coeff)| (blade, coeff.simplify()))
            .filter(|(_, coeff)| !coeff.is_zero())
            .collect();
        if terms.is_empty() {
            terms.push((BasisBlade::scalar(), T::zero()));
        }
        Self { terms }
    }

    /// The stored terms, sorted by blade.
    #[must_use]
    pub fn terms(&self) -> &[(BasisBlade<B>, T)] {
        &self.terms
    }

    /// Iterates over the stored terms.
    pub fn iter(&self) -> impl Iterator<Item = &(BasisBlade<B>, T)> {
        self.terms.iter()
    }

    /// Number of stored terms. The zero multivector has one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false: the zero multivector stores a zero scalar.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|(_, coeff)| coeff.is_zero())
    }

    /// The coefficient of `blade`, zero if absent. A negative blade reads
    /// the negated coefficient.
    #[must_use]
    pub fn coefficient(&self, blade: BasisBlade<B>) -> T {
        let value = self
            .terms
            .binary_search_by_key(&blade, |(b, _)| *b)
            .map_or_else(|_| T::zero(), |i| self.terms[i].1.clone());
        if blade.is_negative() {
            -value
        } else {
            value
        }
    }

    /// The scalar coefficient.
    #[must_use]
    pub fn scalar_part(&self) -> T {
        self.coefficient(BasisBlade::scalar())
    }

    /// The grade-`k` part.
    #[must_use]
    pub fn grade_part(&self, k: u32) -> Self {
        Self::from_sorted(
            self.terms
                .iter()
                .filter(|(blade, _)| blade.grade() == k)
                .cloned()
                .collect(),
        )
    }

    /// Multiplies every coefficient by `t` on the right.
    #[must_use]
    pub fn scaled(&self, t: &T) -> Self {
        self.map(|coeff| coeff.clone() * t.clone())
    }

    /// Applies `f` to every coefficient, keeping the blades.
    #[must_use]
    pub fn map(&self, f: impl Fn(&T) -> T) -> Self {
        Self::from_sorted(self.terms.iter().map(|(blade, coeff)| (*blade, f(coeff))).collect())
    }

    /// Merges two sorted term lists, negating the right one if `subtract`.
    fn merge(&self, rhs: &Self, subtract: bool) -> Self {
        let sign = |coeff: &T| if subtract { -coeff.clone() } else { coeff.clone() };
        let mut terms = Vec::with_capacity(self.terms.len() + rhs.terms.len());
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < rhs.terms.len() {
            let (lb, lc) = &self.terms[i];
            let (rb, rc) = &rhs.terms[j];
            match lb.cmp(rb) {
                std::cmp::Ordering::Less => {
                    terms.push((*lb, lc.clone()));
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    terms.push((*rb, sign(rc)));
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    let combined = if subtract {
                        lc.clone() - rc.clone()
                    } else {
                        lc.clone() + rc.clone()
                    };
                    terms.push((*lb, combined));
                    i += 1;
                    j += 1;
                }
            }
        }
        terms.extend(self.terms[i..].iter().cloned());
        terms.extend(rhs.terms[j..].iter().map(|(blade, coeff)| (*blade, sign(coeff))));
        Self::from_sorted(terms)
    }
}

impl<T: Coefficient, B: Basis> Default for Multivector<T, B> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Left scalar multiplication, `t * mv`.
///
/// Implemented as `mv * t`, so `T` must be commutative.
#[must_use]
pub fn scale<T: Coefficient, B: Basis>(t: &T, mv: &Multivector<T, B>) -> Multivector<T, B> {
    mv.scaled(t)
}

impl<T: Coefficient, B: Basis> Add<&Multivector<T, B>> for &Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn add(self, rhs: &Multivector<T, B>) -> Multivector<T, B> {
        self.merge(rhs, false)
    }
}

impl<T: Coefficient, B: Basis> Add for Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn add(self, rhs: Multivector<T, B>) -> Multivector<T, B> {
        self.merge(&rhs, false)
    }
}

impl<T: Coefficient, B: Basis> Sub<&Multivector<T, B>> for &Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn sub(self, rhs: &Multivector<T, B>) -> Multivector<T, B> {
        self.merge(rhs, true)
    }
}

impl<T: Coefficient, B: Basis> Sub for Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn sub(self, rhs: Multivector<T, B>) -> Multivector<T, B> {
        self.merge(&rhs, true)
    }
}

impl<T: Coefficient, B: Basis> Neg for &Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn neg(self) -> Multivector<T, B> {
        self.map(|coeff| -coeff.clone())
    }
}

impl<T: Coefficient, B: Basis> Neg for Multivector<T, B> {
    type Output = Multivector<T, B>;

    fn neg(self) -> Multivector<T, B> {
        -&self
    }
}

macro_rules! impl_scalar_mul {
    ($ty:ty) => {
        impl<B: Basis> Mul<$ty> for Multivector<$ty, B> {
            type Output = Multivector<$ty, B>;

            fn mul(self, rhs: $ty) -> Multivector<$ty, B> {
                self.scaled(&rhs)
            }
        }

        impl<B: Basis> Mul<$ty> for &Multivector<$ty, B> {
            type Output = Multivector<$ty, B>;

            fn mul(self, rhs: $ty) -> Multivector<$ty, B> {
                self.scaled(&rhs)
            }
        }

        impl<B: Basis> Mul<Multivector<$ty, B>> for $ty {
            type Output = Multivector<$ty, B>;

            fn mul(self, rhs: Multivector<$ty, B>) -> Multivector<$ty, B> {
                scale(&self, &rhs)
            }
        }
    };
}

impl_scalar_mul!(f64);
impl_scalar_mul!(f32);
impl_scalar_mul!(Symbol);

impl<T: Coefficient, B: Basis> fmt::Display for Multivector<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (blade, coeff)) in self.terms.iter().enumerate() {
            let negative = coeff.is_negative();
            let magnitude = if negative {
                (-coeff.clone()).simplify()
            } else {
                coeff.clone()
            };
            match (i, negative) {
                (0, false) => {}
                (0, true) => f.write_str("-")?,
                (_, false) => f.write_str(" + ")?,
                (_, true) => f.write_str(" - ")?,
            }
            let wrap = magnitude.is_compound() && (i > 0 || negative || !blade.is_scalar());
            if blade.is_scalar() {
                if wrap {
                    write!(f, "({magnitude})")?;
                } else {
                    write!(f, "{magnitude}")?;
                }
            } else if magnitude.is_one() {
                write!(f, "{}", blade.name())?;
            } else if wrap {
                write!(f, "({magnitude})*{}", blade.name())?;
            } else {
                write!(f, "{magnitude}*{}", blade.name())?;
            }
        }
        Ok(())
    }
}
