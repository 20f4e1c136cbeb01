//! The conformal model of Euclidean 3-space.
//!
//! Points are embedded as null vectors `x + n0 + ½|x|² ni`, where
//! `n0 = e₋ + e₊` is the origin and `ni = ½e₋ − ½e₊` the point at infinity.
//! With these conventions `n0 · ni = -1` and every embedded point `X`
//! satisfies `X · X = 0` and `X · ni = -1`.

use crate::basis::ConformalBasis;
use crate::blade::BasisBlade;
use crate::coefficient::Coefficient;
use crate::error::GaError;
use crate::multivector::Multivector;

impl<T: Coefficient, B: ConformalBasis> Multivector<T, B> {
    /// The extra basis vector squaring to `+1`.
    #[must_use]
    pub fn eplus() -> Self {
        Self::basis(BasisBlade::e(B::EPLUS))
    }

    /// The extra basis vector squaring to `-1`.
    #[must_use]
    pub fn eminus() -> Self {
        Self::basis(BasisBlade::e(B::EMINUS))
    }

    /// The origin, `e₋ + e₊`.
    #[must_use]
    pub fn n0() -> Self {
        Self::eminus() + Self::eplus()
    }

    /// The point at infinity, `½e₋ − ½e₊`.
    #[must_use]
    pub fn ni() -> Self {
        let half = T::from_ratio(1, 2);
        Self::from_terms([
            (half.clone(), BasisBlade::e(B::EMINUS)),
            (-half, BasisBlade::e(B::EPLUS)),
        ])
    }

    /// Embeds the point `(v1, v2, v3)`.
    #[must_use]
    pub fn conformal(v1: T, v2: T, v3: T) -> Self {
        let v = Self::vector(T::zero(), v1, v2, v3);
        let half_square = v.inner(&v) * T::from_ratio(1, 2);
        &(&v + &Self::n0()) + &Self::ni().scaled(&half_square)
    }

    /// Recovers the Euclidean point of an embedded null vector, normalising
    /// by `-(x · ni)` first.
    ///
    /// # Errors
    ///
    /// Returns [`GaError::DivisionByZero`] if `x · ni` is zero, as it is for
    /// `ni` itself and for anything without an origin component.
    pub fn extract(x: &Self) -> Result<Self, GaError> {
        let weight = -x.inner(&Self::ni());
        let extra = BasisBlade::<B>::e(B::EPLUS).bits() | BasisBlade::<B>::e(B::EMINUS).bits();
        if weight.is_zero() {
            return Err(GaError::DivisionByZero);
        }
        let terms = x
            .iter()
            .filter(|(blade, _)| blade.grade() == 1 && blade.bits() & extra == 0)
            .map(|(blade, coeff)| Ok((*blade, coeff.try_div(&weight)?)))
            .collect::<Result<Vec<_>, GaError>>()?;
        Ok(Self::from_sorted(terms))
    }

    /// The translation rotor `1 + ni a / 2` for a Euclidean vector `a`.
    #[must_use]
    pub fn translate_versor(a: &Self) -> Self {
        &Self::scalar(T::one()) + &Self::half_generator(a)
    }

    /// The inverse translation rotor `1 - ni a / 2`.
    #[must_use]
    pub fn inv_translate_versor(a: &Self) -> Self {
        &Self::scalar(T::one()) - &Self::half_generator(a)
    }

    fn half_generator(a: &Self) -> Self {
        (&Self::ni() * a).scaled(&T::from_ratio(1, 2))
    }

    /// Translates a conformal object by the Euclidean vector `a`, using the
    /// sandwich `T x T⁻¹`.
    #[must_use]
    pub fn translate(x: &Self, a: &Self) -> Self {
        &(&Self::translate_versor(a) * x) * &Self::inv_translate_versor(a)
    }
}
