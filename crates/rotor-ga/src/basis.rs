//! Basis signatures.
//!
//! A basis has `REAL_DIM` vectors squaring to `+1` followed by `IMAG_DIM`
//! vectors squaring to `-1`. The signature is a type parameter, so blades
//! from different algebras cannot be mixed.

use std::fmt::Debug;
use std::hash::Hash;

/// An orthonormal basis signature.
///
/// `DIM` must not exceed 31, since blades are stored as `u32` bit sets.
/// Blades of a wider basis fail to compile:
///
/// ```compile_fail
/// use rotor_ga::{BasisBlade, Signature};
///
/// let _ = BasisBlade::<Signature<32, 0>>::scalar();
/// ```
pub trait Basis: Copy + Debug + Default + Eq + Hash + 'static {
    /// Number of basis vectors squaring to `+1`.
    const REAL_DIM: u32;
    /// Number of basis vectors squaring to `-1`.
    const IMAG_DIM: u32;
    /// Total number of basis vectors.
    const DIM: u32 = Self::REAL_DIM + Self::IMAG_DIM;
    /// Evaluated by every blade constructor; fails when `DIM > 31`.
    const FITS_IN_BLADE: () = assert!(
        Self::REAL_DIM < 32 && Self::IMAG_DIM < 32 && Self::DIM < 32,
        "a basis may have at most 31 vectors"
    );
}

/// The signature `Cl(R, I)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature<const R: u32, const I: u32>;

impl<const R: u32, const I: u32> Basis for Signature<R, I> {
    const REAL_DIM: u32 = R;
    const IMAG_DIM: u32 = I;
}

/// Conformal model of 3-space: `e1..e4` square to `+1`, `e1i` to `-1`.
pub type E41 = Signature<4, 1>;

/// Euclidean 3-space.
pub type E3 = Signature<3, 0>;

/// A basis with the two extra vectors of the conformal model.
///
/// Both constants are 1-based basis vector numbers.
pub trait ConformalBasis: Basis {
    /// The extra vector squaring to `+1`.
    const EPLUS: u32;
    /// The extra vector squaring to `-1`.
    const EMINUS: u32;
}

impl ConformalBasis for E41 {
    const EPLUS: u32 = 4;
    const EMINUS: u32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(E41::DIM, 5);
        assert_eq!(E41::IMAG_DIM, 1);
        assert_eq!(E3::DIM, 3);
        assert_eq!(<Signature<2, 2> as Basis>::DIM, 4);
    }

    #[test]
    fn test_widest_basis_fits() {
        let () = <Signature<30, 1> as Basis>::FITS_IN_BLADE;
        assert_eq!(<Signature<30, 1> as Basis>::DIM, 31);
    }
}
