//! # rotor-ga
//!
//! Geometric algebra over numeric or symbolic coefficients.
//!
//! This crate provides:
//! - `BasisBlade`: signed unit blades stored as bit sets, with the
//!   geometric product of two blades
//! - `Multivector`: sparse linear combinations of blades
//! - Graded products chosen by a compile-time `Selector` (inner, wedge,
//!   contractions, fat dot, Hestenes, geometric)
//! - Reversion, inversion, duality and the meet
//! - The conformal model of 3-space: embedding, extraction and
//!   translation versors
//!
//! ## Coefficients
//!
//! Any [`Coefficient`] works: `f64`, `f32` or [`rotor_core::Symbol`].
//! Symbolic coefficients are brought to normal form after every operation,
//! so terms that cancel symbolically disappear from the result.
//!
//! ```rust,ignore
//! use rotor_ga::{Multivector, E41};
//!
//! let a = Multivector::<f64, E41>::vector(0.0, 1.0, 2.0, 3.0);
//! let b = Multivector::<f64, E41>::vector(0.0, 2.5, 2.5, 0.5);
//! let cross = a.wedge(&b).dual(3)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod blade;
pub mod coefficient;
pub mod conformal;
pub mod error;
pub mod multivector;
pub mod products;
pub mod selector;

#[cfg(test)]
mod proptests;

pub use basis::{Basis, ConformalBasis, Signature, E3, E41};
pub use blade::{involution_sign, reversal_sign, BasisBlade, Flip};
pub use coefficient::Coefficient;
pub use error::GaError;
pub use multivector::{scale, Multivector};
pub use selector::{
    FatDot, Geometric, Hestenes, Inner, LeftContraction, RightContraction, Selector, Wedge,
};
