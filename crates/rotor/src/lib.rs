//! # Rotor
//!
//! Symbolic expressions and geometric algebra in one toolkit.
//!
//! ## Features
//!
//! - **Shared Expression Trees**: immutable `Symbol` handles with exact
//!   rational leaves
//! - **Normal Forms**: distribution, canonical ordering and like-term
//!   cancellation
//! - **Equality Saturation**: an e-graph oracle for symbolic equivalence
//! - **Geometric Algebra**: sparse multivectors over `f64`, `f32` or
//!   `Symbol`, with graded products and the conformal model of 3-space
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rotor::prelude::*;
//!
//! let (a, b) = (Symbol::var("a"), Symbol::var("b"));
//! let expr = (&a + &b) * (&a - &b);
//! let simplified = normal_form(&expr)?;
//!
//! let p = Multivector::<Symbol, E41>::conformal(a, b, Symbol::zero());
//! let back = Multivector::extract(&p)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rotor_core as core;
pub use rotor_ga as ga;
pub use rotor_simplify as simplify;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rotor_core::{cos, sin, Fraction, Symbol, SymbolError};
    pub use rotor_ga::{BasisBlade, Coefficient, GaError, Multivector, E3, E41};
    pub use rotor_simplify::{normal_form, Simplifier, Simplify};
}
