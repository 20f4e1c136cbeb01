//! Error types for geometric-algebra operations.

use rotor_core::SymbolError;
use thiserror::Error;

/// Errors raised by blades and multivectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// A basis vector number outside `1..=dim`, or a pseudo-scalar wider
    /// than the basis.
    #[error("basis index {index} out of range for a {dim}-dimensional basis")]
    OutOfRange {
        /// The offending index.
        index: u32,
        /// Dimension of the basis.
        dim: u32,
    },

    /// The scalar `X · reverse(X)` is zero, as for every null vector.
    #[error("multivector is not invertible: X . reverse(X) is zero")]
    NotInvertible,

    /// A coefficient was divided by zero.
    #[error("coefficient division by zero")]
    DivisionByZero,

    /// A symbolic coefficient operation failed.
    #[error(transparent)]
    Symbol(#[from] SymbolError),
}
