//! Errors raised while building or rewriting symbols.

use thiserror::Error;

/// Errors that can occur while constructing or simplifying a [`Symbol`].
///
/// [`Symbol`]: crate::Symbol
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// An interior node was requested with an empty or unknown operator.
    #[error("invalid operator {0:?}")]
    InvalidOperator(String),

    /// An interior node was given the wrong number of children.
    #[error("operator `{op}` takes {expected} operand(s)")]
    Arity {
        /// The operator text.
        op: &'static str,
        /// The number of operands it takes.
        expected: usize,
    },

    /// A leaf was requested with an empty name.
    #[error("symbol name cannot be empty")]
    EmptyName,

    /// A numeral-looking name did not parse as an integer.
    #[error("malformed numeral {0:?}")]
    InvalidNumeral(String),

    /// Division by a zero symbol.
    #[error("symbolic division by zero")]
    DivisionByZero,

    /// A rational constant left the range of machine integers.
    #[error("rational constant overflowed 64-bit range")]
    Overflow,
}
