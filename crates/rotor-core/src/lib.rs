//! # rotor-core
//!
//! Core expression engine for the rotor algebra toolkit.
//!
//! This crate provides:
//! - Immutable expression trees behind shared `Arc` handles
//! - Exact machine-word rational constants
//! - Arithmetic operators that apply local algebraic identities
//! - A canonical total order for sorting commuting operands
//! - Infix and tree printing
//!
//! ## Design Principles
//!
//! - **Build once, share freely**: nodes are never mutated after construction
//! - **Syntactic equality**: `==` compares structure; canonical forms come
//!   from `rotor-simplify`
//! - **Loud failures**: division by zero and overflow are errors, never
//!   sentinel values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod error;
pub mod expr;
pub mod fraction;
pub mod ops;
pub mod order;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use display::TreeDisplay;
pub use error::SymbolError;
pub use expr::{Function, Node, Operator};
pub use fraction::Fraction;
pub use symbol::{cos, sin, Symbol};
