//! # rotor-simplify
//!
//! Canonicalisation passes for rotor symbols.
//!
//! This crate provides:
//! - `distribute`: expansion into a sum of products and quotients
//! - `make_additive`: removal of every difference node
//! - `sorted_form`: a sum of sorted products under the canonical order
//! - `normal_form` / `cancel_additions`: like-term cancellation
//! - `get_multiple`: the rational scale factor of a term
//! - An equality-saturation oracle built on `egg`, used to cross-check the
//!   passes
//!
//! ## Normal Forms vs. Equality Saturation
//!
//! The passes are a deterministic rewrite to one representative per
//! equivalence class of sums of products. The e-graph oracle explores all
//! rewrites at once; it is slower and bounded, but independent of the
//! canonical order, which makes it a good second opinion.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod additive;
pub mod distribute;
pub mod engine;
pub mod equivalence;
pub mod language;
pub mod normal;
pub mod rules;
pub mod sorted;
pub mod term;

#[cfg(test)]
mod proptests;

use rotor_core::{Symbol, SymbolError};

pub use additive::{additive_subexps, make_additive, multiplicative_subexps};
pub use distribute::distribute;
pub use engine::{SimplificationStats, Simplifier, SimplifierConfig};
pub use equivalence::{EqualitySaturation, EquivalenceConfig};
pub use language::RotorLang;
pub use normal::{cancel_additions, normal_form, normal_form_with};
pub use sorted::sorted_form;
pub use term::{get_multiple, Term};

/// Method syntax for the simplification passes.
pub trait Simplify {
    /// See [`distribute()`].
    ///
    /// # Errors
    ///
    /// Returns an error if a denominator collapses to zero while rewriting.
    fn distribute(&self) -> Result<Symbol, SymbolError>;

    /// See [`make_additive()`].
    ///
    /// # Errors
    ///
    /// Returns an error if a denominator collapses to zero while rewriting.
    fn make_additive(&self) -> Result<Symbol, SymbolError>;

    /// See [`sorted_form()`].
    ///
    /// # Errors
    ///
    /// Returns an error if a denominator collapses to zero while rewriting.
    fn sorted_form(&self) -> Result<Symbol, SymbolError>;

    /// See [`normal_form()`].
    ///
    /// # Errors
    ///
    /// Returns an error if a denominator collapses to zero while rewriting.
    fn normal_form(&self) -> Result<Symbol, SymbolError>;

    /// See [`cancel_additions()`].
    ///
    /// # Errors
    ///
    /// Returns an error if a denominator collapses to zero while rewriting.
    fn cancel_additions(&self) -> Result<Symbol, SymbolError>;

    /// See [`get_multiple()`].
    ///
    /// # Errors
    ///
    /// Returns an error if a rational denominator is zero.
    fn get_multiple(&self) -> Result<Symbol, SymbolError>;
}

impl Simplify for Symbol {
    fn distribute(&self) -> Result<Symbol, SymbolError> {
        distribute::distribute(self)
    }

    fn make_additive(&self) -> Result<Symbol, SymbolError> {
        additive::make_additive(self)
    }

    fn sorted_form(&self) -> Result<Symbol, SymbolError> {
        sorted::sorted_form(self)
    }

    fn normal_form(&self) -> Result<Symbol, SymbolError> {
        normal::normal_form(self)
    }

    fn cancel_additions(&self) -> Result<Symbol, SymbolError> {
        normal::cancel_additions(self)
    }

    fn get_multiple(&self) -> Result<Symbol, SymbolError> {
        term::get_multiple(self)
    }
}
