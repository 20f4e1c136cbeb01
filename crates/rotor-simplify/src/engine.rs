//! The simplification engine.
//!
//! This module provides the high-level API: a configured pipeline over the
//! normal-form passes, with statistics.

use tracing::debug;

use rotor_core::{Symbol, SymbolError};

use crate::additive::make_additive;
use crate::normal::{cancel_with_counts, normal_form};
use crate::sorted::sorted_form;

/// Configuration for the simplification engine.
#[derive(Clone, Debug)]
pub struct SimplifierConfig {
    /// Distribute and sort before cancelling. When false, only like terms
    /// already visible at the top-level sum are combined.
    pub expand: bool,
    /// The input is already in sorted form; skip the sorting pass.
    pub assume_sorted: bool,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            expand: true,
            assume_sorted: false,
        }
    }
}

/// The main simplification engine.
#[derive(Clone, Debug, Default)]
pub struct Simplifier {
    config: SimplifierConfig,
}

impl Simplifier {
    /// Creates a simplifier with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simplifier with custom configuration.
    #[must_use]
    pub fn with_config(config: SimplifierConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SimplifierConfig {
        &self.config
    }

    /// Simplifies an expression.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if a denominator collapses to
    /// zero, and [`SymbolError::Overflow`] if rational folding overflows.
    pub fn simplify(&self, expr: &Symbol) -> Result<Symbol, SymbolError> {
        self.simplify_with_stats(expr).map(|(result, _)| result)
    }

    /// Simplifies and returns both the result and statistics.
    ///
    /// # Errors
    ///
    /// See [`Simplifier::simplify`].
    #[tracing::instrument(level = "debug", skip_all, fields(size = expr.size()))]
    pub fn simplify_with_stats(&self, expr: &Symbol) -> Result<(Symbol, SimplificationStats), SymbolError> {
        let prepared = match (self.config.expand, self.config.assume_sorted) {
            (true, false) => sorted_form(expr)?,
            (true, true) => expr.clone(),
            (false, _) => make_additive(expr)?,
        };
        let cancelled = cancel_with_counts(&prepared)?;
        let stats = SimplificationStats {
            terms_in: cancelled.terms_in,
            terms_out: cancelled.terms_out,
            merged_pairs: cancelled.merged,
            size_before: expr.size(),
            size_after: cancelled.symbol.size(),
        };
        debug!(?stats, "simplified");
        Ok((cancelled.symbol, stats))
    }

    /// Returns true if both expressions have the same normal form.
    ///
    /// This is always sound: equal normal forms mean equal rational
    /// functions. It ignores the `expand` setting, since unexpanded
    /// expressions rarely share a form.
    ///
    /// # Errors
    ///
    /// See [`Simplifier::simplify`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn equivalent(&self, lhs: &Symbol, rhs: &Symbol) -> Result<bool, SymbolError> {
        let same = normal_form(lhs)? == normal_form(rhs)?;
        debug!(same, "compared normal forms");
        Ok(same)
    }
}

/// Statistics about one simplification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimplificationStats {
    /// Terms entering the cancellation pass.
    pub terms_in: usize,
    /// Terms left after cancellation.
    pub terms_out: usize,
    /// Number of like-term merges.
    pub merged_pairs: usize,
    /// Node count of the input.
    pub size_before: usize,
    /// Node count of the result.
    pub size_after: usize,
}
