//! Sorted sum-of-products form.

use rotor_core::{Symbol, SymbolError};

use crate::additive::{additive_subexps, Terms};
use crate::distribute::distribute;
use crate::term::Term;

/// Rewrites `expr` as a sorted sum of canonical products.
///
/// The expression is distributed and flattened into terms. Each term is
/// split into coefficient and factors, compound factors are sorted
/// recursively, and the term is rebuilt with the coefficient leading and its
/// sign applied once. The terms are then sorted under the canonical order and
/// summed left to right. Like terms are not merged; see
/// [`normal_form`](crate::normal_form).
///
/// # Errors
///
/// Returns [`SymbolError::DivisionByZero`] if a denominator collapses to
/// zero, and [`SymbolError::Overflow`] if rational folding overflows.
pub fn sorted_form(expr: &Symbol) -> Result<Symbol, SymbolError> {
    let distributed = distribute(expr)?;
    let mut terms = Terms::new();
    for term in additive_subexps(&distributed)? {
        let canonical = Term::from_symbol(&term, &sorted_form)?.to_symbol()?;
        if !canonical.is_zero() {
            terms.push(canonical);
        }
    }
    terms.sort();
    sum(&terms)
}

/// Left-nested sum of `terms`, `0` when empty.
pub(crate) fn sum(terms: &[Symbol]) -> Result<Symbol, SymbolError> {
    terms.iter().try_fold(Symbol::zero(), |acc, term| acc.try_add(term))
}
