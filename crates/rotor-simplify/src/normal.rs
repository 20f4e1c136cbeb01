//! Like-term cancellation and the terminal normal form.

use smallvec::SmallVec;
use tracing::{debug, trace};

use rotor_core::{Symbol, SymbolError};

use crate::additive::{additive_subexps, make_additive};
use crate::sorted::{sorted_form, sum};
use crate::term::Term;

/// Result of a cancellation pass, with counts for statistics.
pub(crate) struct Cancelled {
    pub(crate) symbol: Symbol,
    pub(crate) terms_in: usize,
    pub(crate) terms_out: usize,
    pub(crate) merged: usize,
}

/// Brings `expr` to its normal form: [`sorted_form`] followed by
/// [`cancel_additions`].
///
/// The result is a sorted sum of canonical terms with like terms combined.
/// Normal forms are idempotent: `normal_form(normal_form(x)) ==
/// normal_form(x)`. Two expressions with equal normal forms are equal as
/// rational functions.
///
/// # Errors
///
/// Returns [`SymbolError::DivisionByZero`] if a denominator collapses to
/// zero, and [`SymbolError::Overflow`] if rational folding overflows.
#[tracing::instrument(level = "trace", skip_all)]
pub fn normal_form(expr: &Symbol) -> Result<Symbol, SymbolError> {
    normal_form_with(expr, false)
}

/// [`normal_form`], skipping the sorting pass when the caller already holds
/// a [`sorted_form`].
///
/// # Errors
///
/// See [`normal_form`].
pub fn normal_form_with(expr: &Symbol, assume_sorted: bool) -> Result<Symbol, SymbolError> {
    if assume_sorted {
        cancel_additions(expr)
    } else {
        cancel_additions(&sorted_form(expr)?)
    }
}

/// Combines like terms of a sum.
///
/// Terms whose units (the term divided by its rational multiple) are equal
/// are merged by summing their multiples; terms whose multiples sum to zero
/// vanish. Every pair of terms is compared, so the pass is quadratic in the
/// number of terms. Function arguments and compound denominators are
/// brought to normal form first.
///
/// # Errors
///
/// Returns [`SymbolError::DivisionByZero`] if a denominator collapses to
/// zero, and [`SymbolError::Overflow`] if summing multiples overflows.
pub fn cancel_additions(expr: &Symbol) -> Result<Symbol, SymbolError> {
    Ok(cancel_with_counts(expr)?.symbol)
}

pub(crate) fn cancel_with_counts(expr: &Symbol) -> Result<Cancelled, SymbolError> {
    let terms = additive_subexps(&make_additive(expr)?)?;
    let terms_in = terms.len();

    let mut entries: SmallVec<[(Term, Symbol); 8]> = SmallVec::new();
    for term in &terms {
        let split = Term::from_symbol(term, &normal_form)?;
        if split.is_zero() {
            continue;
        }
        let unit = split.unit()?;
        entries.push((split, unit));
    }

    let mut merged = 0;
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].1 == entries[j].1 {
                let (other, _) = entries.remove(j);
                trace!(unit = %entries[i].1, "merging like terms");
                entries[i].0.coefficient = entries[i].0.coefficient.checked_add(other.coefficient)?;
                merged += 1;
            } else {
                j += 1;
            }
        }
        if entries[i].0.is_zero() {
            entries.remove(i);
        } else {
            i += 1;
        }
    }

    let mut rebuilt: SmallVec<[Symbol; 8]> = SmallVec::with_capacity(entries.len());
    for (term, _) in &entries {
        rebuilt.push(term.to_symbol()?);
    }
    rebuilt.sort();

    debug!(terms_in, terms_out = rebuilt.len(), merged, "cancelled like terms");
    Ok(Cancelled {
        symbol: sum(&rebuilt)?,
        terms_in,
        terms_out: rebuilt.len(),
        merged,
    })
}
