//! Additive and multiplicative flattening.
//!
//! Symbols are binary trees, so a sum of four terms is three nested `+`
//! nodes in whatever shape the caller built. These helpers recover the flat
//! list of terms or factors with the signs folded in.

use smallvec::SmallVec;

use rotor_core::{Node, Symbol, SymbolError};

/// Terms of a flattened sum.
pub type Terms = SmallVec<[Symbol; 8]>;

/// Factors of a flattened product.
pub type Factors = SmallVec<[Symbol; 4]>;

/// Rewrites every difference `A - B` as `A + (-B)`.
///
/// Negation is pushed through sums, so the result contains no `-` nodes and
/// no negation directly above a sum. Products, quotients and function
/// arguments are rewritten recursively.
///
/// # Errors
///
/// Returns an error if rebuilding a quotient or negating a rational fails.
pub fn make_additive(expr: &Symbol) -> Result<Symbol, SymbolError> {
    match expr.node() {
        Node::Integer(_) | Node::Rational(_) | Node::Variable(_) => Ok(expr.clone()),
        Node::Add(l, r) => make_additive(l)?.try_add(&make_additive(r)?),
        Node::Sub(l, r) => make_additive(l)?.try_add(&negate_sum(&make_additive(r)?)?),
        Node::Neg(arg) => negate_sum(&make_additive(arg)?),
        Node::Mul(l, r) => make_additive(l)?.try_mul(&make_additive(r)?),
        Node::Div(l, r) => make_additive(l)?.try_div(&make_additive(r)?),
        Node::Function(func, arg) => Ok(Symbol::from_node(Node::Function(*func, make_additive(arg)?))),
    }
}

/// Negates every term of a difference-free sum.
fn negate_sum(expr: &Symbol) -> Result<Symbol, SymbolError> {
    match expr.node() {
        Node::Add(l, r) => negate_sum(l)?.try_add(&negate_sum(r)?),
        _ => expr.try_neg(),
    }
}

/// Flattens a chain of `+`, `-` and negation into its terms.
///
/// Each returned term carries its own sign: `a - (b - c)` yields
/// `[a, -b, c]`. Anything that is not a sum, difference or negation is a
/// term, including products that contain sums.
///
/// # Errors
///
/// Returns [`SymbolError::Overflow`] if negating a rational term overflows.
pub fn additive_subexps(expr: &Symbol) -> Result<Terms, SymbolError> {
    let mut terms = Terms::new();
    collect_terms(expr, false, &mut terms)?;
    Ok(terms)
}

fn collect_terms(expr: &Symbol, negate: bool, out: &mut Terms) -> Result<(), SymbolError> {
    match expr.node() {
        Node::Add(l, r) => {
            collect_terms(l, negate, out)?;
            collect_terms(r, negate, out)
        }
        Node::Sub(l, r) => {
            collect_terms(l, negate, out)?;
            collect_terms(r, !negate, out)
        }
        Node::Neg(arg) => collect_terms(arg, !negate, out),
        _ => {
            out.push(if negate { expr.try_neg()? } else { expr.clone() });
            Ok(())
        }
    }
}

/// Flattens a chain of `*` into its factors.
///
/// Negations and negative rationals are stripped as they are met; the flag
/// is true when an odd number of sign flips was absorbed. `-(2*a)*(-b)`
/// yields `([2, a, b], false)`. Quotients are factors, not chains.
///
/// # Errors
///
/// Returns [`SymbolError::Overflow`] if a rational factor is `i64::MIN`.
pub fn multiplicative_subexps(expr: &Symbol) -> Result<(Factors, bool), SymbolError> {
    let mut factors = Factors::new();
    let mut negative = false;
    collect_factors(expr, &mut negative, &mut factors)?;
    Ok((factors, negative))
}

fn collect_factors(expr: &Symbol, negative: &mut bool, out: &mut Factors) -> Result<(), SymbolError> {
    if let Some(value) = expr.as_fraction() {
        if value.is_negative() {
            *negative = !*negative;
            out.push(Symbol::from_fraction(value.checked_neg()?));
        } else {
            out.push(expr.clone());
        }
        return Ok(());
    }
    match expr.node() {
        Node::Mul(l, r) => {
            collect_factors(l, negative, out)?;
            collect_factors(r, negative, out)
        }
        Node::Neg(arg) => {
            *negative = !*negative;
            collect_factors(arg, negative, out)
        }
        _ => {
            out.push(expr.clone());
            Ok(())
        }
    }
}
