//! Canonical product terms.
//!
//! A term is one summand of a distributed sum: a signed rational
//! coefficient times a product of numerator factors over a product of
//! denominator factors. Splitting a term this way is what lets the passes
//! sort factors and recognise like terms.

use smallvec::SmallVec;

use rotor_core::{Fraction, Node, Symbol, SymbolError};

use crate::additive::multiplicative_subexps;

/// Canonicalises a factor that is itself compound (a sum or a function
/// argument) before it is stored in a term.
pub type Canonicalize<'a> = &'a dyn Fn(&Symbol) -> Result<Symbol, SymbolError>;

/// A product term: `coefficient * factors / denominators`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    /// Signed rational coefficient.
    pub coefficient: Fraction,
    /// Non-rational numerator factors.
    pub factors: SmallVec<[Symbol; 4]>,
    /// Non-rational denominator factors.
    pub denominators: SmallVec<[Symbol; 2]>,
}

impl Term {
    /// Splits `expr` into a term, canonicalising compound factors with
    /// `canon` and sorting both factor lists.
    ///
    /// A compound factor that canonicalises to a rational is folded into the
    /// coefficient; one that is still a sum is kept as a single factor.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if a denominator factor is
    /// zero, or any error raised by `canon`.
    pub fn from_symbol(expr: &Symbol, canon: Canonicalize<'_>) -> Result<Self, SymbolError> {
        let mut term = Term {
            coefficient: Fraction::from_integer(1),
            factors: SmallVec::new(),
            denominators: SmallVec::new(),
        };
        term.absorb(expr, false, canon)?;
        term.factors.sort();
        term.denominators.sort();
        Ok(term)
    }

    fn absorb(&mut self, expr: &Symbol, denominator: bool, canon: Canonicalize<'_>) -> Result<(), SymbolError> {
        let (factors, negative) = multiplicative_subexps(expr)?;
        if negative {
            self.coefficient = self.coefficient.checked_neg()?;
        }
        for factor in factors {
            if let Some(value) = factor.as_fraction() {
                self.coefficient = if denominator {
                    self.coefficient.checked_div(value)?
                } else {
                    self.coefficient.checked_mul(value)?
                };
                continue;
            }
            match factor.node() {
                Node::Div(num, den) => {
                    self.absorb(num, denominator, canon)?;
                    self.absorb(den, !denominator, canon)?;
                }
                Node::Function(func, arg) => {
                    let applied = Symbol::from_node(Node::Function(*func, canon(arg)?));
                    self.push(applied, denominator);
                }
                Node::Add(..) | Node::Sub(..) => {
                    let canonical = canon(&factor)?;
                    if matches!(canonical.node(), Node::Add(..) | Node::Sub(..)) {
                        self.push(canonical, denominator);
                    } else {
                        self.absorb(&canonical, denominator, canon)?;
                    }
                }
                _ => self.push(factor, denominator),
            }
        }
        Ok(())
    }

    fn push(&mut self, factor: Symbol, denominator: bool) {
        if denominator {
            self.denominators.push(factor);
        } else {
            self.factors.push(factor);
        }
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.numerator() == 0
    }

    /// Rebuilds the term as a symbol: the coefficient leads, then the
    /// sorted factors, then the sorted denominators.
    ///
    /// # Errors
    ///
    /// Propagates rational overflow from the rebuilding arithmetic.
    pub fn to_symbol(&self) -> Result<Symbol, SymbolError> {
        self.with_coefficient(self.coefficient)
    }

    /// The term divided by its own coefficient.
    ///
    /// # Errors
    ///
    /// Propagates rational overflow from the rebuilding arithmetic.
    pub fn unit(&self) -> Result<Symbol, SymbolError> {
        self.with_coefficient(Fraction::from_integer(1))
    }

    /// Rebuilds the term with `coefficient` in place of its own.
    ///
    /// # Errors
    ///
    /// Propagates rational overflow from the rebuilding arithmetic.
    pub fn with_coefficient(&self, coefficient: Fraction) -> Result<Symbol, SymbolError> {
        if coefficient.numerator() == 0 {
            return Ok(Symbol::zero());
        }
        let numerator = Symbol::from_fraction(coefficient).try_mul(&product(&self.factors)?)?;
        if self.denominators.is_empty() {
            Ok(numerator)
        } else {
            numerator.try_div(&product(&self.denominators)?)
        }
    }
}

/// Left-nested product of `factors`, `1` when empty.
fn product(factors: &[Symbol]) -> Result<Symbol, SymbolError> {
    let mut iter = factors.iter();
    let Some(first) = iter.next() else {
        return Ok(Symbol::one());
    };
    iter.try_fold(first.clone(), |acc, factor| acc.try_mul(factor))
}

/// Returns the rational scale factor of a term.
///
/// This is the product of the rational factors, divided by the rational
/// denominators, with the sign of every negation folded in. A term without
/// rational factors has multiple `1`.
///
/// # Errors
///
/// Returns [`SymbolError::DivisionByZero`] if a rational denominator is zero.
pub fn get_multiple(term: &Symbol) -> Result<Symbol, SymbolError> {
    let split = Term::from_symbol(term, &|factor| Ok(factor.clone()))?;
    Ok(Symbol::from_fraction(split.coefficient))
}
