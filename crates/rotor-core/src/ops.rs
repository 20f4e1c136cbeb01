//! Arithmetic on symbols.
//!
//! Every operation returns a new tree and applies only local identities
//! (zero, one, minus one, double negation, rational folding, `X - X`,
//! `X / X`, `-Z + Z`). Operand order is preserved: canonical ordering is the
//! job of the simplification passes.
//!
//! The `try_*` methods report failures. The operator traits call them and
//! panic on failure, the way a field division by zero panics.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::SymbolError;
use crate::expr::Node;
use crate::symbol::Symbol;

impl Symbol {
    /// Negation.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] when negating `i64::MIN`.
    pub fn try_neg(&self) -> Result<Symbol, SymbolError> {
        if let Some(r) = self.as_fraction() {
            return Ok(Symbol::from_fraction(r.checked_neg()?));
        }
        if let Node::Neg(inner) = self.node() {
            return Ok(inner.clone());
        }
        Ok(Symbol::from_node(Node::Neg(self.clone())))
    }

    /// Sum.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] if folding two rationals overflows.
    pub fn try_add(&self, rhs: &Symbol) -> Result<Symbol, SymbolError> {
        if self.is_zero() {
            return Ok(rhs.clone());
        }
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        if let (Some(a), Some(b)) = (self.as_fraction(), rhs.as_fraction()) {
            return Ok(Symbol::from_fraction(a.checked_add(b)?));
        }
        match (self.node(), rhs.node()) {
            (Node::Neg(z), _) if z == rhs => return Ok(Symbol::zero()),
            (_, Node::Neg(z)) if z == self => return Ok(Symbol::zero()),
            _ => {}
        }
        Ok(Symbol::from_node(Node::Add(self.clone(), rhs.clone())))
    }

    /// Difference.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] if folding two rationals overflows.
    pub fn try_sub(&self, rhs: &Symbol) -> Result<Symbol, SymbolError> {
        if self == rhs {
            return Ok(Symbol::zero());
        }
        if self.is_zero() {
            return rhs.try_neg();
        }
        if rhs.is_zero() {
            return Ok(self.clone());
        }
        if let (Some(a), Some(b)) = (self.as_fraction(), rhs.as_fraction()) {
            return Ok(Symbol::from_fraction(a.checked_sub(b)?));
        }
        if let Node::Neg(z) = rhs.node() {
            return self.try_add(z);
        }
        Ok(Symbol::from_node(Node::Sub(self.clone(), rhs.clone())))
    }

    /// Product.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Overflow`] if folding two rationals overflows.
    pub fn try_mul(&self, rhs: &Symbol) -> Result<Symbol, SymbolError> {
        if let (Some(a), Some(b)) = (self.as_fraction(), rhs.as_fraction()) {
            return Ok(Symbol::from_fraction(a.checked_mul(b)?));
        }
        if self.is_zero() || rhs.is_zero() {
            return Ok(Symbol::zero());
        }
        if self.is_one() {
            return Ok(rhs.clone());
        }
        if rhs.is_one() {
            return Ok(self.clone());
        }
        if self.is_minus_one() {
            return rhs.try_neg();
        }
        if rhs.is_minus_one() {
            return self.try_neg();
        }
        if let (Node::Neg(l), Node::Neg(r)) = (self.node(), rhs.node()) {
            return l.try_mul(r);
        }
        Ok(Symbol::from_node(Node::Mul(self.clone(), rhs.clone())))
    }

    /// Quotient.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if `rhs` is the zero symbol
    /// and [`SymbolError::Overflow`] if folding two rationals overflows.
    pub fn try_div(&self, rhs: &Symbol) -> Result<Symbol, SymbolError> {
        if rhs.is_zero() {
            return Err(SymbolError::DivisionByZero);
        }
        if rhs.is_one() {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(Symbol::zero());
        }
        if self == rhs {
            return Ok(Symbol::one());
        }
        if let (Some(a), Some(b)) = (self.as_fraction(), rhs.as_fraction()) {
            return Ok(Symbol::from_fraction(a.checked_div(b)?));
        }
        if let (Node::Neg(l), Node::Neg(r)) = (self.node(), rhs.node()) {
            return l.try_div(r);
        }
        if rhs.as_fraction().is_some_and(|r| r.is_negative()) {
            return self.try_neg()?.try_div(&rhs.try_neg()?);
        }
        Ok(Symbol::from_node(Node::Div(self.clone(), rhs.clone())))
    }
}

fn expect_symbol(result: Result<Symbol, SymbolError>) -> Symbol {
    result.unwrap_or_else(|e| panic!("{e}"))
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Symbol> for &Symbol {
            type Output = Symbol;

            /// # Panics
            ///
            /// Panics where the matching `try_*` method returns an error.
            fn $method(self, rhs: &Symbol) -> Symbol {
                expect_symbol(self.$checked(rhs))
            }
        }

        impl $trait<Symbol> for Symbol {
            type Output = Symbol;

            fn $method(self, rhs: Symbol) -> Symbol {
                expect_symbol(self.$checked(&rhs))
            }
        }

        impl $trait<&Symbol> for Symbol {
            type Output = Symbol;

            fn $method(self, rhs: &Symbol) -> Symbol {
                expect_symbol(self.$checked(rhs))
            }
        }

        impl $trait<Symbol> for &Symbol {
            type Output = Symbol;

            fn $method(self, rhs: Symbol) -> Symbol {
                expect_symbol(self.$checked(&rhs))
            }
        }

        impl $trait<i64> for Symbol {
            type Output = Symbol;

            fn $method(self, rhs: i64) -> Symbol {
                expect_symbol(self.$checked(&Symbol::integer(rhs)))
            }
        }

        impl $trait<i64> for &Symbol {
            type Output = Symbol;

            fn $method(self, rhs: i64) -> Symbol {
                expect_symbol(self.$checked(&Symbol::integer(rhs)))
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);
impl_binary_op!(Div, div, try_div);

impl Neg for Symbol {
    type Output = Symbol;

    fn neg(self) -> Symbol {
        expect_symbol(self.try_neg())
    }
}

impl Neg for &Symbol {
    type Output = Symbol;

    fn neg(self) -> Symbol {
        expect_symbol(self.try_neg())
    }
}
