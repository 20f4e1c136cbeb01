//! Expression node types.
//!
//! This module defines the node stored behind every [`Symbol`] handle and
//! the operator vocabulary used to build interior nodes.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::SymbolError;
use crate::fraction::Fraction;
use crate::symbol::Symbol;

/// A node of an expression tree.
///
/// Every interior node has at most two children. Children are shared
/// [`Symbol`] handles, so a sub-expression may appear under many parents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    // === Atoms ===
    /// A 64-bit integer literal.
    Integer(i64),

    /// A non-integral rational literal.
    ///
    /// Invariant: the fraction is reduced and its denominator is > 1.
    Rational(Fraction),

    /// A named variable.
    Variable(Arc<str>),

    // === Compound Expressions ===
    /// Negation: -expr.
    Neg(Symbol),

    /// Sum: lhs + rhs.
    Add(Symbol, Symbol),

    /// Difference: lhs - rhs.
    Sub(Symbol, Symbol),

    /// Product: lhs * rhs.
    Mul(Symbol, Symbol),

    /// Quotient: lhs / rhs.
    Div(Symbol, Symbol),

    /// An unevaluated function application: f(arg).
    Function(Function, Symbol),
}

impl Node {
    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Integer(_) | Node::Rational(_) | Node::Variable(_)
        )
    }

    /// Returns the operator of an interior node.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Integer(_) | Node::Rational(_) | Node::Variable(_) => None,
            Node::Neg(_) => Some(Operator::Neg),
            Node::Add(..) => Some(Operator::Add),
            Node::Sub(..) => Some(Operator::Sub),
            Node::Mul(..) => Some(Operator::Mul),
            Node::Div(..) => Some(Operator::Div),
            Node::Function(func, _) => Some(Operator::Function(*func)),
        }
    }

    /// Returns the children of this node, left first.
    #[must_use]
    pub fn children(&self) -> SmallVec<[&Symbol; 2]> {
        match self {
            Node::Integer(_) | Node::Rational(_) | Node::Variable(_) => SmallVec::new(),
            Node::Neg(arg) | Node::Function(_, arg) => smallvec::smallvec![arg],
            Node::Add(l, r) | Node::Sub(l, r) | Node::Mul(l, r) | Node::Div(l, r) => {
                smallvec::smallvec![l, r]
            }
        }
    }
}

/// Unevaluated unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
}

impl Function {
    /// The printed name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
        }
    }
}

/// The operator of an interior node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Unary negation.
    Neg,
    /// Binary addition.
    Add,
    /// Binary subtraction.
    Sub,
    /// Binary multiplication.
    Mul,
    /// Binary division.
    Div,
    /// Unary function application.
    Function(Function),
}

impl Operator {
    /// The operator's text. Canonical ordering compares these strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Neg => "neg",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Function(func) => func.name(),
        }
    }

    /// Number of operands the operator takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Operator::Neg | Operator::Function(_) => 1,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => 2,
        }
    }
}

impl FromStr for Operator {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neg" | "~" => Ok(Operator::Neg),
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "sin" => Ok(Operator::Function(Function::Sin)),
            "cos" => Ok(Operator::Function(Function::Cos)),
            other => Err(SymbolError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leaf() {
        assert!(Node::Integer(42).is_leaf());
        assert!(Node::Variable("x".into()).is_leaf());
        assert!(!Node::Neg(Symbol::var("x")).is_leaf());
    }

    #[test]
    fn test_operator_parse() {
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
        assert_eq!(
            "cos".parse::<Operator>(),
            Ok(Operator::Function(Function::Cos))
        );
        assert_eq!(
            "".parse::<Operator>(),
            Err(SymbolError::InvalidOperator(String::new()))
        );
    }

    #[test]
    fn test_children() {
        let x = Symbol::var("x");
        let y = Symbol::var("y");
        let node = Node::Sub(x.clone(), y.clone());
        let children = node.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0], &x);
        assert_eq!(children[1], &y);
        assert_eq!(node.operator(), Some(Operator::Sub));
    }
}
