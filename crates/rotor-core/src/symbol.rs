//! Shared expression handles.
//!
//! A [`Symbol`] is a cheap-to-clone handle to an immutable [`Node`]. Cloning
//! shares the node; nothing is ever mutated after construction, so one
//! sub-expression can sit under any number of parents and finished trees can
//! be sent across threads.

use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::SymbolError;
use crate::expr::{Function, Node, Operator};
use crate::fraction::Fraction;

/// A handle to an expression tree.
///
/// Equality is syntactic: `a + b` and `b + a` are different symbols. The
/// only exception is rational-valued trees, which compare by value, so
/// `-(3)` equals `-3` and `1/3` equals the quotient node `1 / 3`.
#[derive(Clone)]
pub struct Symbol(Arc<Node>);

impl Symbol {
    /// Wraps a node without applying any algebraic identity.
    #[must_use]
    pub fn from_node(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the node behind this handle.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Returns true if both handles share the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // === Leaf constructors ===

    /// Creates a leaf from a name.
    ///
    /// Numeral-looking names (a leading digit, a leading `#` numeral marker,
    /// or `-` followed by a digit) become integer leaves; anything else is a
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::EmptyName`] for an empty name and
    /// [`SymbolError::InvalidNumeral`] for a numeral-looking name that is not
    /// an integer.
    pub fn new(name: &str) -> Result<Self, SymbolError> {
        let mut chars = name.chars();
        let looks_numeral = match (chars.next(), chars.next()) {
            (None, _) => return Err(SymbolError::EmptyName),
            (Some(c), _) if c.is_ascii_digit() || c == '#' => true,
            (Some('-'), Some(d)) => d.is_ascii_digit(),
            _ => false,
        };
        if !looks_numeral {
            return Ok(Self::var(name));
        }
        name.trim_start_matches('#')
            .parse::<i64>()
            .map(Self::integer)
            .map_err(|_| SymbolError::InvalidNumeral(name.to_string()))
    }

    /// Creates a variable leaf without numeral detection.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty; [`Symbol::new`] reports that as
    /// [`SymbolError::EmptyName`] instead.
    #[must_use]
    pub fn var(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "{}", SymbolError::EmptyName);
        Self::from_node(Node::Variable(name))
    }

    /// Creates an integer leaf.
    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::from_node(Node::Integer(n))
    }

    /// Creates the rational `num / den` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DivisionByZero`] if `den` is zero.
    pub fn rational(num: i64, den: i64) -> Result<Self, SymbolError> {
        Fraction::new(num, den).map(Self::from_fraction)
    }

    /// Creates a rational leaf, using an integer leaf when possible.
    #[must_use]
    pub fn from_fraction(value: Fraction) -> Self {
        if value.is_integer() {
            Self::integer(value.numerator())
        } else {
            Self::from_node(Node::Rational(value))
        }
    }

    /// The rational zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::integer(0)
    }

    /// The rational one.
    #[must_use]
    pub fn one() -> Self {
        Self::integer(1)
    }

    /// The rational minus one.
    #[must_use]
    pub fn minus_one() -> Self {
        Self::integer(-1)
    }

    // === Raw interior constructor ===

    /// Builds an interior node exactly as given, without applying any of the
    /// identities the arithmetic operators use.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Arity`] if `rhs` does not match the operator's
    /// arity and [`SymbolError::DivisionByZero`] for a literal zero divisor.
    pub fn build(op: Operator, lhs: Symbol, rhs: Option<Symbol>) -> Result<Self, SymbolError> {
        let arity_error = || SymbolError::Arity {
            op: op.as_str(),
            expected: op.arity(),
        };
        let node = match (op, rhs) {
            (Operator::Neg, None) => Node::Neg(lhs),
            (Operator::Function(func), None) => Node::Function(func, lhs),
            (Operator::Add, Some(rhs)) => Node::Add(lhs, rhs),
            (Operator::Sub, Some(rhs)) => Node::Sub(lhs, rhs),
            (Operator::Mul, Some(rhs)) => Node::Mul(lhs, rhs),
            (Operator::Div, Some(rhs)) => {
                if rhs.is_zero() {
                    return Err(SymbolError::DivisionByZero);
                }
                Node::Div(lhs, rhs)
            }
            _ => return Err(arity_error()),
        };
        Ok(Self::from_node(node))
    }

    /// Builds an interior node from operator text, see [`Symbol::build`].
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::InvalidOperator`] for empty or unknown
    /// operator text, plus the errors of [`Symbol::build`].
    pub fn build_str(op: &str, lhs: Symbol, rhs: Option<Symbol>) -> Result<Self, SymbolError> {
        Self::build(op.parse()?, lhs, rhs)
    }

    // === Queries ===

    /// Returns the rational value of this tree, if it is rational.
    ///
    /// Integer and rational leaves are rational, and so are negations and
    /// quotients of rationals.
    #[must_use]
    pub fn as_fraction(&self) -> Option<Fraction> {
        match self.node() {
            Node::Integer(n) => Some(Fraction::from_integer(*n)),
            Node::Rational(r) => Some(*r),
            Node::Neg(arg) => arg.as_fraction()?.checked_neg().ok(),
            Node::Div(num, den) => num
                .as_fraction()?
                .checked_div(den.as_fraction()?)
                .ok(),
            _ => None,
        }
    }

    /// Returns true if this tree is a rational constant.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.as_fraction().is_some()
    }

    /// Returns true if this is the rational zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_fraction().is_some_and(|r| r.numerator() == 0)
    }

    /// Returns true if this is the rational one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_fraction().is_some_and(|r| r.is_one())
    }

    /// Returns true if this is the rational minus one.
    #[must_use]
    pub fn is_minus_one(&self) -> bool {
        self.as_fraction()
            .is_some_and(|r| r.is_integer() && r.numerator() == -1)
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns the variable name if this is a variable leaf.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.node() {
            Node::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the operator if this is an interior node.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.node().operator()
    }

    /// Returns the left (or only) child.
    #[must_use]
    pub fn left(&self) -> Option<&Symbol> {
        self.node().children().first().copied()
    }

    /// Returns the right child of a binary node.
    #[must_use]
    pub fn right(&self) -> Option<&Symbol> {
        self.node().children().get(1).copied()
    }

    /// Returns true if this tree carries a leading minus sign: a negative
    /// rational, a negation, or a product/quotient whose leftmost factor
    /// does.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        if let Some(r) = self.as_fraction() {
            return r.is_negative();
        }
        match self.node() {
            Node::Neg(_) => true,
            Node::Mul(l, _) | Node::Div(l, _) => l.is_negative(),
            _ => false,
        }
    }

    /// Counts the nodes of the tree, shared nodes counted once per use.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self
            .node()
            .children()
            .iter()
            .map(|child| child.size())
            .sum::<usize>()
    }
}

/// Symbolic sine; never evaluated numerically.
#[must_use]
pub fn sin(arg: &Symbol) -> Symbol {
    Symbol::from_node(Node::Function(Function::Sin, arg.clone()))
}

/// Symbolic cosine; never evaluated numerically.
#[must_use]
pub fn cos(arg: &Symbol) -> Symbol {
    Symbol::from_node(Node::Function(Function::Cos, arg.clone()))
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self.as_fraction(), other.as_fraction()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.node() == other.node(),
            _ => false,
        }
    }
}

impl Eq for Symbol {}

impl Default for Symbol {
    fn default() -> Self {
        Self::one()
    }
}

impl Zero for Symbol {
    fn zero() -> Self {
        Symbol::zero()
    }

    fn is_zero(&self) -> bool {
        Symbol::is_zero(self)
    }
}

impl One for Symbol {
    fn one() -> Self {
        Symbol::one()
    }

    fn is_one(&self) -> bool {
        Symbol::is_one(self)
    }
}

impl From<i64> for Symbol {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<i32> for Symbol {
    fn from(n: i32) -> Self {
        Self::integer(i64::from(n))
    }
}

impl From<char> for Symbol {
    /// Digits become integer leaves, any other character a variable.
    fn from(c: char) -> Self {
        match c.to_digit(10) {
            Some(d) => Self::integer(i64::from(d)),
            None => Self::var(c.to_string()),
        }
    }
}

impl From<Fraction> for Symbol {
    fn from(value: Fraction) -> Self {
        Self::from_fraction(value)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    /// Builds a single leaf; see [`Symbol::new`]. Expressions are not parsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "empty")]
    fn test_var_rejects_empty_name() {
        let _ = Symbol::var("");
    }

    #[test]
    fn test_numeral_names() {
        assert_eq!(Symbol::new("42").unwrap(), Symbol::integer(42));
        assert_eq!(Symbol::new("-7").unwrap(), Symbol::integer(-7));
        assert_eq!(Symbol::new("#5").unwrap(), Symbol::integer(5));
        assert_eq!(Symbol::new("x").unwrap().name(), Some("x"));
        assert_eq!(Symbol::new("-x").unwrap().name(), Some("-x"));
        assert_eq!(Symbol::new(""), Err(SymbolError::EmptyName));
        assert_eq!(
            Symbol::new("3abc"),
            Err(SymbolError::InvalidNumeral("3abc".to_string()))
        );
    }

    #[test]
    fn test_char_leaves() {
        assert_eq!(Symbol::from('7'), Symbol::integer(7));
        assert_eq!(Symbol::from('a').name(), Some("a"));
    }

    #[test]
    fn test_default_is_one() {
        assert!(Symbol::default().is_one());
    }

    #[test]
    fn test_rational_equality_by_value() {
        let neg_three = Symbol::build(Operator::Neg, Symbol::integer(3), None).unwrap();
        assert_eq!(neg_three, Symbol::integer(-3));
        assert!(neg_three.is_rational());

        let third = Symbol::build(Operator::Div, Symbol::integer(1), Some(Symbol::integer(3)))
            .unwrap();
        assert!(third.is_rational());
        assert_eq!(third, Symbol::rational(2, 6).unwrap());
    }

    #[test]
    fn test_build_rejects_bad_nodes() {
        let x = Symbol::var("x");
        assert_eq!(
            Symbol::build_str("", x.clone(), None),
            Err(SymbolError::InvalidOperator(String::new()))
        );
        assert_eq!(
            Symbol::build(Operator::Add, x.clone(), None),
            Err(SymbolError::Arity { op: "+", expected: 2 })
        );
        assert_eq!(
            Symbol::build(Operator::Div, x, Some(Symbol::zero())),
            Err(SymbolError::DivisionByZero)
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = Symbol::var("a");
        let b = Symbol::var("b");
        let ab = Symbol::build(Operator::Add, a.clone(), Some(b.clone())).unwrap();
        let ab2 = Symbol::build(Operator::Add, a.clone(), Some(b.clone())).unwrap();
        let ba = Symbol::build(Operator::Add, b, Some(a)).unwrap();
        assert_eq!(ab, ab2);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_accessors() {
        let x = Symbol::var("x");
        let s = sin(&x);
        assert_eq!(s.operator(), Some(Operator::Function(Function::Sin)));
        assert_eq!(s.left(), Some(&x));
        assert!(s.right().is_none());
        assert_eq!(s.size(), 2);
    }
}
