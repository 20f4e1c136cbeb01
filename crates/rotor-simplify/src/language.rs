//! The expression language for egg-based equivalence checking.
//!
//! This module defines the language understood by the e-graph and the
//! conversions between it and [`Symbol`] trees.

use egg::{define_language, Id, RecExpr};

use rotor_core::{Function, Node, Operator, Symbol, SymbolError};

define_language! {
    /// The symbolic expression language for rotor.
    pub enum RotorLang {
        // Integer leaves; rationals travel as `(/ num den)`
        Num(i64),
        Symbol(egg::Symbol),

        "+" = Add([Id; 2]),
        "-" = Sub([Id; 2]),
        "*" = Mul([Id; 2]),
        "/" = Div([Id; 2]),
        "neg" = Neg(Id),

        "sin" = Sin(Id),
        "cos" = Cos(Id),
    }
}

impl RotorLang {
    /// Returns true if this node is a number.
    #[must_use]
    pub fn is_num(&self) -> bool {
        matches!(self, RotorLang::Num(_))
    }

    /// Extracts the numeric value if this is a number.
    #[must_use]
    pub fn as_num(&self) -> Option<i64> {
        match self {
            RotorLang::Num(n) => Some(*n),
            _ => None,
        }
    }
}

/// Translates a symbol into an e-graph expression.
///
/// Non-integral rationals become a quotient of two numbers.
#[must_use]
pub fn to_rec_expr(symbol: &Symbol) -> RecExpr<RotorLang> {
    let mut expr = RecExpr::default();
    add_symbol(&mut expr, symbol);
    expr
}

fn add_symbol(expr: &mut RecExpr<RotorLang>, symbol: &Symbol) -> Id {
    match symbol.node() {
        Node::Integer(n) => expr.add(RotorLang::Num(*n)),
        Node::Rational(r) => {
            let num = expr.add(RotorLang::Num(r.numerator()));
            let den = expr.add(RotorLang::Num(r.denominator()));
            expr.add(RotorLang::Div([num, den]))
        }
        Node::Variable(name) => expr.add(RotorLang::Symbol(egg::Symbol::from(name.as_ref()))),
        Node::Neg(arg) => {
            let arg = add_symbol(expr, arg);
            expr.add(RotorLang::Neg(arg))
        }
        Node::Function(func, arg) => {
            let arg = add_symbol(expr, arg);
            match func {
                Function::Sin => expr.add(RotorLang::Sin(arg)),
                Function::Cos => expr.add(RotorLang::Cos(arg)),
            }
        }
        Node::Add(l, r) | Node::Sub(l, r) | Node::Mul(l, r) | Node::Div(l, r) => {
            let children = [add_symbol(expr, l), add_symbol(expr, r)];
            let node = match symbol.node() {
                Node::Add(..) => RotorLang::Add(children),
                Node::Sub(..) => RotorLang::Sub(children),
                Node::Mul(..) => RotorLang::Mul(children),
                _ => RotorLang::Div(children),
            };
            expr.add(node)
        }
    }
}

/// Translates an e-graph expression back into a symbol.
///
/// Nodes are rebuilt raw, without applying arithmetic identities, so the
/// result has the shape the e-graph chose.
///
/// # Errors
///
/// Returns [`SymbolError::DivisionByZero`] for a literal division by zero.
pub fn from_rec_expr(expr: &RecExpr<RotorLang>) -> Result<Symbol, SymbolError> {
    let nodes = expr.as_ref();
    let mut built: Vec<Symbol> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let symbol = {
            let get = |id: Id| built[usize::from(id)].clone();
            match node {
                RotorLang::Num(n) => Symbol::integer(*n),
                RotorLang::Symbol(name) => Symbol::var(name.as_str()),
                RotorLang::Add([l, r]) => Symbol::build(Operator::Add, get(*l), Some(get(*r)))?,
                RotorLang::Sub([l, r]) => Symbol::build(Operator::Sub, get(*l), Some(get(*r)))?,
                RotorLang::Mul([l, r]) => Symbol::build(Operator::Mul, get(*l), Some(get(*r)))?,
                RotorLang::Div([l, r]) => Symbol::build(Operator::Div, get(*l), Some(get(*r)))?,
                RotorLang::Neg(arg) => Symbol::build(Operator::Neg, get(*arg), None)?,
                RotorLang::Sin(arg) => Symbol::build(Operator::Function(Function::Sin), get(*arg), None)?,
                RotorLang::Cos(arg) => Symbol::build(Operator::Function(Function::Cos), get(*arg), None)?,
            }
        };
        built.push(symbol);
    }
    Ok(built.pop().unwrap_or_else(Symbol::zero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotor_core::sin;

    #[test]
    fn test_quotient_of_numbers_reads_back_as_rational() {
        let expr: RecExpr<RotorLang> = "(neg (/ 2 6))".parse().unwrap();
        assert_eq!(expr.as_ref()[0].as_num(), Some(2));
        let symbol = from_rec_expr(&expr).unwrap();
        assert_eq!(symbol, Symbol::rational(-1, 3).unwrap());
        assert!(matches!(symbol.node(), Node::Neg(_)));
    }

    #[test]
    fn test_to_rec_expr() {
        let a = Symbol::var("a");
        let b = Symbol::var("b");
        let expr = sin(&(&a - &b)) / 3;
        assert_eq!(to_rec_expr(&expr).to_string(), "(/ (sin (- a b)) 3)");

        let half = Symbol::rational(-1, 2).unwrap();
        assert_eq!(to_rec_expr(&half).to_string(), "(/ -1 2)");
    }

    #[test]
    fn test_back_and_forth_keeps_shape() {
        let a = Symbol::var("a");
        let b = Symbol::var("b");
        let expr = -(&a * (&b + 2));
        let back = from_rec_expr(&to_rec_expr(&expr)).unwrap();
        assert_eq!(back, expr);
        assert_eq!(back.to_string(), expr.to_string());
    }
}
