//! Printing of symbols.
//!
//! `Display` writes infix text with the fewest parentheses that keep the
//! expression unambiguous. [`Symbol::tree`] gives a one-node-per-line dump
//! for debugging.

use std::fmt::{self, Write};

use crate::expr::Node;
use crate::symbol::Symbol;

const PREC_SUM: u8 = 1;
const PREC_PRODUCT: u8 = 2;
const PREC_PREFIX: u8 = 3;
const PREC_ATOM: u8 = 4;

fn precedence(symbol: &Symbol) -> u8 {
    match symbol.node() {
        Node::Integer(n) if *n < 0 => PREC_PREFIX,
        Node::Integer(_) | Node::Variable(_) | Node::Function(..) => PREC_ATOM,
        Node::Rational(_) | Node::Mul(..) | Node::Div(..) => PREC_PRODUCT,
        Node::Neg(_) => PREC_PREFIX,
        Node::Add(..) | Node::Sub(..) => PREC_SUM,
    }
}

/// Writes `child` as an operand of an operator with precedence `parent`.
///
/// `strict` is set for the right operand of `-` and `/`, which need
/// parentheses around operands of equal precedence.
fn write_operand(f: &mut fmt::Formatter<'_>, child: &Symbol, parent: u8, strict: bool) -> fmt::Result {
    let prec = precedence(child);
    let signed = matches!(child.node(), Node::Neg(_))
        || child.as_fraction().is_some_and(|r| r.is_negative());
    let wrap = prec < parent || (strict && prec == parent) || (strict && signed);
    if wrap {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Integer(n) => write!(f, "{n}"),
            Node::Rational(r) => write!(f, "{r}"),
            Node::Variable(name) => f.write_str(name),
            Node::Neg(arg) => {
                f.write_char('-')?;
                write_operand(f, arg, PREC_PREFIX, true)
            }
            Node::Add(l, r) => {
                write_operand(f, l, PREC_SUM, false)?;
                // A negative right operand reads as a subtraction.
                let magnitude = match (r.node(), r.as_fraction()) {
                    (Node::Neg(inner), _) => Some(inner.clone()),
                    (_, Some(v)) if v.is_negative() => v.checked_neg().ok().map(Symbol::from_fraction),
                    _ => None,
                };
                match magnitude {
                    Some(m) => {
                        f.write_str(" - ")?;
                        write_operand(f, &m, PREC_SUM, true)
                    }
                    None => {
                        f.write_str(" + ")?;
                        write_operand(f, r, PREC_SUM, false)
                    }
                }
            }
            Node::Sub(l, r) => {
                write_operand(f, l, PREC_SUM, false)?;
                f.write_str(" - ")?;
                write_operand(f, r, PREC_SUM, true)
            }
            Node::Mul(l, r) => {
                write_operand(f, l, PREC_PRODUCT, false)?;
                f.write_char('*')?;
                write_operand(f, r, PREC_PRODUCT, matches!(r.node(), Node::Rational(_)))
            }
            Node::Div(l, r) => {
                write_operand(f, l, PREC_PRODUCT, false)?;
                f.write_char('/')?;
                write_operand(f, r, PREC_PRODUCT, true)
            }
            Node::Function(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}

/// Debug view of a symbol: one node per line, indented by depth.
pub struct TreeDisplay<'a>(&'a Symbol);

impl Symbol {
    /// Returns a tree printer for this symbol.
    #[must_use]
    pub fn tree(&self) -> TreeDisplay<'_> {
        TreeDisplay(self)
    }
}

impl TreeDisplay<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, symbol: &Symbol, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = depth * 2)?;
        match symbol.node() {
            Node::Integer(n) => writeln!(f, "{n}")?,
            Node::Rational(r) => writeln!(f, "{r}")?,
            Node::Variable(name) => writeln!(f, "{name}")?,
            node => {
                if let Some(op) = node.operator() {
                    writeln!(f, "{op}")?;
                }
                for child in node.children() {
                    Self::write_node(f, child, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.0, 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbol::{sin, Symbol};

    fn vars() -> (Symbol, Symbol, Symbol) {
        (Symbol::var("a"), Symbol::var("b"), Symbol::var("c"))
    }

    #[test]
    fn test_leaves() {
        assert_eq!(Symbol::integer(-4).to_string(), "-4");
        assert_eq!(Symbol::rational(1, 3).unwrap().to_string(), "1/3");
        assert_eq!(Symbol::var("x").to_string(), "x");
    }

    #[test]
    fn test_sums_and_products() {
        let (a, b, c) = vars();
        assert_eq!((&a + &b).to_string(), "a + b");
        assert_eq!((&a + &b + &c).to_string(), "a + b + c");
        assert_eq!((&a - (&b + &c)).to_string(), "a - (b + c)");
        assert_eq!((&a - &b - &c).to_string(), "a - b - c");
        assert_eq!(((&a + &b) * &c).to_string(), "(a + b)*c");
        assert_eq!((&a * &b + &c).to_string(), "a*b + c");
        assert_eq!((&a + -&b).to_string(), "a - b");
        assert_eq!((&a + Symbol::integer(-3)).to_string(), "a - 3");
    }

    #[test]
    fn test_quotients_and_negation() {
        let (a, b, c) = vars();
        assert_eq!((&a / (&b * &c)).to_string(), "a/(b*c)");
        assert_eq!((&a / &b / &c).to_string(), "a/b/c");
        assert_eq!((-(&a + &b)).to_string(), "-(a + b)");
        assert_eq!((-&a * &b).to_string(), "-a*b");
        assert_eq!((-(&a * &b)).to_string(), "-(a*b)");
        assert_eq!((&a * Symbol::rational(1, 2).unwrap()).to_string(), "a*(1/2)");
        assert_eq!(sin(&(&a + &b)).to_string(), "sin(a + b)");
    }

    #[test]
    fn test_tree() {
        let (a, b, _) = vars();
        let tree = (&a + &b * 2).tree().to_string();
        assert_eq!(tree, "+\n  a\n  *\n    b\n    2\n");
    }
}
