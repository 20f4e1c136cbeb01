//! Expansion into a sum of products and quotients.

use rotor_core::{Node, Symbol, SymbolError};

/// Expands `expr` so that no sum appears under a product or a numerator.
///
/// The rewrite:
/// - pushes negation through sums and into the leftmost factor of products
///   and quotients;
/// - expands products over sums and differences on either side;
/// - splits quotients with a sum numerator, `(a + b)/c = a/c + b/c`;
/// - turns division by a rational into multiplication by its reciprocal;
/// - gathers nested quotients into one: `(A/B)*C = (A*C)/B`,
///   `A*(B/C) = (A*B)/C`, `(A/B)/C = A/(B*C)`, `A/(B/C) = (A*C)/B`.
///
/// Denominators that are sums stay whole. Function arguments are
/// distributed recursively.
///
/// # Errors
///
/// Returns [`SymbolError::DivisionByZero`] if a denominator collapses to
/// zero while products are rebuilt, and [`SymbolError::Overflow`] if
/// rational folding overflows.
pub fn distribute(expr: &Symbol) -> Result<Symbol, SymbolError> {
    match expr.node() {
        Node::Integer(_) | Node::Rational(_) | Node::Variable(_) => Ok(expr.clone()),
        Node::Function(func, arg) => Ok(Symbol::from_node(Node::Function(*func, distribute(arg)?))),
        Node::Neg(arg) => negate(&distribute(arg)?),
        Node::Add(l, r) => distribute(l)?.try_add(&distribute(r)?),
        Node::Sub(l, r) => distribute(l)?.try_sub(&distribute(r)?),
        Node::Mul(l, r) => expand_product(&distribute(l)?, &distribute(r)?),
        Node::Div(l, r) => expand_quotient(&distribute(l)?, &distribute(r)?),
    }
}

/// Negates an already distributed expression.
fn negate(expr: &Symbol) -> Result<Symbol, SymbolError> {
    match expr.node() {
        Node::Add(l, r) => negate(l)?.try_add(&negate(r)?),
        Node::Sub(l, r) => negate(l)?.try_add(r),
        Node::Mul(l, r) => negate(l)?.try_mul(r),
        Node::Div(l, r) => negate(l)?.try_div(r),
        _ => expr.try_neg(),
    }
}

/// Multiplies two distributed expressions.
fn expand_product(lhs: &Symbol, rhs: &Symbol) -> Result<Symbol, SymbolError> {
    match (lhs.node(), rhs.node()) {
        (Node::Add(p, q), _) => expand_product(p, rhs)?.try_add(&expand_product(q, rhs)?),
        (Node::Sub(p, q), _) => expand_product(p, rhs)?.try_sub(&expand_product(q, rhs)?),
        (_, Node::Add(p, q)) => expand_product(lhs, p)?.try_add(&expand_product(lhs, q)?),
        (_, Node::Sub(p, q)) => expand_product(lhs, p)?.try_sub(&expand_product(lhs, q)?),
        (Node::Div(num, den), _) => expand_quotient(&expand_product(num, rhs)?, den),
        (_, Node::Div(num, den)) => expand_quotient(&expand_product(lhs, num)?, den),
        _ => lhs.try_mul(rhs),
    }
}

/// Divides two distributed expressions.
fn expand_quotient(num: &Symbol, den: &Symbol) -> Result<Symbol, SymbolError> {
    if let Some(value) = den.as_fraction() {
        let reciprocal = Symbol::from_fraction(value.checked_recip()?);
        return expand_product(&reciprocal, num);
    }
    match (num.node(), den.node()) {
        (Node::Add(p, q), _) => expand_quotient(p, den)?.try_add(&expand_quotient(q, den)?),
        (Node::Sub(p, q), _) => expand_quotient(p, den)?.try_sub(&expand_quotient(q, den)?),
        (Node::Div(inner_num, inner_den), _) => {
            expand_quotient(inner_num, &expand_product(inner_den, den)?)
        }
        (_, Node::Div(inner_num, inner_den)) => {
            expand_quotient(&expand_product(num, inner_den)?, inner_num)
        }
        _ => num.try_div(den),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotor_core::sin;

    fn vars() -> (Symbol, Symbol, Symbol) {
        (Symbol::var("a"), Symbol::var("b"), Symbol::var("c"))
    }

    #[test]
    fn test_leaves_unchanged() {
        let (a, _, _) = vars();
        assert_eq!(distribute(&a).unwrap(), a);
        assert_eq!(distribute(&Symbol::integer(7)).unwrap(), Symbol::integer(7));
    }

    #[test]
    fn test_product_over_sum() {
        let (a, b, c) = vars();
        let expr = &a * (&b + &c);
        assert_eq!(distribute(&expr).unwrap(), &a * &b + &a * &c);

        let expr = (&a - &b) * &c;
        assert_eq!(distribute(&expr).unwrap(), &a * &c - &b * &c);
    }

    #[test]
    fn test_negation_into_leftmost_factor() {
        let (a, b, c) = vars();
        let expr = -(&a * &b);
        assert_eq!(distribute(&expr).unwrap(), -&a * &b);

        let expr = -(&a + &b * &c);
        assert_eq!(distribute(&expr).unwrap(), -&a + -&b * &c);
    }

    #[test]
    fn test_quotients() {
        let (a, b, c) = vars();
        assert_eq!(distribute(&((&a + &b) / &c)).unwrap(), &a / &c + &b / &c);
        assert_eq!(distribute(&((&a / &b) * &c)).unwrap(), (&a * &c) / &b);
        assert_eq!(distribute(&(&a * (&b / &c))).unwrap(), (&a * &b) / &c);
        assert_eq!(distribute(&((&a / &b) / &c)).unwrap(), &a / (&b * &c));
        assert_eq!(distribute(&(&a / (&b / &c))).unwrap(), (&a * &c) / &b);
    }

    #[test]
    fn test_rational_divisor_becomes_reciprocal() {
        let (a, _, _) = vars();
        let half = Symbol::rational(1, 2).unwrap();
        assert_eq!(distribute(&(&a / 2)).unwrap(), &half * &a);
    }

    #[test]
    fn test_sum_denominator_kept() {
        let (a, b, c) = vars();
        let expr = &a / (&b + &c);
        assert_eq!(distribute(&expr).unwrap(), expr);
    }

    #[test]
    fn test_function_argument() {
        let (a, b, c) = vars();
        let expr = sin(&(&a * (&b + &c)));
        assert_eq!(distribute(&expr).unwrap(), sin(&(&a * &b + &a * &c)));
    }
}
