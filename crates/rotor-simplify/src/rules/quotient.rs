//! Rules for quotients.

use egg::{rewrite, Rewrite};

use crate::language::RotorLang;

/// Returns the quotient rewrite rules.
///
/// `div-self` assumes the divisor is non-zero, which holds for every
/// quotient a [`Symbol`](rotor_core::Symbol) can carry.
#[must_use]
pub fn rules() -> Vec<Rewrite<RotorLang, ()>> {
    vec![
        rewrite!("div-one"; "(/ ?a 1)" => "?a"),
        rewrite!("div-self"; "(/ ?a ?a)" => "1"),
        rewrite!("div-neg"; "(/ (neg ?a) ?b)" => "(neg (/ ?a ?b))"),
        rewrite!("div-add"; "(/ (+ ?a ?b) ?c)" => "(+ (/ ?a ?c) (/ ?b ?c))"),
        rewrite!("mul-div-l"; "(* (/ ?a ?b) ?c)" => "(/ (* ?a ?c) ?b)"),
        rewrite!("mul-div-r"; "(* ?a (/ ?b ?c))" => "(/ (* ?a ?b) ?c)"),
        rewrite!("div-div-l"; "(/ (/ ?a ?b) ?c)" => "(/ ?a (* ?b ?c))"),
        rewrite!("div-div-r"; "(/ ?a (/ ?b ?c))" => "(/ (* ?a ?c) ?b)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use egg::{RecExpr, Runner};

    #[test]
    fn test_nested_quotients_collapse() {
        let lhs: RecExpr<RotorLang> = "(/ (/ a b) c)".parse().unwrap();
        let rhs: RecExpr<RotorLang> = "(/ a (* b c))".parse().unwrap();
        let runner = Runner::<RotorLang, ()>::default()
            .with_expr(&lhs)
            .with_expr(&rhs)
            .with_iter_limit(5)
            .run(&rules());
        assert_eq!(runner.egraph.find(runner.roots[0]), runner.egraph.find(runner.roots[1]));
    }
}
