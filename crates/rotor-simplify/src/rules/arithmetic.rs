//! Rules of a commutative ring with negation.
//!
//! Differences are rewritten into sums of negations, so the remaining rules
//! only need to know about `+`, `*` and `neg`.

use egg::{rewrite, Rewrite};

use crate::language::RotorLang;

/// Returns every ring rewrite rule.
#[must_use]
pub fn rules() -> Vec<Rewrite<RotorLang, ()>> {
    let mut rules = units();
    rules.extend(signs());
    rules.extend(ring_laws());
    rules
}

/// `0` and `1` acting on either side.
fn units() -> Vec<Rewrite<RotorLang, ()>> {
    vec![
        rewrite!("zero-plus"; "(+ 0 ?x)" => "?x"),
        rewrite!("plus-zero"; "(+ ?x 0)" => "?x"),
        rewrite!("one-times"; "(* 1 ?x)" => "?x"),
        rewrite!("times-one"; "(* ?x 1)" => "?x"),
        rewrite!("zero-times"; "(* 0 ?x)" => "0"),
        rewrite!("times-zero"; "(* ?x 0)" => "0"),
    ]
}

/// Negation and subtraction.
fn signs() -> Vec<Rewrite<RotorLang, ()>> {
    vec![
        rewrite!("minus-as-plus"; "(- ?x ?y)" => "(+ ?x (neg ?y))"),
        rewrite!("double-neg"; "(neg (neg ?x))" => "?x"),
        rewrite!("neg-of-zero"; "(neg 0)" => "0"),
        rewrite!("neg-of-one"; "(neg 1)" => "-1"),
        rewrite!("minus-one-times"; "(* -1 ?x)" => "(neg ?x)"),
        rewrite!("x-plus-neg-x"; "(+ ?x (neg ?x))" => "0"),
        rewrite!("neg-over-sum"; "(neg (+ ?x ?y))" => "(+ (neg ?x) (neg ?y))"),
        // A sign on either factor moves out of the product.
        rewrite!("neg-factor-left"; "(* (neg ?x) ?y)" => "(neg (* ?x ?y))"),
        rewrite!("neg-factor-right"; "(* ?x (neg ?y))" => "(neg (* ?x ?y))"),
        rewrite!("neg-factors-cancel"; "(* (neg ?x) (neg ?y))" => "(* ?x ?y)"),
    ]
}

/// Commutativity, associativity, distribution and collection of equal
/// summands.
fn ring_laws() -> Vec<Rewrite<RotorLang, ()>> {
    vec![
        rewrite!("plus-commutes"; "(+ ?x ?y)" => "(+ ?y ?x)"),
        rewrite!("times-commutes"; "(* ?x ?y)" => "(* ?y ?x)"),
        rewrite!("plus-regroup-right"; "(+ (+ ?x ?y) ?z)" => "(+ ?x (+ ?y ?z))"),
        rewrite!("plus-regroup-left"; "(+ ?x (+ ?y ?z))" => "(+ (+ ?x ?y) ?z)"),
        rewrite!("times-regroup-right"; "(* (* ?x ?y) ?z)" => "(* ?x (* ?y ?z))"),
        rewrite!("times-regroup-left"; "(* ?x (* ?y ?z))" => "(* (* ?x ?y) ?z)"),
        rewrite!("expand-left"; "(* ?x (+ ?y ?z))" => "(+ (* ?x ?y) (* ?x ?z))"),
        rewrite!("expand-right"; "(* (+ ?x ?y) ?z)" => "(+ (* ?x ?z) (* ?y ?z))"),
        rewrite!("collect-factor"; "(+ (* ?x ?y) (* ?x ?z))" => "(* ?x (+ ?y ?z))"),
        rewrite!("double-summand"; "(+ ?x ?x)" => "(* 2 ?x)"),
    ]
}
