//! Rewrite rules for the equivalence oracle, organized by category.

pub mod arithmetic;
pub mod quotient;

use egg::Rewrite;

use crate::language::RotorLang;

/// Collects all rewrite rules.
#[must_use]
pub fn all_rules() -> Vec<Rewrite<RotorLang, ()>> {
    let mut rules = Vec::new();
    rules.extend(arithmetic::rules());
    rules.extend(quotient::rules());
    rules
}
