//! Canonical ordering of symbols.
//!
//! The order only decides which of two commuting operands goes first and
//! how flattened sums and products are sorted. It is a total order
//! consistent with `==`:
//!
//! 1. rational values sort after everything else, by numeric value;
//! 2. negation is transparent, except that `-X` sorts directly before `X`;
//! 3. variables compare by name, and a leaf sorts before any interior node;
//! 4. interior nodes compare by operator text, then left child, then right
//!    child.

use std::cmp::Ordering;

use crate::expr::Node;
use crate::symbol::Symbol;

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        match (self.as_fraction(), other.as_fraction()) {
            (Some(a), Some(b)) => return a.cmp(&b),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => {}
        }

        let (lhs, lhs_negs) = peel_negations(self);
        let (rhs, rhs_negs) = peel_negations(other);
        // More negation layers sort first.
        compare_core(lhs, rhs).then_with(|| rhs_negs.cmp(&lhs_negs))
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn peel_negations(symbol: &Symbol) -> (&Symbol, usize) {
    let mut current = symbol;
    let mut count = 0;
    while let Node::Neg(inner) = current.node() {
        current = inner;
        count += 1;
    }
    (current, count)
}

/// Sort rank: variables, then interior nodes, then rationals.
fn rank(symbol: &Symbol) -> u8 {
    if symbol.as_fraction().is_some() {
        2
    } else if symbol.is_leaf() {
        0
    } else {
        1
    }
}

/// Compares two symbols that carry no leading negation.
fn compare_core(lhs: &Symbol, rhs: &Symbol) -> Ordering {
    rank(lhs).cmp(&rank(rhs)).then_with(|| match (lhs.node(), rhs.node()) {
        (Node::Variable(a), Node::Variable(b)) => a.cmp(b),
        _ => match (lhs.as_fraction(), rhs.as_fraction()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => compare_interior(lhs, rhs),
        },
    })
}

fn compare_interior(lhs: &Symbol, rhs: &Symbol) -> Ordering {
    let op = |s: &Symbol| s.operator().map_or("", |op| op.as_str());
    op(lhs)
        .cmp(op(rhs))
        .then_with(|| lhs.left().cmp(&rhs.left()))
        .then_with(|| lhs.right().cmp(&rhs.right()))
}
