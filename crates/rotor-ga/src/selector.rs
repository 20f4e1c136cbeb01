//! Grade selectors for the product engine.
//!
//! Every product of two multivectors is the geometric product of their
//! blades with some terms discarded. A selector decides from the grades of
//! the left blade `j`, the right blade `k` and their product `p`.

use crate::basis::Basis;
use crate::blade::BasisBlade;

/// A compile-time product policy.
pub trait Selector {
    /// Whether a product term of grade `p` from grades `j` and `k` is kept.
    fn keep(j: u32, k: u32, p: u32) -> bool;

    /// Applies [`Selector::keep`] to the grades of three blades.
    fn select<B: Basis>(left: BasisBlade<B>, right: BasisBlade<B>, product: BasisBlade<B>) -> bool {
        Self::keep(left.grade(), right.grade(), product.grade())
    }
}

/// Scalar part only.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inner;

/// Grade `|j - k|`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FatDot;

/// Grade `|j - k|`, dropping scalar operands.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hestenes;

/// Grade `k - j`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeftContraction;

/// Grade `j - k`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RightContraction;

/// Grade `j + k`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wedge;

/// Every term.
#[derive(Clone, Copy, Debug, Default)]
pub struct Geometric;

impl Selector for Inner {
    fn keep(_j: u32, _k: u32, p: u32) -> bool {
        p == 0
    }
}

impl Selector for FatDot {
    fn keep(j: u32, k: u32, p: u32) -> bool {
        p == j.abs_diff(k)
    }
}

impl Selector for Hestenes {
    fn keep(j: u32, k: u32, p: u32) -> bool {
        j != 0 && k != 0 && p == j.abs_diff(k)
    }
}

impl Selector for LeftContraction {
    fn keep(j: u32, k: u32, p: u32) -> bool {
        k.checked_sub(j) == Some(p)
    }
}

impl Selector for RightContraction {
    fn keep(j: u32, k: u32, p: u32) -> bool {
        j.checked_sub(k) == Some(p)
    }
}

impl Selector for Wedge {
    fn keep(j: u32, k: u32, p: u32) -> bool {
        p == j + k
    }
}

impl Selector for Geometric {
    fn keep(_j: u32, _k: u32, _p: u32) -> bool {
        true
    }
}
