//! Any/all predicates and position search.
//!
//! These reductions never fail: a search with no qualifying element is a
//! normal `false` / `None` result. They short-circuit — `any` returns the
//! moment a chunk or tail element satisfies the predicate, `all` the moment
//! one violates it — so the remainder of the array is not scanned.
//!
//! `all` over an empty slice is vacuously true, `any` is false.

use crate::dispatch::ApplyOptions;
use crate::element::Element;
use crate::kernel::predicate;
use crate::ops::kinds::{EqOp, GeOp, GtOp, LeOp, LtOp, NeOp};

/// The six comparison kinds the predicate reductions support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// True if any element satisfies `data[i] CMP needle`.
pub fn any<T: Element>(cmp: CompareOp, data: &[T], needle: T, opts: ApplyOptions) -> bool {
    match cmp {
        CompareOp::Eq => predicate::any_broadcast::<T, EqOp>(data, needle, opts),
        CompareOp::Ne => predicate::any_broadcast::<T, NeOp>(data, needle, opts),
        CompareOp::Lt => predicate::any_broadcast::<T, LtOp>(data, needle, opts),
        CompareOp::Le => predicate::any_broadcast::<T, LeOp>(data, needle, opts),
        CompareOp::Gt => predicate::any_broadcast::<T, GtOp>(data, needle, opts),
        CompareOp::Ge => predicate::any_broadcast::<T, GeOp>(data, needle, opts),
    }
}

/// True if every element satisfies `data[i] CMP needle`.
pub fn all<T: Element>(cmp: CompareOp, data: &[T], needle: T, opts: ApplyOptions) -> bool {
    match cmp {
        CompareOp::Eq => predicate::all_broadcast::<T, EqOp>(data, needle, opts),
        CompareOp::Ne => predicate::all_broadcast::<T, NeOp>(data, needle, opts),
        CompareOp::Lt => predicate::all_broadcast::<T, LtOp>(data, needle, opts),
        CompareOp::Le => predicate::all_broadcast::<T, LeOp>(data, needle, opts),
        CompareOp::Gt => predicate::all_broadcast::<T, GtOp>(data, needle, opts),
        CompareOp::Ge => predicate::all_broadcast::<T, GeOp>(data, needle, opts),
    }
}

/// Position of the first element satisfying `data[i] CMP needle`.
pub fn find_index<T: Element>(
    cmp: CompareOp,
    data: &[T],
    needle: T,
    opts: ApplyOptions,
) -> Option<usize> {
    match cmp {
        CompareOp::Eq => predicate::find_index_broadcast::<T, EqOp>(data, needle, opts),
        CompareOp::Ne => predicate::find_index_broadcast::<T, NeOp>(data, needle, opts),
        CompareOp::Lt => predicate::find_index_broadcast::<T, LtOp>(data, needle, opts),
        CompareOp::Le => predicate::find_index_broadcast::<T, LeOp>(data, needle, opts),
        CompareOp::Gt => predicate::find_index_broadcast::<T, GtOp>(data, needle, opts),
        CompareOp::Ge => predicate::find_index_broadcast::<T, GeOp>(data, needle, opts),
    }
}

/// True if any position satisfies `lhs[i] CMP rhs[i]`.
pub fn any_pairwise<T: Element>(
    cmp: CompareOp,
    lhs: &[T],
    rhs: &[T],
    opts: ApplyOptions,
) -> bool {
    assert_eq!(lhs.len(), rhs.len(), "operands must be the same length");
    match cmp {
        CompareOp::Eq => predicate::any_pairwise::<T, EqOp>(lhs, rhs, opts),
        CompareOp::Ne => predicate::any_pairwise::<T, NeOp>(lhs, rhs, opts),
        CompareOp::Lt => predicate::any_pairwise::<T, LtOp>(lhs, rhs, opts),
        CompareOp::Le => predicate::any_pairwise::<T, LeOp>(lhs, rhs, opts),
        CompareOp::Gt => predicate::any_pairwise::<T, GtOp>(lhs, rhs, opts),
        CompareOp::Ge => predicate::any_pairwise::<T, GeOp>(lhs, rhs, opts),
    }
}

/// True if every position satisfies `lhs[i] CMP rhs[i]`.
pub fn all_pairwise<T: Element>(
    cmp: CompareOp,
    lhs: &[T],
    rhs: &[T],
    opts: ApplyOptions,
) -> bool {
    assert_eq!(lhs.len(), rhs.len(), "operands must be the same length");
    match cmp {
        CompareOp::Eq => predicate::all_pairwise::<T, EqOp>(lhs, rhs, opts),
        CompareOp::Ne => predicate::all_pairwise::<T, NeOp>(lhs, rhs, opts),
        CompareOp::Lt => predicate::all_pairwise::<T, LtOp>(lhs, rhs, opts),
        CompareOp::Le => predicate::all_pairwise::<T, LeOp>(lhs, rhs, opts),
        CompareOp::Gt => predicate::all_pairwise::<T, GtOp>(lhs, rhs, opts),
        CompareOp::Ge => predicate::all_pairwise::<T, GeOp>(lhs, rhs, opts),
    }
}

/// Position of the first index satisfying `lhs[i] CMP rhs[i]`.
pub fn find_index_pairwise<T: Element>(
    cmp: CompareOp,
    lhs: &[T],
    rhs: &[T],
    opts: ApplyOptions,
) -> Option<usize> {
    assert_eq!(lhs.len(), rhs.len(), "operands must be the same length");
    match cmp {
        CompareOp::Eq => predicate::find_index_pairwise::<T, EqOp>(lhs, rhs, opts),
        CompareOp::Ne => predicate::find_index_pairwise::<T, NeOp>(lhs, rhs, opts),
        CompareOp::Lt => predicate::find_index_pairwise::<T, LtOp>(lhs, rhs, opts),
        CompareOp::Le => predicate::find_index_pairwise::<T, LeOp>(lhs, rhs, opts),
        CompareOp::Gt => predicate::find_index_pairwise::<T, GtOp>(lhs, rhs, opts),
        CompareOp::Ge => predicate::find_index_pairwise::<T, GeOp>(lhs, rhs, opts),
    }
}
