//! Overflow guard precomputation.
//!
//! For operations where one operand is a broadcast scalar, the checked SIMD
//! kernels do not test each lane's arithmetic individually: a threshold is
//! computed once per call from the known operand's sign and magnitude, and
//! each chunk is vector-compared against it before the chunk's result is
//! committed. The scalar checked kernels make the same accept/reject
//! decision through per-element checked arithmetic; the two formulations
//! must agree exactly, which `scalar_violates` exists to cross-check in
//! tests.
//!
//! Array-array forms have no precomputable threshold (both operands vary),
//! so their checked SIMD path recomputes the decision per chunk with the
//! two's-complement sign tricks on the vector types instead.

use crate::element::Element;
use crate::simd::vec::SimdVec;

/// Fault precondition for one checked call with a known operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Guard<T> {
    /// No input can fault.
    Free,
    /// Faults iff the array element is greater than the bound.
    Above(T),
    /// Faults iff the array element is less than the bound.
    Below(T),
    /// Faults iff the array element falls outside `[lo, hi]`.
    Outside { lo: T, hi: T },
    /// Faults iff the array element equals the value (negation-style faults,
    /// where only the type minimum has no representable result).
    Equal(T),
    /// No input precondition; the produced chunk is tested for finiteness
    /// after computing (the float policy).
    NonFiniteResult,
}

/// A guard with its bounds broadcast into vector registers, ready for the
/// chunk loop.
pub(crate) enum PreparedGuard<T: Element> {
    Free,
    Above(T::Vector),
    Below(T::Vector),
    Outside { lo: T::Vector, hi: T::Vector },
    Equal(T::Vector),
    NonFiniteResult,
}

impl<T: Element> Guard<T> {
    pub(crate) fn prepare(self) -> PreparedGuard<T> {
        match self {
            Guard::Free => PreparedGuard::Free,
            Guard::Above(hi) => PreparedGuard::Above(T::Vector::splat(hi)),
            Guard::Below(lo) => PreparedGuard::Below(T::Vector::splat(lo)),
            Guard::Outside { lo, hi } => PreparedGuard::Outside {
                lo: T::Vector::splat(lo),
                hi: T::Vector::splat(hi),
            },
            Guard::Equal(v) => PreparedGuard::Equal(T::Vector::splat(v)),
            Guard::NonFiniteResult => PreparedGuard::NonFiniteResult,
        }
    }

    /// Scalar form of the precondition, for parity tests against the
    /// checked reference arithmetic.
    #[cfg(test)]
    pub(crate) fn scalar_violates(&self, a: T) -> bool {
        match *self {
            Guard::Free | Guard::NonFiniteResult => false,
            Guard::Above(hi) => a > hi,
            Guard::Below(lo) => a < lo,
            Guard::Outside { lo, hi } => a < lo || a > hi,
            Guard::Equal(v) => a == v,
        }
    }
}

impl<T: Element> PreparedGuard<T> {
    /// True if any lane of the input chunk violates the precondition.
    #[inline(always)]
    pub(crate) fn input_violates(&self, a: T::Vector) -> bool {
        match self {
            PreparedGuard::Free | PreparedGuard::NonFiniteResult => false,
            PreparedGuard::Above(hi) => a.gt_elements(*hi).mask_any(),
            PreparedGuard::Below(lo) => a.lt_elements(*lo).mask_any(),
            PreparedGuard::Outside { lo, hi } => {
                a.lt_elements(*lo).mask_any() || a.gt_elements(*hi).mask_any()
            }
            PreparedGuard::Equal(v) => a.eq_elements(*v).mask_any(),
        }
    }

    /// True if the computed chunk faults under the result-side policy.
    #[inline(always)]
    pub(crate) fn result_faults(&self, r: T::Vector) -> bool {
        matches!(self, PreparedGuard::NonFiniteResult) && r.any_nonfinite()
    }
}

/// Guard for `a + s` (and, by commutativity, `s + a`).
pub(crate) fn add_guard<T: Element>(s: T) -> Guard<T> {
    if T::IS_FLOAT {
        return Guard::NonFiniteResult;
    }
    let zero = T::zero();
    if s > zero {
        Guard::Above(T::MAX.wrapping_sub_elem(s))
    } else if s < zero {
        Guard::Below(T::MIN.wrapping_sub_elem(s))
    } else {
        Guard::Free
    }
}

/// Guard for `a - s`.
pub(crate) fn sub_guard_rhs<T: Element>(s: T) -> Guard<T> {
    if T::IS_FLOAT {
        return Guard::NonFiniteResult;
    }
    let zero = T::zero();
    if s > zero {
        // Covers unsigned types too: MIN + s is just s there.
        Guard::Below(T::MIN.wrapping_add_elem(s))
    } else if s < zero {
        Guard::Above(T::MAX.wrapping_add_elem(s))
    } else {
        Guard::Free
    }
}

/// Guard for `s - a`.
///
/// The result must stay in `[MIN, MAX]`, so the element must stay in
/// `[s - MAX, s - MIN]`; whichever of those bounds is itself representable
/// becomes an active side of the guard.
pub(crate) fn sub_guard_lhs<T: Element>(s: T) -> Guard<T> {
    if T::IS_FLOAT {
        return Guard::NonFiniteResult;
    }
    match (s.checked_sub_elem(T::MAX), s.checked_sub_elem(T::MIN)) {
        (Some(lo), Some(hi)) => Guard::Outside { lo, hi },
        (Some(lo), None) => Guard::Below(lo),
        (None, Some(hi)) => Guard::Above(hi),
        (None, None) => Guard::Free,
    }
}

/// Guard for `a * s` (and `s * a`).
pub(crate) fn mul_guard<T: Element>(s: T) -> Guard<T> {
    if T::IS_FLOAT {
        return Guard::NonFiniteResult;
    }
    let zero = T::zero();
    let one = T::one();
    if s == zero || s == one {
        return Guard::Free;
    }
    if s > zero {
        // Truncating division makes both bounds exact for positive factors.
        Guard::Outside {
            lo: T::MIN.wrapping_div_elem(s),
            hi: T::MAX.wrapping_div_elem(s),
        }
    } else if s == zero.wrapping_sub_elem(one) {
        // s == -1: the only unrepresentable product is -MIN.
        Guard::Equal(T::MIN)
    } else {
        // s < -1: the bounds swap sides.
        Guard::Outside {
            lo: T::MAX.wrapping_div_elem(s),
            hi: T::MIN.wrapping_div_elem(s),
        }
    }
}

/// Guard for division: floats check the produced chunk, integers never take
/// a SIMD division path.
pub(crate) fn div_guard<T: Element>(_s: T) -> Guard<T> {
    if T::IS_FLOAT {
        Guard::NonFiniteResult
    } else {
        Guard::Free
    }
}

/// Guard for negation and absolute value: only the signed minimum faults.
pub(crate) fn negation_guard<T: Element>() -> Guard<T> {
    if T::IS_FLOAT {
        Guard::NonFiniteResult
    } else {
        Guard::Equal(T::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every guard must reproduce the accept/reject decision of the checked
    // reference arithmetic for every input. i8 is small enough to sweep
    // exhaustively against every scalar operand.

    #[test]
    fn test_add_guard_matches_checked_add() {
        for s in i8::MIN..=i8::MAX {
            let guard = add_guard(s);
            for a in i8::MIN..=i8::MAX {
                assert_eq!(
                    guard.scalar_violates(a),
                    a.checked_add(s).is_none(),
                    "a={a} s={s}"
                );
            }
        }
    }

    #[test]
    fn test_sub_guard_rhs_matches_checked_sub() {
        for s in i8::MIN..=i8::MAX {
            let guard = sub_guard_rhs(s);
            for a in i8::MIN..=i8::MAX {
                assert_eq!(
                    guard.scalar_violates(a),
                    a.checked_sub(s).is_none(),
                    "a={a} s={s}"
                );
            }
        }
    }

    #[test]
    fn test_sub_guard_lhs_matches_checked_sub() {
        for s in i8::MIN..=i8::MAX {
            let guard = sub_guard_lhs(s);
            for a in i8::MIN..=i8::MAX {
                assert_eq!(
                    guard.scalar_violates(a),
                    s.checked_sub(a).is_none(),
                    "a={a} s={s}"
                );
            }
        }
    }

    #[test]
    fn test_mul_guard_matches_checked_mul() {
        for s in i8::MIN..=i8::MAX {
            let guard = mul_guard(s);
            for a in i8::MIN..=i8::MAX {
                assert_eq!(
                    guard.scalar_violates(a),
                    a.checked_mul(s).is_none(),
                    "a={a} s={s}"
                );
            }
        }
    }

    #[test]
    fn test_unsigned_guards_match_checked_arithmetic() {
        for s in u8::MIN..=u8::MAX {
            let add = add_guard(s);
            let sub_rhs = sub_guard_rhs(s);
            let sub_lhs = sub_guard_lhs(s);
            let mul = mul_guard(s);
            for a in u8::MIN..=u8::MAX {
                assert_eq!(add.scalar_violates(a), a.checked_add(s).is_none());
                assert_eq!(sub_rhs.scalar_violates(a), a.checked_sub(s).is_none());
                assert_eq!(sub_lhs.scalar_violates(a), s.checked_sub(a).is_none());
                assert_eq!(mul.scalar_violates(a), a.checked_mul(s).is_none());
            }
        }
    }

    #[test]
    fn test_negation_guard() {
        let guard = negation_guard::<i8>();
        assert!(guard.scalar_violates(i8::MIN));
        assert!(!guard.scalar_violates(-127));
        assert!(!guard.scalar_violates(0));
    }

    #[test]
    fn test_float_guards_defer_to_result_check() {
        assert_eq!(add_guard(1.5f32), Guard::NonFiniteResult);
        assert_eq!(mul_guard(2.0f64), Guard::NonFiniteResult);
        assert_eq!(sub_guard_lhs(0.0f32), Guard::NonFiniteResult);
    }
}
