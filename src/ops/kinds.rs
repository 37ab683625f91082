//! The operation descriptors.
//!
//! One zero-sized type per elementwise operation, implementing the kernel
//! trait for every element type. The bodies branch on `T::IS_FLOAT` where
//! the two classes detect faults differently; the branch is on an
//! associated const, so each monomorphization keeps only its own side.

use crate::element::Element;
use crate::error::{LanewiseError, Result};
use crate::kernel::overflow::{self, Guard};
use crate::kernel::{BinaryOp, MaskOp, UnaryOp};
use crate::simd::vec::SimdVec;

// ---------------------------------------------------------------------------
// binary arithmetic
// ---------------------------------------------------------------------------

pub(crate) struct AddOp;

impl<T: Element> BinaryOp<T> for AddOp {
    const CHECKABLE: bool = true;
    const SIMD_SCALAR_RHS: bool = true;
    const SIMD_SCALAR_LHS: bool = true;
    const SIMD_PAIRWISE: bool = true;
    const SIMD_PAIRWISE_CHECKED: bool = true;

    fn apply(a: T, b: T) -> Result<T> {
        Ok(a.wrapping_add_elem(b))
    }

    fn apply_checked(a: T, b: T) -> Result<T> {
        a.checked_add_elem(b).ok_or(T::FAULT)
    }

    fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector {
        a.add(b)
    }

    fn vec_apply_checked(a: T::Vector, b: T::Vector) -> Result<T::Vector> {
        if T::IS_FLOAT {
            let r = a.add(b);
            if r.any_nonfinite() {
                return Err(T::FAULT);
            }
            Ok(r)
        } else {
            if a.add_overflows(b) {
                return Err(T::FAULT);
            }
            Ok(a.add(b))
        }
    }

    fn guard_scalar_rhs(s: T) -> Guard<T> {
        overflow::add_guard(s)
    }

    fn guard_scalar_lhs(s: T) -> Guard<T> {
        overflow::add_guard(s)
    }
}

pub(crate) struct SubOp;

impl<T: Element> BinaryOp<T> for SubOp {
    const CHECKABLE: bool = true;
    const SIMD_SCALAR_RHS: bool = true;
    const SIMD_SCALAR_LHS: bool = true;
    const SIMD_PAIRWISE: bool = true;
    const SIMD_PAIRWISE_CHECKED: bool = true;

    fn apply(a: T, b: T) -> Result<T> {
        Ok(a.wrapping_sub_elem(b))
    }

    fn apply_checked(a: T, b: T) -> Result<T> {
        a.checked_sub_elem(b).ok_or(T::FAULT)
    }

    fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector {
        a.sub(b)
    }

    fn vec_apply_checked(a: T::Vector, b: T::Vector) -> Result<T::Vector> {
        if T::IS_FLOAT {
            let r = a.sub(b);
            if r.any_nonfinite() {
                return Err(T::FAULT);
            }
            Ok(r)
        } else {
            if a.sub_overflows(b) {
                return Err(T::FAULT);
            }
            Ok(a.sub(b))
        }
    }

    fn guard_scalar_rhs(s: T) -> Guard<T> {
        overflow::sub_guard_rhs(s)
    }

    fn guard_scalar_lhs(s: T) -> Guard<T> {
        overflow::sub_guard_lhs(s)
    }
}

pub(crate) struct MulOp;

impl<T: Element> BinaryOp<T> for MulOp {
    const CHECKABLE: bool = true;
    const SIMD_SCALAR_RHS: bool = true;
    const SIMD_SCALAR_LHS: bool = true;
    const SIMD_PAIRWISE: bool = true;
    // No closed-form bound exists when both factors vary; the checked
    // array-array multiply runs the scalar kernel.
    const SIMD_PAIRWISE_CHECKED: bool = false;

    fn apply(a: T, b: T) -> Result<T> {
        Ok(a.wrapping_mul_elem(b))
    }

    fn apply_checked(a: T, b: T) -> Result<T> {
        a.checked_mul_elem(b).ok_or(T::FAULT)
    }

    fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector {
        a.mul(b)
    }

    fn vec_apply_checked(a: T::Vector, b: T::Vector) -> Result<T::Vector> {
        if T::IS_FLOAT {
            let r = a.mul(b);
            if r.any_nonfinite() {
                return Err(T::FAULT);
            }
            Ok(r)
        } else {
            unreachable!("checked array-array multiply has no vector path")
        }
    }

    fn guard_scalar_rhs(s: T) -> Guard<T> {
        overflow::mul_guard(s)
    }

    fn guard_scalar_lhs(s: T) -> Guard<T> {
        overflow::mul_guard(s)
    }
}

pub(crate) struct DivOp;

impl<T: Element> BinaryOp<T> for DivOp {
    const CHECKABLE: bool = true;
    // No vector divide exists for integer lanes on any supported ISA.
    const SIMD_SCALAR_RHS: bool = T::IS_FLOAT;
    const SIMD_SCALAR_LHS: bool = T::IS_FLOAT;
    const SIMD_PAIRWISE: bool = T::IS_FLOAT;
    const SIMD_PAIRWISE_CHECKED: bool = T::IS_FLOAT;

    fn apply(a: T, b: T) -> Result<T> {
        a.div_elem(b)
    }

    fn apply_checked(a: T, b: T) -> Result<T> {
        a.div_checked_elem(b)
    }

    fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector {
        a.div(b)
    }

    fn vec_apply_checked(a: T::Vector, b: T::Vector) -> Result<T::Vector> {
        // Floats only; a zero divisor shows up as a non-finite lane.
        let r = a.div(b);
        if r.any_nonfinite() {
            return Err(LanewiseError::Arithmetic);
        }
        Ok(r)
    }

    fn guard_scalar_rhs(s: T) -> Guard<T> {
        overflow::div_guard(s)
    }

    fn guard_scalar_lhs(s: T) -> Guard<T> {
        overflow::div_guard(s)
    }
}

// ---------------------------------------------------------------------------
// bitwise logic
// ---------------------------------------------------------------------------

macro_rules! bitwise_op {
    ($name:ident, $scalar:ident, $vector:ident) => {
        pub(crate) struct $name;

        impl<T: Element> BinaryOp<T> for $name {
            const CHECKABLE: bool = false;
            const SIMD_SCALAR_RHS: bool = true;
            const SIMD_SCALAR_LHS: bool = true;
            const SIMD_PAIRWISE: bool = true;
            const SIMD_PAIRWISE_CHECKED: bool = true;

            fn apply(a: T, b: T) -> Result<T> {
                Ok(a.$scalar(b))
            }

            fn apply_checked(a: T, b: T) -> Result<T> {
                Ok(a.$scalar(b))
            }

            fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector {
                a.$vector(b)
            }

            fn vec_apply_checked(a: T::Vector, b: T::Vector) -> Result<T::Vector> {
                Ok(a.$vector(b))
            }

            fn guard_scalar_rhs(_s: T) -> Guard<T> {
                Guard::Free
            }

            fn guard_scalar_lhs(_s: T) -> Guard<T> {
                Guard::Free
            }
        }
    };
}

bitwise_op!(AndOp, and_elem, and_elements);
bitwise_op!(OrOp, or_elem, or_elements);
bitwise_op!(XorOp, xor_elem, xor_elements);

// ---------------------------------------------------------------------------
// shifts
// ---------------------------------------------------------------------------

macro_rules! shift_op {
    ($name:ident, $scalar:ident, $vector:ident) => {
        pub(crate) struct $name;

        impl<T: Element> BinaryOp<T> for $name {
            const CHECKABLE: bool = false;
            const RHS_IS_COUNT: bool = true;
            // Only a uniform count vectorizes: per-lane variable counts
            // (scalar-array and array-array shapes) run the scalar kernel.
            const SIMD_SCALAR_RHS: bool = true;
            const SIMD_SCALAR_LHS: bool = false;
            const SIMD_PAIRWISE: bool = false;
            const SIMD_PAIRWISE_CHECKED: bool = false;

            fn apply(a: T, b: T) -> Result<T> {
                let n = b.to_shift_count().ok_or(LanewiseError::Arithmetic)?;
                Ok(a.$scalar(n))
            }

            fn apply_checked(a: T, b: T) -> Result<T> {
                let n = b.to_shift_count().ok_or(LanewiseError::Arithmetic)?;
                Ok(a.$scalar(n))
            }

            fn vec_apply(_a: T::Vector, _b: T::Vector) -> T::Vector {
                unreachable!("shifts only vectorize with a uniform count")
            }

            fn vec_apply_checked(_a: T::Vector, _b: T::Vector) -> Result<T::Vector> {
                unreachable!("shifts only vectorize with a uniform count")
            }

            fn vec_apply_scalar_rhs(a: T::Vector, s: T) -> T::Vector {
                match s.to_shift_count() {
                    Some(n) => a.$vector(n),
                    None => unreachable!("shift count validated before dispatch"),
                }
            }

            fn guard_scalar_rhs(_s: T) -> Guard<T> {
                Guard::Free
            }

            fn guard_scalar_lhs(_s: T) -> Guard<T> {
                Guard::Free
            }
        }
    };
}

shift_op!(LshiftOp, shl_elem, shl_uniform);
shift_op!(RshiftOp, shr_elem, shr_uniform);

// ---------------------------------------------------------------------------
// unary
// ---------------------------------------------------------------------------

pub(crate) struct NegOp;

impl<T: Element> UnaryOp<T> for NegOp {
    const CHECKABLE: bool = true;
    const SIMD: bool = true;

    fn apply(a: T) -> T {
        a.wrapping_neg_elem()
    }

    fn apply_checked(a: T) -> Option<T> {
        a.checked_neg_elem()
    }

    fn vec_apply(a: T::Vector) -> T::Vector {
        a.neg_elements()
    }

    fn guard() -> Guard<T> {
        overflow::negation_guard()
    }
}

pub(crate) struct AbsOp;

impl<T: Element> UnaryOp<T> for AbsOp {
    const CHECKABLE: bool = true;
    const SIMD: bool = true;

    fn apply(a: T) -> T {
        a.wrapping_abs_elem()
    }

    fn apply_checked(a: T) -> Option<T> {
        a.checked_abs_elem()
    }

    fn vec_apply(a: T::Vector) -> T::Vector {
        a.abs_elements()
    }

    fn guard() -> Guard<T> {
        overflow::negation_guard()
    }
}

pub(crate) struct InvertOp;

impl<T: Element> UnaryOp<T> for InvertOp {
    const CHECKABLE: bool = false;
    const SIMD: bool = true;

    fn apply(a: T) -> T {
        a.not_elem()
    }

    fn apply_checked(a: T) -> Option<T> {
        Some(a.not_elem())
    }

    fn vec_apply(a: T::Vector) -> T::Vector {
        a.not_elements()
    }

    fn guard() -> Guard<T> {
        Guard::Free
    }
}

// ---------------------------------------------------------------------------
// comparison predicates
// ---------------------------------------------------------------------------

macro_rules! mask_op {
    ($name:ident, $cmp:tt, $vector:ident) => {
        pub(crate) struct $name;

        impl<T: Element> MaskOp<T> for $name {
            fn apply(a: T, b: T) -> bool {
                a $cmp b
            }

            fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector {
                a.$vector(b)
            }
        }
    };
}

mask_op!(EqOp, ==, eq_elements);
mask_op!(NeOp, !=, ne_elements);
mask_op!(LtOp, <, lt_elements);
mask_op!(LeOp, <=, le_elements);
mask_op!(GtOp, >, gt_elements);
mask_op!(GeOp, >=, ge_elements);
