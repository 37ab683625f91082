//! Generic SIMD elementwise drivers.
//!
//! Every driver walks the aligned prefix in lane-count-sized chunks
//! (load / compute / store through the element's vector backend) and hands
//! the tail to the matching scalar kernel. The checked drivers test each
//! chunk before committing it: if any lane would fault, nothing of that
//! chunk is written and nothing after it runs, including the tail. That
//! chunk-granularity abort is intentionally coarser than the scalar
//! kernels' element-granularity abort and is part of the documented
//! contract.

use crate::element::Element;
use crate::error::Result;
use crate::kernel::overflow::Guard;
use crate::kernel::{scalar, BinaryOp, UnaryOp};
use crate::simd::vec::SimdVec;
use crate::split::aligned_split;

/// SIMD form of [`scalar::broadcast`].
///
/// # Safety
///
/// Same contract as [`scalar::broadcast`].
pub(crate) unsafe fn broadcast<T: Element, Op: BinaryOp<T>, const SWAP: bool>(
    src: *const T,
    dst: *mut T,
    len: usize,
    s: T,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let split = aligned_split(len, lanes);

    let mut i = 0;
    while i < split.aligned {
        let a = T::Vector::load(src.add(i));
        let r = if SWAP {
            Op::vec_apply_scalar_lhs(s, a)
        } else {
            Op::vec_apply_scalar_rhs(a, s)
        };
        r.store(dst.add(i));
        i += lanes;
    }

    scalar::broadcast::<T, Op, SWAP>(src.add(split.aligned), dst.add(split.aligned), split.tail, s)
}

/// Checked SIMD form of [`scalar::broadcast`]: the guard is precomputed
/// once from the known operand, then every chunk is compared against it
/// before its result is stored.
///
/// # Safety
///
/// Same contract as [`scalar::broadcast`].
pub(crate) unsafe fn broadcast_checked<T: Element, Op: BinaryOp<T>, const SWAP: bool>(
    src: *const T,
    dst: *mut T,
    len: usize,
    s: T,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let split = aligned_split(len, lanes);

    let guard: Guard<T> = if SWAP {
        Op::guard_scalar_lhs(s)
    } else {
        Op::guard_scalar_rhs(s)
    };
    let guard = guard.prepare();

    let mut i = 0;
    while i < split.aligned {
        let a = T::Vector::load(src.add(i));
        if guard.input_violates(a) {
            return Err(T::FAULT);
        }
        let r = if SWAP {
            Op::vec_apply_scalar_lhs(s, a)
        } else {
            Op::vec_apply_scalar_rhs(a, s)
        };
        if guard.result_faults(r) {
            return Err(T::FAULT);
        }
        r.store(dst.add(i));
        i += lanes;
    }

    scalar::broadcast_checked::<T, Op, SWAP>(
        src.add(split.aligned),
        dst.add(split.aligned),
        split.tail,
        s,
    )
}

/// SIMD form of [`scalar::pairwise`].
///
/// # Safety
///
/// Same contract as [`scalar::pairwise`].
pub(crate) unsafe fn pairwise<T: Element, Op: BinaryOp<T>>(
    a: *const T,
    b: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let split = aligned_split(len, lanes);

    let mut i = 0;
    while i < split.aligned {
        let va = T::Vector::load(a.add(i));
        let vb = T::Vector::load(b.add(i));
        Op::vec_apply(va, vb).store(dst.add(i));
        i += lanes;
    }

    scalar::pairwise::<T, Op>(
        a.add(split.aligned),
        b.add(split.aligned),
        dst.add(split.aligned),
        split.tail,
    )
}

/// Checked SIMD form of [`scalar::pairwise`]. Both operands vary, so the
/// fault decision is recomputed per chunk inside the op's vector body.
///
/// # Safety
///
/// Same contract as [`scalar::pairwise`].
pub(crate) unsafe fn pairwise_checked<T: Element, Op: BinaryOp<T>>(
    a: *const T,
    b: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let split = aligned_split(len, lanes);

    let mut i = 0;
    while i < split.aligned {
        let va = T::Vector::load(a.add(i));
        let vb = T::Vector::load(b.add(i));
        Op::vec_apply_checked(va, vb)?.store(dst.add(i));
        i += lanes;
    }

    scalar::pairwise_checked::<T, Op>(
        a.add(split.aligned),
        b.add(split.aligned),
        dst.add(split.aligned),
        split.tail,
    )
}

/// SIMD form of [`scalar::unary`].
///
/// # Safety
///
/// Same contract as [`scalar::broadcast`].
pub(crate) unsafe fn unary<T: Element, Op: UnaryOp<T>>(
    src: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let split = aligned_split(len, lanes);

    let mut i = 0;
    while i < split.aligned {
        let a = T::Vector::load(src.add(i));
        Op::vec_apply(a).store(dst.add(i));
        i += lanes;
    }

    scalar::unary::<T, Op>(src.add(split.aligned), dst.add(split.aligned), split.tail)
}

/// Checked SIMD form of [`scalar::unary`].
///
/// # Safety
///
/// Same contract as [`scalar::broadcast`].
pub(crate) unsafe fn unary_checked<T: Element, Op: UnaryOp<T>>(
    src: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let split = aligned_split(len, lanes);

    let guard = Op::guard().prepare();

    let mut i = 0;
    while i < split.aligned {
        let a = T::Vector::load(src.add(i));
        if guard.input_violates(a) {
            return Err(T::FAULT);
        }
        let r = Op::vec_apply(a);
        if guard.result_faults(r) {
            return Err(T::FAULT);
        }
        r.store(dst.add(i));
        i += lanes;
    }

    scalar::unary_checked::<T, Op>(src.add(split.aligned), dst.add(split.aligned), split.tail)
}
