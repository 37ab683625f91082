//! Scalar reference kernels.
//!
//! These loops define the semantics every SIMD kernel must reproduce. They
//! are also what actually runs for tails, for short arrays, for types the
//! active ISA has no vectors for, and whenever SIMD is disabled.
//!
//! All drivers work through raw pointers so the in-place calling shapes
//! (destination aliasing the source exactly) and the separate-destination
//! shapes share one body. Each index is fully read before it is written, so
//! exact aliasing is sound; partial overlap is a caller precondition.
//!
//! Checked drivers abort at the exact offending element: every element
//! before it has already been committed to the destination. This is the
//! documented element-granularity half of the abort contract (the SIMD
//! kernels abort at chunk granularity instead).

use crate::element::Element;
use crate::error::Result;
use crate::kernel::{BinaryOp, UnaryOp};

/// `dst[i] = a[i] OP s` (or `s OP a[i]` when `SWAP`).
///
/// # Safety
///
/// `src` must be valid for `len` reads, `dst` for `len` writes, and the two
/// ranges must be identical or disjoint.
pub(crate) unsafe fn broadcast<T: Element, Op: BinaryOp<T>, const SWAP: bool>(
    src: *const T,
    dst: *mut T,
    len: usize,
    s: T,
) -> Result<()> {
    for i in 0..len {
        let a = *src.add(i);
        let r = if SWAP { Op::apply(s, a)? } else { Op::apply(a, s)? };
        *dst.add(i) = r;
    }
    Ok(())
}

/// Checked variant of [`broadcast`].
///
/// # Safety
///
/// Same contract as [`broadcast`].
pub(crate) unsafe fn broadcast_checked<T: Element, Op: BinaryOp<T>, const SWAP: bool>(
    src: *const T,
    dst: *mut T,
    len: usize,
    s: T,
) -> Result<()> {
    for i in 0..len {
        let a = *src.add(i);
        let r = if SWAP {
            Op::apply_checked(s, a)?
        } else {
            Op::apply_checked(a, s)?
        };
        *dst.add(i) = r;
    }
    Ok(())
}

/// `dst[i] = a[i] OP b[i]`.
///
/// # Safety
///
/// `a` and `b` must be valid for `len` reads, `dst` for `len` writes; `dst`
/// may alias `a` exactly, and must be disjoint from `b`.
pub(crate) unsafe fn pairwise<T: Element, Op: BinaryOp<T>>(
    a: *const T,
    b: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    for i in 0..len {
        let r = Op::apply(*a.add(i), *b.add(i))?;
        *dst.add(i) = r;
    }
    Ok(())
}

/// Checked variant of [`pairwise`].
///
/// # Safety
///
/// Same contract as [`pairwise`].
pub(crate) unsafe fn pairwise_checked<T: Element, Op: BinaryOp<T>>(
    a: *const T,
    b: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    for i in 0..len {
        let r = Op::apply_checked(*a.add(i), *b.add(i))?;
        *dst.add(i) = r;
    }
    Ok(())
}

/// `dst[i] = OP a[i]`.
///
/// # Safety
///
/// Same contract as [`broadcast`].
pub(crate) unsafe fn unary<T: Element, Op: UnaryOp<T>>(
    src: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    for i in 0..len {
        *dst.add(i) = Op::apply(*src.add(i));
    }
    Ok(())
}

/// Checked variant of [`unary`].
///
/// # Safety
///
/// Same contract as [`broadcast`].
pub(crate) unsafe fn unary_checked<T: Element, Op: UnaryOp<T>>(
    src: *const T,
    dst: *mut T,
    len: usize,
) -> Result<()> {
    for i in 0..len {
        match Op::apply_checked(*src.add(i)) {
            Some(r) => *dst.add(i) = r,
            None => return Err(T::FAULT),
        }
    }
    Ok(())
}
