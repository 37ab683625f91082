//! Kernel drivers and the operation trait family.
//!
//! An operation is a zero-sized type describing one elementwise op: its
//! scalar reference bodies (unchecked and checked), its vector bodies, the
//! calling shapes its vector path supports, and how to precompute an
//! overflow guard when one operand is a broadcast scalar. The drivers in
//! [`scalar`] and [`elementwise`] are generic over (element, op) and the
//! runners below pick between them through the dispatcher.

pub(crate) mod elementwise;
pub(crate) mod fold;
pub(crate) mod overflow;
pub(crate) mod predicate;
pub(crate) mod scalar;

use crate::dispatch::{choose, ApplyOptions, KernelChoice};
use crate::element::Element;
use crate::error::Result;
use crate::kernel::overflow::Guard;
use crate::simd::vec::SimdVec;

/// One binary elementwise operation.
pub(crate) trait BinaryOp<T: Element> {
    /// Whether the op carries an overflow/arithmetic-error policy at all.
    /// Ops without one (bitwise logic, shifts) ignore `ignore_errors`.
    const CHECKABLE: bool;
    /// The right operand is a shift count; entry points range-validate it
    /// (scalar operand once, array operands by prescan) before any write.
    const RHS_IS_COUNT: bool = false;
    /// Vector path for `array OP broadcast-scalar`.
    const SIMD_SCALAR_RHS: bool;
    /// Vector path for `broadcast-scalar OP array`.
    const SIMD_SCALAR_LHS: bool;
    /// Vector path for `array OP array`, unchecked.
    const SIMD_PAIRWISE: bool;
    /// Vector path for `array OP array`, checked.
    const SIMD_PAIRWISE_CHECKED: bool;

    fn apply(a: T, b: T) -> Result<T>;
    fn apply_checked(a: T, b: T) -> Result<T>;

    fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector;
    /// Chunk result, or the fault if any lane would misbehave. Only called
    /// for ops with `SIMD_PAIRWISE_CHECKED`.
    fn vec_apply_checked(a: T::Vector, b: T::Vector) -> Result<T::Vector>;

    fn vec_apply_scalar_rhs(a: T::Vector, s: T) -> T::Vector {
        Self::vec_apply(a, T::Vector::splat(s))
    }

    fn vec_apply_scalar_lhs(s: T, a: T::Vector) -> T::Vector {
        Self::vec_apply(T::Vector::splat(s), a)
    }

    /// Guard for `a OP s` with known right operand.
    fn guard_scalar_rhs(s: T) -> Guard<T>;
    /// Guard for `s OP a` with known left operand.
    fn guard_scalar_lhs(s: T) -> Guard<T>;
}

/// One unary elementwise operation.
pub(crate) trait UnaryOp<T: Element> {
    const CHECKABLE: bool;
    const SIMD: bool;

    fn apply(a: T) -> T;
    /// `None` maps to `T::FAULT`.
    fn apply_checked(a: T) -> Option<T>;
    fn vec_apply(a: T::Vector) -> T::Vector;
    fn guard() -> Guard<T>;
}

/// One comparison predicate (the any/all/find-index reductions).
pub(crate) trait MaskOp<T: Element> {
    fn apply(a: T, b: T) -> bool;
    fn vec_apply(a: T::Vector, b: T::Vector) -> T::Vector;
}

/// Runs a broadcast-scalar shape through the dispatched kernel.
///
/// # Safety
///
/// `src` must be valid for `len` reads, `dst` for `len` writes, and the two
/// ranges must be identical (in place) or disjoint.
pub(crate) unsafe fn run_broadcast<T: Element, Op: BinaryOp<T>, const SWAP: bool>(
    src: *const T,
    dst: *mut T,
    len: usize,
    s: T,
    opts: ApplyOptions,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    let simd_shape = if SWAP {
        Op::SIMD_SCALAR_LHS
    } else {
        Op::SIMD_SCALAR_RHS
    };

    match choose(len, lanes, simd_shape, simd_shape, Op::CHECKABLE, opts) {
        KernelChoice::Scalar => scalar::broadcast::<T, Op, SWAP>(src, dst, len, s),
        KernelChoice::ScalarChecked => scalar::broadcast_checked::<T, Op, SWAP>(src, dst, len, s),
        KernelChoice::Simd => elementwise::broadcast::<T, Op, SWAP>(src, dst, len, s),
        KernelChoice::SimdChecked => {
            elementwise::broadcast_checked::<T, Op, SWAP>(src, dst, len, s)
        }
    }
}

/// Runs an array-array shape through the dispatched kernel.
///
/// # Safety
///
/// `a` and `b` must be valid for `len` reads, `dst` for `len` writes; `dst`
/// may alias `a` exactly and must be disjoint from `b`.
pub(crate) unsafe fn run_pairwise<T: Element, Op: BinaryOp<T>>(
    a: *const T,
    b: *const T,
    dst: *mut T,
    len: usize,
    opts: ApplyOptions,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;

    match choose(
        len,
        lanes,
        Op::SIMD_PAIRWISE,
        Op::SIMD_PAIRWISE_CHECKED,
        Op::CHECKABLE,
        opts,
    ) {
        KernelChoice::Scalar => scalar::pairwise::<T, Op>(a, b, dst, len),
        KernelChoice::ScalarChecked => scalar::pairwise_checked::<T, Op>(a, b, dst, len),
        KernelChoice::Simd => elementwise::pairwise::<T, Op>(a, b, dst, len),
        KernelChoice::SimdChecked => elementwise::pairwise_checked::<T, Op>(a, b, dst, len),
    }
}

/// Runs a unary shape through the dispatched kernel.
///
/// # Safety
///
/// Same contract as [`run_broadcast`].
pub(crate) unsafe fn run_unary<T: Element, Op: UnaryOp<T>>(
    src: *const T,
    dst: *mut T,
    len: usize,
    opts: ApplyOptions,
) -> Result<()> {
    let lanes = <T::Vector as SimdVec<T>>::LANES;

    match choose(len, lanes, Op::SIMD, Op::SIMD, Op::CHECKABLE, opts) {
        KernelChoice::Scalar => scalar::unary::<T, Op>(src, dst, len),
        KernelChoice::ScalarChecked => scalar::unary_checked::<T, Op>(src, dst, len),
        KernelChoice::Simd => elementwise::unary::<T, Op>(src, dst, len),
        KernelChoice::SimdChecked => elementwise::unary_checked::<T, Op>(src, dst, len),
    }
}
