//! The backend trait every vector type implements.
//!
//! A `SimdVec` is one register's worth of elements plus the lane operations
//! the kernels need. Each instruction-set module provides one implementing
//! type per element type (`x86::I8x16`, `neon::F32x4`, ...); the scalar
//! fallback backend implements the same trait with a single lane so the
//! generic kernels compile unchanged on targets without SIMD.
//!
//! Comparison methods return a lane mask in the same register shape: a lane
//! is all-ones where the predicate held and all-zeros where it did not.
//! `mask_any` / `mask_all` collapse such a mask to a scalar answer.
//!
//! Operations an element class does not have (division on integer lanes,
//! bitwise logic on float lanes, negation on unsigned lanes) keep their
//! defaults, which are unreachable: the dispatcher and the per-operation
//! support constants guarantee those paths are never selected.

/// One register of `LANES` elements of type `T`.
pub trait SimdVec<T: Copy>: Copy {
    /// Elements processed per register.
    const LANES: usize;

    /// Loads `LANES` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANES` reads of `T`. No alignment is
    /// required; every backend uses unaligned loads.
    unsafe fn load(ptr: *const T) -> Self;

    /// Stores `LANES` elements starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANES` writes of `T`.
    unsafe fn store(self, ptr: *mut T);

    /// Broadcasts one value into every lane.
    fn splat(value: T) -> Self;

    /// Lanewise wrapping addition.
    fn add(self, rhs: Self) -> Self;

    /// Lanewise wrapping subtraction.
    fn sub(self, rhs: Self) -> Self;

    /// Lanewise wrapping multiplication (low half of the product).
    fn mul(self, rhs: Self) -> Self;

    /// Lanewise division. Float backends only.
    fn div(self, _rhs: Self) -> Self {
        unreachable!("no vector division for this element type")
    }

    // --- comparisons, yielding lane masks -------------------------------

    fn eq_elements(self, rhs: Self) -> Self;
    fn ne_elements(self, rhs: Self) -> Self;
    fn lt_elements(self, rhs: Self) -> Self;
    fn le_elements(self, rhs: Self) -> Self;
    fn gt_elements(self, rhs: Self) -> Self;
    fn ge_elements(self, rhs: Self) -> Self;

    /// True if any lane of this mask is set.
    fn mask_any(self) -> bool;

    /// True if every lane of this mask is set.
    fn mask_all(self) -> bool;

    // --- lanewise and horizontal ordering -------------------------------

    fn min_elements(self, rhs: Self) -> Self;
    fn max_elements(self, rhs: Self) -> Self;

    /// Smallest element across all lanes.
    fn horizontal_min(self) -> T;

    /// Largest element across all lanes.
    fn horizontal_max(self) -> T;

    /// Sum across all lanes. Float backends only (the fast float sum path).
    fn horizontal_add(self) -> T {
        unreachable!("no horizontal add for this element type")
    }

    // --- integer lanes only ---------------------------------------------

    fn and_elements(self, _rhs: Self) -> Self {
        unreachable!("no bitwise AND for this element type")
    }

    fn or_elements(self, _rhs: Self) -> Self {
        unreachable!("no bitwise OR for this element type")
    }

    fn xor_elements(self, _rhs: Self) -> Self {
        unreachable!("no bitwise XOR for this element type")
    }

    fn not_elements(self) -> Self {
        unreachable!("no bitwise NOT for this element type")
    }

    /// Shifts every lane left by the same count. The count has been
    /// validated against the lane width by the caller.
    fn shl_uniform(self, _count: u32) -> Self {
        unreachable!("no vector shift for this element type")
    }

    /// Shifts every lane right by the same validated count: arithmetic for
    /// signed element types, logical for unsigned ones.
    fn shr_uniform(self, _count: u32) -> Self {
        unreachable!("no vector shift for this element type")
    }

    /// True if `self + rhs` overflows in any lane.
    fn add_overflows(self, _rhs: Self) -> bool {
        unreachable!("no overflow predicate for this element type")
    }

    /// True if `self - rhs` overflows in any lane.
    fn sub_overflows(self, _rhs: Self) -> bool {
        unreachable!("no overflow predicate for this element type")
    }

    // --- signed lanes only ----------------------------------------------

    /// Lanewise wrapping negation.
    fn neg_elements(self) -> Self {
        unreachable!("no negation for this element type")
    }

    /// Lanewise wrapping absolute value.
    fn abs_elements(self) -> Self {
        unreachable!("no absolute value for this element type")
    }

    /// True if any lane holds the type's minimum (signed integer backends;
    /// the one input negation and absolute value fault on).
    fn any_equals_min(self) -> bool {
        unreachable!("no minimum-value predicate for this element type")
    }

    // --- float lanes only -----------------------------------------------

    /// True if any lane is Inf or NaN. Implemented with the multiply-by-zero
    /// trick: finite lanes produce ±0.0, non-finite lanes produce NaN, and a
    /// single compare-with-zero plus mask test answers for the whole chunk.
    fn any_nonfinite(self) -> bool {
        unreachable!("no finiteness predicate for this element type")
    }
}
