//! Public operation surface.
//!
//! Binary operations expose the six calling shapes as six functions in a
//! module named after the operation; unary operations expose two. All
//! shapes accept the same options struct and return the same result type,
//! so the host code can treat every operation uniformly.
//!
//! Slice length agreement between sources and destination is a
//! precondition, enforced by assertion; the error codes are reserved for
//! numeric faults.

pub(crate) mod kinds;

use crate::element::Element;
use crate::error::{LanewiseError, Result};
use crate::kernel::BinaryOp;

pub(crate) fn precheck_scalar_count<T: Element, Op: BinaryOp<T>>(s: T) -> Result<()> {
    if Op::RHS_IS_COUNT && s.to_shift_count().is_none() {
        return Err(LanewiseError::Arithmetic);
    }
    Ok(())
}

pub(crate) fn precheck_count_array<T: Element, Op: BinaryOp<T>>(counts: &[T]) -> Result<()> {
    if Op::RHS_IS_COUNT && counts.iter().any(|&c| c.to_shift_count().is_none()) {
        return Err(LanewiseError::Arithmetic);
    }
    Ok(())
}

// Generates the six-shape public module for one binary operation. Shift
// counts are range-validated before any write: a scalar count once, array
// counts by prescan.
macro_rules! binary_op_api {
    ($(#[$meta:meta])* $name:ident, $op:ident, $bound:ident) => {
        $(#[$meta])*
        pub mod $name {
            use crate::dispatch::ApplyOptions;
            use crate::element::$bound;
            use crate::error::Result;
            use crate::kernel;
            use crate::ops::kinds::$op;
            use crate::ops::{precheck_count_array, precheck_scalar_count};

            /// In place: `data[i] = data[i] OP rhs`.
            pub fn array_scalar<T: $bound>(
                data: &mut [T],
                rhs: T,
                opts: ApplyOptions,
            ) -> Result<()> {
                precheck_scalar_count::<T, $op>(rhs)?;
                let dst = data.as_mut_ptr();
                // SAFETY: source and destination are the same slice.
                unsafe { kernel::run_broadcast::<T, $op, false>(dst, dst, data.len(), rhs, opts) }
            }

            /// Separate destination: `dst[i] = src[i] OP rhs`.
            pub fn array_scalar_into<T: $bound>(
                src: &[T],
                rhs: T,
                dst: &mut [T],
                opts: ApplyOptions,
            ) -> Result<()> {
                assert_eq!(src.len(), dst.len(), "source and destination must be the same length");
                precheck_scalar_count::<T, $op>(rhs)?;
                // SAFETY: borrows guarantee the slices are disjoint and the
                // lengths were just checked equal.
                unsafe {
                    kernel::run_broadcast::<T, $op, false>(
                        src.as_ptr(),
                        dst.as_mut_ptr(),
                        src.len(),
                        rhs,
                        opts,
                    )
                }
            }

            /// In place: `data[i] = lhs OP data[i]`.
            pub fn scalar_array<T: $bound>(
                lhs: T,
                data: &mut [T],
                opts: ApplyOptions,
            ) -> Result<()> {
                precheck_count_array::<T, $op>(data)?;
                let dst = data.as_mut_ptr();
                // SAFETY: source and destination are the same slice.
                unsafe { kernel::run_broadcast::<T, $op, true>(dst, dst, data.len(), lhs, opts) }
            }

            /// Separate destination: `dst[i] = lhs OP src[i]`.
            pub fn scalar_array_into<T: $bound>(
                lhs: T,
                src: &[T],
                dst: &mut [T],
                opts: ApplyOptions,
            ) -> Result<()> {
                assert_eq!(src.len(), dst.len(), "source and destination must be the same length");
                precheck_count_array::<T, $op>(src)?;
                // SAFETY: borrows guarantee the slices are disjoint and the
                // lengths were just checked equal.
                unsafe {
                    kernel::run_broadcast::<T, $op, true>(
                        src.as_ptr(),
                        dst.as_mut_ptr(),
                        src.len(),
                        lhs,
                        opts,
                    )
                }
            }

            /// In place: `data[i] = data[i] OP rhs[i]`.
            pub fn array_array<T: $bound>(
                data: &mut [T],
                rhs: &[T],
                opts: ApplyOptions,
            ) -> Result<()> {
                assert_eq!(data.len(), rhs.len(), "operands must be the same length");
                precheck_count_array::<T, $op>(rhs)?;
                let dst = data.as_mut_ptr();
                // SAFETY: destination aliases the left source exactly; the
                // right source is a disjoint borrow.
                unsafe {
                    kernel::run_pairwise::<T, $op>(dst, rhs.as_ptr(), dst, data.len(), opts)
                }
            }

            /// Separate destination: `dst[i] = lhs[i] OP rhs[i]`.
            pub fn array_array_into<T: $bound>(
                lhs: &[T],
                rhs: &[T],
                dst: &mut [T],
                opts: ApplyOptions,
            ) -> Result<()> {
                assert_eq!(lhs.len(), rhs.len(), "operands must be the same length");
                assert_eq!(lhs.len(), dst.len(), "source and destination must be the same length");
                precheck_count_array::<T, $op>(rhs)?;
                // SAFETY: borrows guarantee disjointness; lengths checked.
                unsafe {
                    kernel::run_pairwise::<T, $op>(
                        lhs.as_ptr(),
                        rhs.as_ptr(),
                        dst.as_mut_ptr(),
                        lhs.len(),
                        opts,
                    )
                }
            }
        }
    };
}

// Generates the two-shape public module for one unary operation.
macro_rules! unary_op_api {
    ($(#[$meta:meta])* $name:ident, $op:ident, $bound:ident) => {
        $(#[$meta])*
        pub mod $name {
            use crate::dispatch::ApplyOptions;
            use crate::element::$bound;
            use crate::error::Result;
            use crate::kernel;
            use crate::ops::kinds::$op;

            /// In place: `data[i] = OP data[i]`.
            pub fn array<T: $bound>(data: &mut [T], opts: ApplyOptions) -> Result<()> {
                let dst = data.as_mut_ptr();
                // SAFETY: source and destination are the same slice.
                unsafe { kernel::run_unary::<T, $op>(dst, dst, data.len(), opts) }
            }

            /// Separate destination: `dst[i] = OP src[i]`.
            pub fn array_into<T: $bound>(
                src: &[T],
                dst: &mut [T],
                opts: ApplyOptions,
            ) -> Result<()> {
                assert_eq!(src.len(), dst.len(), "source and destination must be the same length");
                // SAFETY: borrows guarantee disjointness; lengths checked.
                unsafe {
                    kernel::run_unary::<T, $op>(src.as_ptr(), dst.as_mut_ptr(), src.len(), opts)
                }
            }
        }
    };
}

pub mod arith;
pub mod bitwise;
pub mod compare;
pub mod reduce;
pub mod unary;
