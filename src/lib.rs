//! Elementwise numeric kernels over flat slices.
//!
//! `lanewise` applies arithmetic, bitwise, comparison and reduction
//! operations to contiguous, homogeneously-typed numeric slices, dispatching
//! to hand-tuned SIMD kernels when the CPU supports them and the array is
//! long enough, and falling back to scalar loops otherwise. The scalar and
//! vector kernels produce bit-identical results (float NaN payloads
//! excepted), including identical overflow decisions.
//!
//! # Instruction sets
//!
//! The build script selects at most one family per build and the runtime
//! probe confirms it: SSE4.1-class 128-bit vectors on x86/x86_64, NEON
//! q-registers on AArch64, NEON d-registers on 32-bit ARM. Everything else
//! runs the scalar kernels. `capability()` reports the decision.
//!
//! # Usage
//!
//! ```
//! use lanewise::{add, ApplyOptions};
//!
//! let mut data = vec![1i32, 2, 3, 4];
//! add::array_scalar(&mut data, 10, ApplyOptions::default()).unwrap();
//! assert_eq!(data, [11, 12, 13, 14]);
//! ```
//!
//! Binary operations come in six calling shapes (`array_scalar`,
//! `array_scalar_into`, `scalar_array`, `scalar_array_into`, `array_array`,
//! `array_array_into`); unary operations in two (`array`, `array_into`).
//! The `_into` shapes write a separate destination, the others operate in
//! place, and for non-faulting inputs the two produce identical values.
//!
//! # Error checking
//!
//! By default every operation with a fault policy runs its checked kernel:
//! integer overflow reports [`LanewiseError::Overflow`], non-finite float
//! results report [`LanewiseError::Arithmetic`], and nothing is retried,
//! clamped or saturated. `ApplyOptions::ignore_errors` selects the faster
//! unchecked kernels instead (integer results wrap). How much of the
//! destination is already written when a fault is reported differs by
//! kernel: the scalar kernels commit every element before the offending
//! one, the SIMD kernels abort at chunk granularity leaving the whole
//! faulting chunk unwritten and nothing after it processed. Both behaviors
//! are part of the contract.

pub mod capability;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod ops;
pub mod simd;
pub mod split;

pub(crate) mod kernel;

pub use capability::{capability, Capability, Isa};
pub use dispatch::ApplyOptions;
pub use element::{ElemType, Element, FloatElement, IntElement, SignedElement};
pub use error::{LanewiseError, Result};

pub use ops::arith::{add, div, mul, sub};
pub use ops::bitwise::{and, lshift, or, rshift, xor};
pub use ops::compare::{
    all, all_pairwise, any, any_pairwise, find_index, find_index_pairwise, CompareOp,
};
pub use ops::reduce::{max, min, sum};
pub use ops::unary::{abs, invert, neg};
