//! The type matrix: the closed set of element types the kernels operate on.
//!
//! Ten types are supported: i8/u8/i16/u16/i32/u32/i64/u64/f32/f64. The
//! `Element` trait carries everything the generic kernels need to know about
//! one of them: its reference scalar semantics (wrapping and checked), its
//! widened summation return type, which error class a checked fault maps to,
//! and which vector type backs it on the instruction set this build selected.
//!
//! The scalar methods here are the single source of truth for operation
//! semantics; the scalar kernels call them directly and every vector backend
//! must match them bit for bit (float NaN payloads excepted).

use num::traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, ToPrimitive, WrappingAdd, WrappingMul,
    WrappingNeg, WrappingSub,
};
use num::{Float, One, Zero};

use crate::error::{LanewiseError, Result};
use crate::simd::vec::SimdVec;

/// Tag identifying one of the ten supported element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl ElemType {
    /// Short name of the type, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ElemType::Int8 => "i8",
            ElemType::UInt8 => "u8",
            ElemType::Int16 => "i16",
            ElemType::UInt16 => "u16",
            ElemType::Int32 => "i32",
            ElemType::UInt32 => "u32",
            ElemType::Int64 => "i64",
            ElemType::UInt64 => "u64",
            ElemType::Float32 => "f32",
            ElemType::Float64 => "f64",
        }
    }
}

/// One of the ten supported element types.
///
/// Methods a class does not have (bitwise logic on floats, negation on
/// unsigned integers, shift counts from floats) are unreachable; the public
/// entry points restrict those operations to the right classes through the
/// [`IntElement`] / [`SignedElement`] / [`FloatElement`] bounds.
pub trait Element:
    Copy + PartialEq + PartialOrd + std::fmt::Debug + Send + Sync + 'static
{
    const TYPE: ElemType;
    const BITS: u32;
    const IS_FLOAT: bool;
    const MIN: Self;
    const MAX: Self;
    /// Error class a checked fault on this type reports: `Overflow` for
    /// integers, `Arithmetic` for floats.
    const FAULT: LanewiseError;

    /// Vector backend for this element on the active instruction set; the
    /// one-lane scalar backend where the ISA has no vectors for it.
    type Vector: SimdVec<Self>;

    /// Widened summation return type: i64 for signed integers, u64 for
    /// unsigned ones, f64 for floats.
    type Accum: Copy + PartialEq + std::fmt::Debug;

    fn zero() -> Self;
    fn one() -> Self;

    // --- unchecked reference semantics ----------------------------------

    fn wrapping_add_elem(self, rhs: Self) -> Self;
    fn wrapping_sub_elem(self, rhs: Self) -> Self;
    fn wrapping_mul_elem(self, rhs: Self) -> Self;
    fn wrapping_neg_elem(self) -> Self;
    fn wrapping_abs_elem(self) -> Self;

    // --- checked reference semantics (None => `Self::FAULT`) ------------

    fn checked_add_elem(self, rhs: Self) -> Option<Self>;
    fn checked_sub_elem(self, rhs: Self) -> Option<Self>;
    fn checked_mul_elem(self, rhs: Self) -> Option<Self>;
    fn checked_neg_elem(self) -> Option<Self>;
    fn checked_abs_elem(self) -> Option<Self>;

    // --- division (fallible in both modes for integers) -----------------

    fn div_elem(self, rhs: Self) -> Result<Self>;
    fn div_checked_elem(self, rhs: Self) -> Result<Self>;
    /// Division by a divisor the caller knows is non-zero (overflow guard
    /// precomputation).
    fn wrapping_div_elem(self, rhs: Self) -> Self;

    // --- bitwise and shifts (integer classes) ---------------------------

    fn and_elem(self, rhs: Self) -> Self;
    fn or_elem(self, rhs: Self) -> Self;
    fn xor_elem(self, rhs: Self) -> Self;
    fn not_elem(self) -> Self;
    /// Left shift by a count already validated against `Self::BITS`.
    fn shl_elem(self, count: u32) -> Self;
    /// Right shift by a validated count: arithmetic for signed types,
    /// logical for unsigned ones.
    fn shr_elem(self, count: u32) -> Self;
    /// Interprets this value as a shift count: `Some(n)` iff it is a
    /// non-negative integer strictly below `Self::BITS`.
    fn to_shift_count(self) -> Option<u32>;

    // --- summation return convention ------------------------------------

    /// Converts a finished sum into the widened return type. Summation
    /// itself runs in the element type; only the returned value widens.
    fn widen(self) -> Self::Accum;
}

/// Integer element types (bitwise logic and shifts).
pub trait IntElement: Element {}

/// Element types with a signed negation: signed integers and floats.
pub trait SignedElement: Element {}

/// The two floating point element types.
pub trait FloatElement: Element {}

// Binds the per-ISA vector type. Exactly one cfg survives per build: the
// build script emits one of `sse` / `neon` / `fallback`, and `neon` splits
// by target_arch into the ARMv8 (q-register) and ARMv7 (d-register) modules.
macro_rules! vector_binding {
    ($t:ty, $x86:ty, $v8:ty, $v7:ty) => {
        #[cfg(sse)]
        type Vector = $x86;
        #[cfg(all(neon, target_arch = "aarch64"))]
        type Vector = $v8;
        #[cfg(all(neon, target_arch = "arm"))]
        type Vector = $v7;
        #[cfg(fallback)]
        type Vector = crate::simd::scalar::ScalarVec<$t>;
    };
}

macro_rules! int_common {
    ($t:ty, $accum:ty) => {
        const BITS: u32 = <$t>::BITS;
        const IS_FLOAT: bool = false;
        const MIN: Self = <$t>::MIN;
        const MAX: Self = <$t>::MAX;
        const FAULT: LanewiseError = LanewiseError::Overflow;

        fn zero() -> Self {
            Zero::zero()
        }

        fn one() -> Self {
            One::one()
        }

        fn wrapping_add_elem(self, rhs: Self) -> Self {
            WrappingAdd::wrapping_add(&self, &rhs)
        }

        fn wrapping_sub_elem(self, rhs: Self) -> Self {
            WrappingSub::wrapping_sub(&self, &rhs)
        }

        fn wrapping_mul_elem(self, rhs: Self) -> Self {
            WrappingMul::wrapping_mul(&self, &rhs)
        }

        fn checked_add_elem(self, rhs: Self) -> Option<Self> {
            CheckedAdd::checked_add(&self, &rhs)
        }

        fn checked_sub_elem(self, rhs: Self) -> Option<Self> {
            CheckedSub::checked_sub(&self, &rhs)
        }

        fn checked_mul_elem(self, rhs: Self) -> Option<Self> {
            CheckedMul::checked_mul(&self, &rhs)
        }

        fn div_elem(self, rhs: Self) -> Result<Self> {
            if rhs == 0 {
                return Err(LanewiseError::Arithmetic);
            }
            Ok(self.wrapping_div(rhs))
        }

        fn div_checked_elem(self, rhs: Self) -> Result<Self> {
            if rhs == 0 {
                return Err(LanewiseError::Arithmetic);
            }
            CheckedDiv::checked_div(&self, &rhs).ok_or(LanewiseError::Overflow)
        }

        fn wrapping_div_elem(self, rhs: Self) -> Self {
            debug_assert!(rhs != 0);
            self.wrapping_div(rhs)
        }

        fn and_elem(self, rhs: Self) -> Self {
            self & rhs
        }

        fn or_elem(self, rhs: Self) -> Self {
            self | rhs
        }

        fn xor_elem(self, rhs: Self) -> Self {
            self ^ rhs
        }

        fn not_elem(self) -> Self {
            !self
        }

        fn shl_elem(self, count: u32) -> Self {
            debug_assert!(count < Self::BITS);
            self << count
        }

        fn shr_elem(self, count: u32) -> Self {
            debug_assert!(count < Self::BITS);
            self >> count
        }

        fn to_shift_count(self) -> Option<u32> {
            self.to_u32().filter(|n| *n < Self::BITS)
        }

        fn widen(self) -> Self::Accum {
            self as $accum
        }
    };
}

macro_rules! element_signed_int {
    ($t:ty, $tag:ident, $x86:ty, $v8:ty, $v7:ty) => {
        impl Element for $t {
            const TYPE: ElemType = ElemType::$tag;
            type Accum = i64;

            vector_binding!($t, $x86, $v8, $v7);
            int_common!($t, i64);

            fn wrapping_neg_elem(self) -> Self {
                WrappingNeg::wrapping_neg(&self)
            }

            fn wrapping_abs_elem(self) -> Self {
                self.wrapping_abs()
            }

            fn checked_neg_elem(self) -> Option<Self> {
                self.checked_neg()
            }

            fn checked_abs_elem(self) -> Option<Self> {
                self.checked_abs()
            }
        }

        impl IntElement for $t {}
        impl SignedElement for $t {}
    };
}

macro_rules! element_unsigned_int {
    ($t:ty, $tag:ident, $x86:ty, $v8:ty, $v7:ty) => {
        impl Element for $t {
            const TYPE: ElemType = ElemType::$tag;
            type Accum = u64;

            vector_binding!($t, $x86, $v8, $v7);
            int_common!($t, u64);

            fn wrapping_neg_elem(self) -> Self {
                unreachable!("no negation for unsigned elements")
            }

            fn wrapping_abs_elem(self) -> Self {
                unreachable!("no absolute value for unsigned elements")
            }

            fn checked_neg_elem(self) -> Option<Self> {
                unreachable!("no negation for unsigned elements")
            }

            fn checked_abs_elem(self) -> Option<Self> {
                unreachable!("no absolute value for unsigned elements")
            }
        }

        impl IntElement for $t {}
    };
}

macro_rules! element_float {
    ($t:ty, $tag:ident, $bits:expr, $x86:ty, $v8:ty, $v7:ty) => {
        impl Element for $t {
            const TYPE: ElemType = ElemType::$tag;
            const BITS: u32 = $bits;
            const IS_FLOAT: bool = true;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const FAULT: LanewiseError = LanewiseError::Arithmetic;

            type Accum = f64;

            vector_binding!($t, $x86, $v8, $v7);

            fn zero() -> Self {
                Zero::zero()
            }

            fn one() -> Self {
                One::one()
            }

            fn wrapping_add_elem(self, rhs: Self) -> Self {
                self + rhs
            }

            fn wrapping_sub_elem(self, rhs: Self) -> Self {
                self - rhs
            }

            fn wrapping_mul_elem(self, rhs: Self) -> Self {
                self * rhs
            }

            fn wrapping_neg_elem(self) -> Self {
                -self
            }

            fn wrapping_abs_elem(self) -> Self {
                Float::abs(self)
            }

            // Checked float semantics test the produced value, not the
            // inputs: a finite result passes, Inf/NaN faults.

            fn checked_add_elem(self, rhs: Self) -> Option<Self> {
                let r = self + rhs;
                r.is_finite().then_some(r)
            }

            fn checked_sub_elem(self, rhs: Self) -> Option<Self> {
                let r = self - rhs;
                r.is_finite().then_some(r)
            }

            fn checked_mul_elem(self, rhs: Self) -> Option<Self> {
                let r = self * rhs;
                r.is_finite().then_some(r)
            }

            fn checked_neg_elem(self) -> Option<Self> {
                let r = -self;
                r.is_finite().then_some(r)
            }

            fn checked_abs_elem(self) -> Option<Self> {
                let r = Float::abs(self);
                r.is_finite().then_some(r)
            }

            fn div_elem(self, rhs: Self) -> Result<Self> {
                Ok(self / rhs)
            }

            fn div_checked_elem(self, rhs: Self) -> Result<Self> {
                let r = self / rhs;
                if r.is_finite() {
                    Ok(r)
                } else {
                    Err(LanewiseError::Arithmetic)
                }
            }

            fn wrapping_div_elem(self, rhs: Self) -> Self {
                self / rhs
            }

            fn and_elem(self, _rhs: Self) -> Self {
                unreachable!("no bitwise ops for float elements")
            }

            fn or_elem(self, _rhs: Self) -> Self {
                unreachable!("no bitwise ops for float elements")
            }

            fn xor_elem(self, _rhs: Self) -> Self {
                unreachable!("no bitwise ops for float elements")
            }

            fn not_elem(self) -> Self {
                unreachable!("no bitwise ops for float elements")
            }

            fn shl_elem(self, _count: u32) -> Self {
                unreachable!("no shifts for float elements")
            }

            fn shr_elem(self, _count: u32) -> Self {
                unreachable!("no shifts for float elements")
            }

            fn to_shift_count(self) -> Option<u32> {
                unreachable!("no shift counts from float elements")
            }

            fn widen(self) -> Self::Accum {
                self as f64
            }
        }

        impl SignedElement for $t {}
        impl FloatElement for $t {}
    };
}

element_signed_int!(
    i8,
    Int8,
    crate::simd::x86::I8x16,
    crate::simd::neon::I8x16,
    crate::simd::neon32::I8x8
);
element_unsigned_int!(
    u8,
    UInt8,
    crate::simd::x86::U8x16,
    crate::simd::neon::U8x16,
    crate::simd::neon32::U8x8
);
element_signed_int!(
    i16,
    Int16,
    crate::simd::x86::I16x8,
    crate::simd::neon::I16x8,
    crate::simd::neon32::I16x4
);
element_unsigned_int!(
    u16,
    UInt16,
    crate::simd::x86::U16x8,
    crate::simd::neon::U16x8,
    crate::simd::neon32::U16x4
);
element_signed_int!(
    i32,
    Int32,
    crate::simd::x86::I32x4,
    crate::simd::neon::I32x4,
    crate::simd::neon32::I32x2
);
element_unsigned_int!(
    u32,
    UInt32,
    crate::simd::x86::U32x4,
    crate::simd::neon::U32x4,
    crate::simd::neon32::U32x2
);
element_signed_int!(
    i64,
    Int64,
    crate::simd::x86::I64x2,
    crate::simd::neon::I64x2,
    crate::simd::scalar::ScalarVec<i64>
);
element_unsigned_int!(
    u64,
    UInt64,
    crate::simd::x86::U64x2,
    crate::simd::neon::U64x2,
    crate::simd::scalar::ScalarVec<u64>
);
element_float!(
    f32,
    Float32,
    32,
    crate::simd::x86::F32x4,
    crate::simd::neon::F32x4,
    crate::simd::neon32::F32x2
);
element_float!(
    f64,
    Float64,
    64,
    crate::simd::x86::F64x2,
    crate::simd::neon::F64x2,
    crate::simd::scalar::ScalarVec<f64>
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_count_validation() {
        assert_eq!(3i8.to_shift_count(), Some(3));
        assert_eq!(7i8.to_shift_count(), Some(7));
        assert_eq!(8i8.to_shift_count(), None);
        assert_eq!((-1i8).to_shift_count(), None);
        assert_eq!(63u64.to_shift_count(), Some(63));
        assert_eq!(64u64.to_shift_count(), None);
    }

    #[test]
    fn test_checked_faults_at_bounds() {
        assert_eq!(i8::MAX.checked_add_elem(1), None);
        assert_eq!(i8::MIN.checked_sub_elem(1), None);
        assert_eq!(i8::MIN.checked_neg_elem(), None);
        assert_eq!(i8::MIN.checked_abs_elem(), None);
        assert_eq!(u8::MAX.checked_add_elem(1), None);
        assert_eq!(0u8.checked_sub_elem(1), None);
    }

    #[test]
    fn test_float_checked_tests_result_only() {
        assert_eq!(f32::MAX.checked_add_elem(f32::MAX), None);
        assert_eq!(1.0f32.checked_add_elem(2.0), Some(3.0));
        assert!(1.0f64.div_checked_elem(0.0).is_err());
        assert_eq!(1.0f64.div_elem(0.0), Ok(f64::INFINITY));
    }

    #[test]
    fn test_integer_division_faults() {
        assert!(1i32.div_elem(0).is_err());
        assert!(1i32.div_checked_elem(0).is_err());
        assert_eq!(
            i32::MIN.div_checked_elem(-1),
            Err(LanewiseError::Overflow)
        );
        // Unchecked division wraps the one overflowing quotient.
        assert_eq!(i32::MIN.div_elem(-1), Ok(i32::MIN));
    }

    #[test]
    fn test_widened_return_conversion() {
        assert_eq!((-5i8).widen(), -5i64);
        assert_eq!(200u8.widen(), 200u64);
        assert_eq!(1.5f32.widen(), 1.5f64);
    }
}
