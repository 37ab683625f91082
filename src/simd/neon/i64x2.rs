//! NEON 2-lane i64 vector.
//!
//! The 64-bit lanes have full compares but no multiply, min/max or
//! horizontal folds; multiply goes through lane extraction and min/max
//! through compare-and-select.

use std::arch::aarch64::*;

use crate::simd::vec::SimdVec;

/// 2 packed i64 lanes in a q-register.
#[derive(Copy, Clone, Debug)]
pub struct I64x2(int64x2_t);

impl I64x2 {
    #[inline(always)]
    fn from_mask(m: uint64x2_t) -> Self {
        Self(unsafe { vreinterpretq_s64_u64(m) })
    }

    #[inline(always)]
    fn lanes(self) -> [i64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }

    #[inline(always)]
    fn mask_bits(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_s64(self.0) }
    }
}

#[inline(always)]
unsafe fn any_u64(m: uint64x2_t) -> bool {
    vmaxvq_u32(vreinterpretq_u32_u64(m)) != 0
}

impl SimdVec<i64> for I64x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const i64) -> Self {
        Self(vld1q_s64(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i64) {
        vst1q_s64(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: i64) -> Self {
        Self(unsafe { vdupq_n_s64(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let a = self.lanes();
        let b = rhs.lanes();
        let out = [a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])];
        Self(unsafe { std::mem::transmute::<[i64; 2], int64x2_t>(out) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceqq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        unsafe {
            let eq = vreinterpretq_u32_u64(vceqq_s64(self.0, rhs.0));
            Self(vreinterpretq_s64_u32(vmvnq_u32(eq)))
        }
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcltq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcleq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgtq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgeq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { vmaxvq_u32(self.mask_bits()) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { vminvq_u32(self.mask_bits()) == u32::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        unsafe {
            let take_self = vcltq_s64(self.0, rhs.0);
            Self(vbslq_s64(take_self, self.0, rhs.0))
        }
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        unsafe {
            let take_self = vcgtq_s64(self.0, rhs.0);
            Self(vbslq_s64(take_self, self.0, rhs.0))
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> i64 {
        let [a, b] = self.lanes();
        if a < b {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> i64 {
        let [a, b] = self.lanes();
        if a > b {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vandq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veorq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        unsafe {
            let bits = vreinterpretq_u32_s64(self.0);
            Self(vreinterpretq_s64_u32(vmvnq_u32(bits)))
        }
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(count as i64)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(-(count as i64))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vaddq_s64(self.0, rhs.0);
            let ovf = vandq_s64(veorq_s64(self.0, r), veorq_s64(rhs.0, r));
            any_u64(vcltzq_s64(ovf))
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vsubq_s64(self.0, rhs.0);
            let ovf = vandq_s64(veorq_s64(self.0, rhs.0), veorq_s64(self.0, r));
            any_u64(vcltzq_s64(ovf))
        }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vnegq_s64(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabsq_s64(self.0) })
    }

    #[inline(always)]
    fn any_equals_min(self) -> bool {
        unsafe { any_u64(vceqq_s64(self.0, vdupq_n_s64(i64::MIN))) }
    }
}
