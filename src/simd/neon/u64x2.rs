//! NEON 2-lane u64 vector.

use std::arch::aarch64::*;

use crate::simd::vec::SimdVec;

/// 2 packed u64 lanes in a q-register.
#[derive(Copy, Clone, Debug)]
pub struct U64x2(uint64x2_t);

impl U64x2 {
    #[inline(always)]
    fn lanes(self) -> [u64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }

    #[inline(always)]
    fn mask_bits(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_u64(self.0) }
    }
}

impl SimdVec<u64> for U64x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const u64) -> Self {
        Self(vld1q_u64(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u64) {
        vst1q_u64(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self(unsafe { vdupq_n_u64(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let a = self.lanes();
        let b = rhs.lanes();
        let out = [a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])];
        Self(unsafe { std::mem::transmute::<[u64; 2], uint64x2_t>(out) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { vceqq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        unsafe {
            let eq = vreinterpretq_u32_u64(vceqq_u64(self.0, rhs.0));
            Self(vreinterpretq_u64_u32(vmvnq_u32(eq)))
        }
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcltq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcleq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcgtq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcgeq_u64(self.0, rhs.0) })
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
            let take_self = vcltq_u64(self.0, rhs.0);
            Self(vbslq_u64(take_self, self.0, rhs.0))
        }
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        unsafe {
            let take_self = vcgtq_u64(self.0, rhs.0);
            Self(vbslq_u64(take_self, self.0, rhs.0))
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> u64 {
        let [a, b] = self.lanes();
        if a < b {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> u64 {
        let [a, b] = self.lanes();
        if a > b {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        unsafe { Self(vreinterpretq_u64_u32(vmvnq_u32(self.mask_bits()))) }
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshlq_u64(self.0, vdupq_n_s64(count as i64)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshlq_u64(self.0, vdupq_n_s64(-(count as i64))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vaddq_u64(self.0, rhs.0);
            vmaxvq_u32(vreinterpretq_u32_u64(vcltq_u64(r, self.0))) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(vcltq_u64(self.0, rhs.0))) != 0 }
    }
}
