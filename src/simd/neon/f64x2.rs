//! NEON 2-lane f64 vector.

use std::arch::aarch64::*;

use crate::simd::vec::SimdVec;

/// 2 packed f64 lanes in a q-register.
#[derive(Copy, Clone, Debug)]
pub struct F64x2(float64x2_t);

impl F64x2 {
    #[inline(always)]
    fn from_mask(m: uint64x2_t) -> Self {
        Self(unsafe { vreinterpretq_f64_u64(m) })
    }

    #[inline(always)]
    fn mask_bits(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_f64(self.0) }
    }

    #[inline(always)]
    fn lanes(self) -> [f64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }
}

impl SimdVec<f64> for F64x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        Self(vld1q_f64(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        vst1q_f64(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self(unsafe { vdupq_n_f64(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceqq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        unsafe {
            let eq = vreinterpretq_u32_u64(vceqq_f64(self.0, rhs.0));
            Self(vreinterpretq_f64_u32(vmvnq_u32(eq)))
        }
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcltq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcleq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgtq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgeq_f64(self.0, rhs.0) })
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
        Self(unsafe { vminq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> f64 {
        let [a, b] = self.lanes();
        if a < b {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> f64 {
        let [a, b] = self.lanes();
        if a > b {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn horizontal_add(self) -> f64 {
        unsafe { vaddvq_f64(self.0) }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vnegq_f64(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabsq_f64(self.0) })
    }

    #[inline(always)]
    fn any_nonfinite(self) -> bool {
        unsafe {
            let z = vmulq_f64(self.0, vdupq_n_f64(0.0));
            vminvq_u32(vreinterpretq_u32_u64(vceqq_f64(z, vdupq_n_f64(0.0)))) == 0
        }
    }
}
