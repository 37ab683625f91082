//! NEON 4-lane f32 vector.
//!
//! The finiteness test multiplies the chunk by zero (finite lanes collapse
//! to ±0.0, Inf/NaN lanes to NaN) and checks the compare-with-zero mask in
//! one horizontal minimum.

use std::arch::aarch64::*;

use crate::simd::vec::SimdVec;

/// 4 packed f32 lanes in a q-register.
#[derive(Copy, Clone, Debug)]
pub struct F32x4(float32x4_t);

impl F32x4 {
    #[inline(always)]
    fn from_mask(m: uint32x4_t) -> Self {
        Self(unsafe { vreinterpretq_f32_u32(m) })
    }

    #[inline(always)]
    fn as_mask(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_f32(self.0) }
    }
}

impl SimdVec<f32> for F32x4 {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self(vld1q_f32(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self(unsafe { vdupq_n_f32(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceqq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vmvnq_u32(vceqq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcltq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcleq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgtq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgeq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { vmaxvq_u32(self.as_mask()) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { vminvq_u32(self.as_mask()) == u32::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vminq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> f32 {
        unsafe { vminvq_f32(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> f32 {
        unsafe { vmaxvq_f32(self.0) }
    }

    #[inline(always)]
    fn horizontal_add(self) -> f32 {
        unsafe { vaddvq_f32(self.0) }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vnegq_f32(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabsq_f32(self.0) })
    }

    #[inline(always)]
    fn any_nonfinite(self) -> bool {
        unsafe {
            let z = vmulq_f32(self.0, vdupq_n_f32(0.0));
            vminvq_u32(vceqq_f32(z, vdupq_n_f32(0.0))) == 0
        }
    }
}
