//! ARMv7 NEON 2-lane f32 vector.
//!
//! ARMv7 NEON has no float divide instruction (only reciprocal estimates,
//! which are not bit-exact), so division extracts the two lanes and divides
//! scalarly; everything else stays in the register.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 2 packed f32 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct F32x2(float32x2_t);

impl F32x2 {
    #[inline(always)]
    fn from_mask(m: uint32x2_t) -> Self {
        Self(unsafe { vreinterpret_f32_u32(m) })
    }

    #[inline(always)]
    fn as_mask(self) -> uint32x2_t {
        unsafe { vreinterpret_u32_f32(self.0) }
    }

    #[inline(always)]
    fn lanes(self) -> [f32; 2] {
        unsafe { std::mem::transmute(self.0) }
    }
}

#[inline(always)]
unsafe fn fold_max_u32(m: uint32x2_t) -> u32 {
    vget_lane_u32::<0>(vpmax_u32(m, m))
}

#[inline(always)]
unsafe fn fold_min_u32(m: uint32x2_t) -> u32 {
    vget_lane_u32::<0>(vpmin_u32(m, m))
}

impl SimdVec<f32> for F32x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self(vld1_f32(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        vst1_f32(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self(unsafe { vdup_n_f32(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        let a = self.lanes();
        let b = rhs.lanes();
        let out = [a[0] / b[0], a[1] / b[1]];
        Self(unsafe { std::mem::transmute::<[f32; 2], float32x2_t>(out) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vmvn_u32(vceq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vclt_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcle_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgt_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcge_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { fold_max_u32(self.as_mask()) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { fold_min_u32(self.as_mask()) == u32::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmin_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> f32 {
        unsafe { vget_lane_f32::<0>(vpmin_f32(self.0, self.0)) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> f32 {
        unsafe { vget_lane_f32::<0>(vpmax_f32(self.0, self.0)) }
    }

    #[inline(always)]
    fn horizontal_add(self) -> f32 {
        unsafe { vget_lane_f32::<0>(vpadd_f32(self.0, self.0)) }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vneg_f32(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabs_f32(self.0) })
    }

    #[inline(always)]
    fn any_nonfinite(self) -> bool {
        unsafe {
            let z = vmul_f32(self.0, vdup_n_f32(0.0));
            fold_min_u32(vceq_f32(z, vdup_n_f32(0.0))) == 0
        }
    }
}
