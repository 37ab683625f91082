//! ARMv7 NEON 2-lane u32 vector.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 2 packed u32 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct U32x2(uint32x2_t);

#[inline(always)]
unsafe fn fold_max_u32(m: uint32x2_t) -> u32 {
    vget_lane_u32::<0>(vpmax_u32(m, m))
}

#[inline(always)]
unsafe fn fold_min_u32(m: uint32x2_t) -> u32 {
    vget_lane_u32::<0>(vpmin_u32(m, m))
}

impl SimdVec<u32> for U32x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const u32) -> Self {
        Self(vld1_u32(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u32) {
        vst1_u32(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self(unsafe { vdup_n_u32(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { vceq_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmvn_u32(vceq_u32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vclt_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcle_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcgt_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcge_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { fold_max_u32(self.0) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { fold_min_u32(self.0) == u32::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmin_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> u32 {
        unsafe { fold_min_u32(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> u32 {
        unsafe { fold_max_u32(self.0) }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vand_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorr_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veor_u32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { vmvn_u32(self.0) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_u32(self.0, vdup_n_s32(count as i32)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_u32(self.0, vdup_n_s32(-(count as i32))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vadd_u32(self.0, rhs.0);
            fold_max_u32(vclt_u32(r, self.0)) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe { fold_max_u32(vclt_u32(self.0, rhs.0)) != 0 }
    }
}
