//! ARMv7 NEON 2-lane i32 vector.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 2 packed i32 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct I32x2(int32x2_t);

impl I32x2 {
    #[inline(always)]
    fn from_mask(m: uint32x2_t) -> Self {
        Self(unsafe { vreinterpret_s32_u32(m) })
    }

    #[inline(always)]
    fn as_mask(self) -> uint32x2_t {
        unsafe { vreinterpret_u32_s32(self.0) }
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

impl SimdVec<i32> for I32x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const i32) -> Self {
        Self(vld1_s32(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i32) {
        vst1_s32(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self(unsafe { vdup_n_s32(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vmvn_u32(vceq_s32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vclt_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcle_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgt_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcge_s32(self.0, rhs.0) })
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
        Self(unsafe { vmin_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> i32 {
        unsafe { vget_lane_s32::<0>(vpmin_s32(self.0, self.0)) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> i32 {
        unsafe { vget_lane_s32::<0>(vpmax_s32(self.0, self.0)) }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vand_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorr_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veor_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { vmvn_s32(self.0) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_s32(self.0, vdup_n_s32(count as i32)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_s32(self.0, vdup_n_s32(-(count as i32))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vadd_s32(self.0, rhs.0);
            let ovf = vand_s32(veor_s32(self.0, r), veor_s32(rhs.0, r));
            fold_max_u32(vclt_s32(ovf, vdup_n_s32(0))) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vsub_s32(self.0, rhs.0);
            let ovf = vand_s32(veor_s32(self.0, rhs.0), veor_s32(self.0, r));
            fold_max_u32(vclt_s32(ovf, vdup_n_s32(0))) != 0
        }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vneg_s32(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabs_s32(self.0) })
    }

    #[inline(always)]
    fn any_equals_min(self) -> bool {
        unsafe { fold_max_u32(vceq_s32(self.0, vdup_n_s32(i32::MIN))) != 0 }
    }
}
