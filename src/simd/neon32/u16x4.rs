//! ARMv7 NEON 4-lane u16 vector.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 4 packed u16 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct U16x4(uint16x4_t);

#[inline(always)]
unsafe fn fold_max_u16(m: uint16x4_t) -> u16 {
    let m = vpmax_u16(m, m);
    let m = vpmax_u16(m, m);
    vget_lane_u16::<0>(m)
}

#[inline(always)]
unsafe fn fold_min_u16(m: uint16x4_t) -> u16 {
    let m = vpmin_u16(m, m);
    let m = vpmin_u16(m, m);
    vget_lane_u16::<0>(m)
}

impl SimdVec<u16> for U16x4 {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const u16) -> Self {
        Self(vld1_u16(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u16) {
        vst1_u16(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: u16) -> Self {
        Self(unsafe { vdup_n_u16(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { vceq_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmvn_u16(vceq_u16(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vclt_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcle_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcgt_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcge_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { fold_max_u16(self.0) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { fold_min_u16(self.0) == u16::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmin_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> u16 {
        unsafe { fold_min_u16(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> u16 {
        unsafe { fold_max_u16(self.0) }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vand_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorr_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veor_u16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { vmvn_u16(self.0) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_u16(self.0, vdup_n_s16(count as i16)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_u16(self.0, vdup_n_s16(-(count as i16))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vadd_u16(self.0, rhs.0);
            fold_max_u16(vclt_u16(r, self.0)) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe { fold_max_u16(vclt_u16(self.0, rhs.0)) != 0 }
    }
}
