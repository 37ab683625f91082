//! ARMv7 NEON 8-lane u8 vector.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 8 packed u8 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct U8x8(uint8x8_t);

#[inline(always)]
unsafe fn fold_max_u8(m: uint8x8_t) -> u8 {
    let m = vpmax_u8(m, m);
    let m = vpmax_u8(m, m);
    let m = vpmax_u8(m, m);
    vget_lane_u8::<0>(m)
}

#[inline(always)]
unsafe fn fold_min_u8(m: uint8x8_t) -> u8 {
    let m = vpmin_u8(m, m);
    let m = vpmin_u8(m, m);
    let m = vpmin_u8(m, m);
    vget_lane_u8::<0>(m)
}

impl SimdVec<u8> for U8x8 {
    const LANES: usize = 8;

    #[inline(always)]
    unsafe fn load(ptr: *const u8) -> Self {
        Self(vld1_u8(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u8) {
        vst1_u8(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: u8) -> Self {
        Self(unsafe { vdup_n_u8(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { vceq_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmvn_u8(vceq_u8(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vclt_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcle_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcgt_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { vcge_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { fold_max_u8(self.0) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { fold_min_u8(self.0) == u8::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmin_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> u8 {
        unsafe { fold_min_u8(self.0) }
    }

    #[inline(always)]
    fn horizontal_max(self) -> u8 {
        unsafe { fold_max_u8(self.0) }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vand_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorr_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veor_u8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { vmvn_u8(self.0) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_u8(self.0, vdup_n_s8(count as i8)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_u8(self.0, vdup_n_s8(-(count as i8))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vadd_u8(self.0, rhs.0);
            fold_max_u8(vclt_u8(r, self.0)) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe { fold_max_u8(vclt_u8(self.0, rhs.0)) != 0 }
    }
}
