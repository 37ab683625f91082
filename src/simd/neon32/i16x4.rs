//! ARMv7 NEON 4-lane i16 vector.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 4 packed i16 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct I16x4(int16x4_t);

impl I16x4 {
    #[inline(always)]
    fn from_mask(m: uint16x4_t) -> Self {
        Self(unsafe { vreinterpret_s16_u16(m) })
    }

    #[inline(always)]
    fn as_mask(self) -> uint16x4_t {
        unsafe { vreinterpret_u16_s16(self.0) }
    }
}

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

impl SimdVec<i16> for I16x4 {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn load(ptr: *const i16) -> Self {
        Self(vld1_s16(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i16) {
        vst1_s16(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: i16) -> Self {
        Self(unsafe { vdup_n_s16(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceq_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vmvn_u16(vceq_s16(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vclt_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcle_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgt_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcge_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { fold_max_u16(self.as_mask()) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { fold_min_u16(self.as_mask()) == u16::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmin_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> i16 {
        unsafe {
            let m = vpmin_s16(self.0, self.0);
            let m = vpmin_s16(m, m);
            vget_lane_s16::<0>(m)
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> i16 {
        unsafe {
            let m = vpmax_s16(self.0, self.0);
            let m = vpmax_s16(m, m);
            vget_lane_s16::<0>(m)
        }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vand_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorr_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veor_s16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { vmvn_s16(self.0) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_s16(self.0, vdup_n_s16(count as i16)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_s16(self.0, vdup_n_s16(-(count as i16))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vadd_s16(self.0, rhs.0);
            let ovf = vand_s16(veor_s16(self.0, r), veor_s16(rhs.0, r));
            fold_max_u16(vclt_s16(ovf, vdup_n_s16(0))) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vsub_s16(self.0, rhs.0);
            let ovf = vand_s16(veor_s16(self.0, rhs.0), veor_s16(self.0, r));
            fold_max_u16(vclt_s16(ovf, vdup_n_s16(0))) != 0
        }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vneg_s16(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabs_s16(self.0) })
    }

    #[inline(always)]
    fn any_equals_min(self) -> bool {
        unsafe { fold_max_u16(vceq_s16(self.0, vdup_n_s16(i16::MIN))) != 0 }
    }
}
