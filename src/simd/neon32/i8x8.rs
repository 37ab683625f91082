//! ARMv7 NEON 8-lane i8 vector.

use std::arch::arm::*;

use crate::simd::vec::SimdVec;

/// 8 packed i8 lanes in a d-register.
#[derive(Copy, Clone, Debug)]
pub struct I8x8(int8x8_t);

impl I8x8 {
    #[inline(always)]
    fn from_mask(m: uint8x8_t) -> Self {
        Self(unsafe { vreinterpret_s8_u8(m) })
    }

    #[inline(always)]
    fn as_mask(self) -> uint8x8_t {
        unsafe { vreinterpret_u8_s8(self.0) }
    }
}

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

impl SimdVec<i8> for I8x8 {
    const LANES: usize = 8;

    #[inline(always)]
    unsafe fn load(ptr: *const i8) -> Self {
        Self(vld1_s8(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i8) {
        vst1_s8(ptr, self.0);
    }

    #[inline(always)]
    fn splat(value: i8) -> Self {
        Self(unsafe { vdup_n_s8(value) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vadd_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsub_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmul_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vceq_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vmvn_u8(vceq_s8(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vclt_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcle_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgt_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcge_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { fold_max_u8(self.as_mask()) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { fold_min_u8(self.as_mask()) == u8::MAX }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmin_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { vmax_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> i8 {
        unsafe {
            let m = vpmin_s8(self.0, self.0);
            let m = vpmin_s8(m, m);
            let m = vpmin_s8(m, m);
            vget_lane_s8::<0>(m)
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> i8 {
        unsafe {
            let m = vpmax_s8(self.0, self.0);
            let m = vpmax_s8(m, m);
            let m = vpmax_s8(m, m);
            vget_lane_s8::<0>(m)
        }
    }

    #[inline(always)]
    fn and_elements(self, rhs: Self) -> Self {
        Self(unsafe { vand_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { vorr_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { veor_s8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { vmvn_s8(self.0) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { vshl_s8(self.0, vdup_n_s8(count as i8)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        // A negative per-lane count shifts right; arithmetic for signed.
        Self(unsafe { vshl_s8(self.0, vdup_n_s8(-(count as i8))) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vadd_s8(self.0, rhs.0);
            let ovf = vand_s8(veor_s8(self.0, r), veor_s8(rhs.0, r));
            fold_max_u8(vclt_s8(ovf, vdup_n_s8(0))) != 0
        }
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        unsafe {
            let r = vsub_s8(self.0, rhs.0);
            let ovf = vand_s8(veor_s8(self.0, rhs.0), veor_s8(self.0, r));
            fold_max_u8(vclt_s8(ovf, vdup_n_s8(0))) != 0
        }
    }

    #[inline(always)]
    fn neg_elements(self) -> Self {
        Self(unsafe { vneg_s8(self.0) })
    }

    #[inline(always)]
    fn abs_elements(self) -> Self {
        Self(unsafe { vabs_s8(self.0) })
    }

    #[inline(always)]
    fn any_equals_min(self) -> bool {
        unsafe { fold_max_u8(vceq_s8(self.0, vdup_n_s8(i8::MIN))) != 0 }
    }
}
