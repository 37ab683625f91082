//! SSE4.1 2-lane u64 vector.
//!
//! Ordered unsigned comparison biases both operands by the sign bit and
//! reuses the emulated signed 64-bit compare.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::vec::SimdVec;
use crate::simd::x86::{cmpgt_epi64, mullo_epi64};

/// 2 packed u64 lanes in a 128-bit register.
#[derive(Copy, Clone, Debug)]
pub struct U64x2(__m128i);

/// Unsigned 64-bit `a > b` via sign-bit bias.
///
/// # Safety
///
/// Requires SSE2.
#[inline(always)]
unsafe fn cmpgt_epu64(a: __m128i, b: __m128i) -> __m128i {
    let bias = _mm_set1_epi64x(i64::MIN);
    cmpgt_epi64(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
}

impl U64x2 {
    #[inline(always)]
    fn lanes(self) -> [u64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }
}

impl SimdVec<u64> for U64x2 {
    const LANES: usize = 2;

    #[inline(always)]
    unsafe fn load(ptr: *const u64) -> Self {
        Self(_mm_loadu_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u64) {
        _mm_storeu_si128(ptr as *mut __m128i, self.0);
    }

    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self(unsafe { _mm_set1_epi64x(value as i64) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { mullo_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(_mm_cmpeq_epi64(self.0, rhs.0), _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        Self(unsafe { cmpgt_epu64(rhs.0, self.0) })
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(cmpgt_epu64(self.0, rhs.0), _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        Self(unsafe { cmpgt_epu64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(cmpgt_epu64(rhs.0, self.0), _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { _mm_movemask_pd(_mm_castsi128_pd(self.0)) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { _mm_movemask_pd(_mm_castsi128_pd(self.0)) == 0b11 }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        unsafe {
            let take_rhs = cmpgt_epu64(self.0, rhs.0);
            Self(_mm_blendv_epi8(self.0, rhs.0, take_rhs))
        }
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        unsafe {
            let take_rhs = cmpgt_epu64(rhs.0, self.0);
            Self(_mm_blendv_epi8(self.0, rhs.0, take_rhs))
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
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn or_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn xor_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }

    #[inline(always)]
    fn not_elements(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn shl_uniform(self, count: u32) -> Self {
        Self(unsafe { _mm_sll_epi64(self.0, _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { _mm_srl_epi64(self.0, _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        self.add(rhs).lt_elements(self).mask_any()
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        self.lt_elements(rhs).mask_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: u64, b: u64) -> U64x2 {
        let data = [a, b];
        unsafe { U64x2::load(data.as_ptr()) }
    }

    #[test]
    fn test_biased_compare_across_sign_bit() {
        let big = 0x8000_0000_0000_0001u64;
        let mut gt = [0u64; 2];
        unsafe { pair(big, 1).gt_elements(pair(1, big)).store(gt.as_mut_ptr()) };
        assert_eq!(gt, [u64::MAX, 0]);
    }

    #[test]
    fn test_emulated_minmax() {
        let v = pair(u64::MAX, 3).min_elements(pair(0, 4));
        assert_eq!(v.lanes(), [0, 3]);
        let v = pair(u64::MAX, 3).max_elements(pair(0, 4));
        assert_eq!(v.lanes(), [u64::MAX, 4]);
    }

    #[test]
    fn test_wraparound_predicates() {
        assert!(pair(u64::MAX, 0).add_overflows(U64x2::splat(1)));
        assert!(pair(0, 10).sub_overflows(U64x2::splat(1)));
        assert!(!pair(1, 10).sub_overflows(U64x2::splat(1)));
    }
}
