//! SSE4.1 8-lane u16 vector.
//!
//! Ordered unsigned comparisons use the min/max-then-equality trick, as for
//! the other unsigned widths.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::vec::SimdVec;

/// 8 packed u16 lanes in a 128-bit register.
#[derive(Copy, Clone, Debug)]
pub struct U16x8(__m128i);

impl SimdVec<u16> for U16x8 {
    const LANES: usize = 8;

    #[inline(always)]
    unsafe fn load(ptr: *const u16) -> Self {
        Self(_mm_loadu_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u16) {
        _mm_storeu_si128(ptr as *mut __m128i, self.0);
    }

    #[inline(always)]
    fn splat(value: u16) -> Self {
        Self(unsafe { _mm_set1_epi16(value as i16) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mullo_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(_mm_cmpeq_epi16(self.0, rhs.0), _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        unsafe {
            let le = _mm_cmpeq_epi16(_mm_min_epu16(self.0, rhs.0), self.0);
            let eq = _mm_cmpeq_epi16(self.0, rhs.0);
            Self(_mm_andnot_si128(eq, le))
        }
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi16(_mm_min_epu16(self.0, rhs.0), self.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        unsafe {
            let ge = _mm_cmpeq_epi16(_mm_max_epu16(self.0, rhs.0), self.0);
            let eq = _mm_cmpeq_epi16(self.0, rhs.0);
            Self(_mm_andnot_si128(eq, ge))
        }
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi16(_mm_max_epu16(self.0, rhs.0), self.0) })
    }

    #[inline(always)]
    fn mask_any(self) -> bool {
        unsafe { _mm_movemask_epi8(self.0) != 0 }
    }

    #[inline(always)]
    fn mask_all(self) -> bool {
        unsafe { _mm_movemask_epi8(self.0) == 0xFFFF }
    }

    #[inline(always)]
    fn min_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_epu16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_epu16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> u16 {
        unsafe {
            let mut v = self.0;
            v = _mm_min_epu16(v, _mm_srli_si128::<8>(v));
            v = _mm_min_epu16(v, _mm_srli_si128::<4>(v));
            v = _mm_min_epu16(v, _mm_srli_si128::<2>(v));
            _mm_extract_epi16::<0>(v) as u16
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> u16 {
        unsafe {
            let mut v = self.0;
            v = _mm_max_epu16(v, _mm_srli_si128::<8>(v));
            v = _mm_max_epu16(v, _mm_srli_si128::<4>(v));
            v = _mm_max_epu16(v, _mm_srli_si128::<2>(v));
            _mm_extract_epi16::<0>(v) as u16
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
        Self(unsafe { _mm_sll_epi16(self.0, _mm_cvtsi32_si128(count as i32)) })
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        Self(unsafe { _mm_srl_epi16(self.0, _mm_cvtsi32_si128(count as i32)) })
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

    #[test]
    fn test_unsigned_compares() {
        let data: [u16; 8] = [0, 1, 1000, 32768, 40000, 65534, 65535, 500];
        let a = unsafe { U16x8::load(data.as_ptr()) };
        let b = U16x8::splat(32768);
        let mut ge = [0u16; 8];
        let mut lt = [0u16; 8];
        unsafe {
            a.ge_elements(b).store(ge.as_mut_ptr());
            a.lt_elements(b).store(lt.as_mut_ptr());
        }
        for (i, &x) in data.iter().enumerate() {
            assert_eq!(ge[i] == u16::MAX, x >= 32768, "lane {i}");
            assert_eq!(lt[i] == u16::MAX, x < 32768, "lane {i}");
        }
    }

    #[test]
    fn test_wraparound_predicates() {
        assert!(U16x8::splat(u16::MAX).add_overflows(U16x8::splat(1)));
        assert!(U16x8::splat(0).sub_overflows(U16x8::splat(1)));
        assert!(!U16x8::splat(5).sub_overflows(U16x8::splat(5)));
    }
}
