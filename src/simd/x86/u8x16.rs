//! SSE 16-lane u8 vector.
//!
//! There is no unsigned byte compare instruction; the ordered comparisons
//! come out of the unsigned min/max units instead: `a >= b` is
//! `max(a, b) == a`, and the strict forms mask the equal lanes back out.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::vec::SimdVec;

/// 16 packed u8 lanes in a 128-bit register.
#[derive(Copy, Clone, Debug)]
pub struct U8x16(__m128i);

impl SimdVec<u8> for U8x16 {
    const LANES: usize = 16;

    #[inline(always)]
    unsafe fn load(ptr: *const u8) -> Self {
        Self(_mm_loadu_si128(ptr as *const __m128i))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut u8) {
        _mm_storeu_si128(ptr as *mut __m128i, self.0);
    }

    #[inline(always)]
    fn splat(value: u8) -> Self {
        Self(unsafe { _mm_set1_epi8(value as i8) })
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        // Zero-extend each half to 16 bits, multiply, repack the low bytes.
        unsafe {
            let lo = _mm_mullo_epi16(_mm_cvtepu8_epi16(self.0), _mm_cvtepu8_epi16(rhs.0));
            let hi = _mm_mullo_epi16(
                _mm_cvtepu8_epi16(_mm_srli_si128::<8>(self.0)),
                _mm_cvtepu8_epi16(_mm_srli_si128::<8>(rhs.0)),
            );
            let keep = _mm_set1_epi16(0x00FF);
            Self(_mm_packus_epi16(
                _mm_and_si128(lo, keep),
                _mm_and_si128(hi, keep),
            ))
        }
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn ne_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(_mm_cmpeq_epi8(self.0, rhs.0), _mm_set1_epi8(-1)) })
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Self {
        unsafe {
            let le = _mm_cmpeq_epi8(_mm_min_epu8(self.0, rhs.0), self.0);
            let eq = _mm_cmpeq_epi8(self.0, rhs.0);
            Self(_mm_andnot_si128(eq, le))
        }
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi8(_mm_min_epu8(self.0, rhs.0), self.0) })
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Self {
        unsafe {
            let ge = _mm_cmpeq_epi8(_mm_max_epu8(self.0, rhs.0), self.0);
            let eq = _mm_cmpeq_epi8(self.0, rhs.0);
            Self(_mm_andnot_si128(eq, ge))
        }
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi8(_mm_max_epu8(self.0, rhs.0), self.0) })
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
        Self(unsafe { _mm_min_epu8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max_elements(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_epu8(self.0, rhs.0) })
    }

    #[inline(always)]
    fn horizontal_min(self) -> u8 {
        unsafe {
            let mut v = self.0;
            v = _mm_min_epu8(v, _mm_srli_si128::<8>(v));
            v = _mm_min_epu8(v, _mm_srli_si128::<4>(v));
            v = _mm_min_epu8(v, _mm_srli_si128::<2>(v));
            v = _mm_min_epu8(v, _mm_srli_si128::<1>(v));
            _mm_cvtsi128_si32(v) as u8
        }
    }

    #[inline(always)]
    fn horizontal_max(self) -> u8 {
        unsafe {
            let mut v = self.0;
            v = _mm_max_epu8(v, _mm_srli_si128::<8>(v));
            v = _mm_max_epu8(v, _mm_srli_si128::<4>(v));
            v = _mm_max_epu8(v, _mm_srli_si128::<2>(v));
            v = _mm_max_epu8(v, _mm_srli_si128::<1>(v));
            _mm_cvtsi128_si32(v) as u8
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
        unsafe {
            let shifted = _mm_sll_epi16(self.0, _mm_cvtsi32_si128(count as i32));
            let keep = _mm_set1_epi8((0xFFu8 << count) as i8);
            Self(_mm_and_si128(shifted, keep))
        }
    }

    #[inline(always)]
    fn shr_uniform(self, count: u32) -> Self {
        unsafe {
            let shifted = _mm_srl_epi16(self.0, _mm_cvtsi32_si128(count as i32));
            let keep = _mm_set1_epi8((0xFFu8 >> count) as i8);
            Self(_mm_and_si128(shifted, keep))
        }
    }

    #[inline(always)]
    fn add_overflows(self, rhs: Self) -> bool {
        // Unsigned wraparound: the sum came out below either operand.
        self.add(rhs).lt_elements(self).mask_any()
    }

    #[inline(always)]
    fn sub_overflows(self, rhs: Self) -> bool {
        self.lt_elements(rhs).mask_any()
    }
}
