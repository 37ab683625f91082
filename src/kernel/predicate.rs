//! Any/all/position predicate kernels.
//!
//! Each driver compares chunks against a broadcast needle (or the paired
//! array), collapses the lane mask with a horizontal any/all test, and
//! short-circuits the moment the answer is decided: `any` returns on the
//! first satisfying chunk or tail element, `all` on the first violating
//! one. `find_index` rescans the hitting chunk scalarly to report the first
//! matching position.

use crate::dispatch::{choose, ApplyOptions, KernelChoice};
use crate::element::Element;
use crate::kernel::MaskOp;
use crate::simd::vec::SimdVec;
use crate::split::aligned_split;

fn use_simd<T: Element>(len: usize, opts: ApplyOptions) -> bool {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    choose(len, lanes, true, true, false, opts) == KernelChoice::Simd
}

pub(crate) fn any_broadcast<T: Element, C: MaskOp<T>>(
    data: &[T],
    needle: T,
    opts: ApplyOptions,
) -> bool {
    if use_simd::<T>(data.len(), opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(data.len(), lanes);
        let n = T::Vector::splat(needle);

        let mut i = 0;
        while i < split.aligned {
            // SAFETY: i + lanes <= aligned <= data.len().
            let a = unsafe { T::Vector::load(data.as_ptr().add(i)) };
            if C::vec_apply(a, n).mask_any() {
                return true;
            }
            i += lanes;
        }
        return data[split.aligned..].iter().any(|&a| C::apply(a, needle));
    }

    data.iter().any(|&a| C::apply(a, needle))
}

pub(crate) fn all_broadcast<T: Element, C: MaskOp<T>>(
    data: &[T],
    needle: T,
    opts: ApplyOptions,
) -> bool {
    if use_simd::<T>(data.len(), opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(data.len(), lanes);
        let n = T::Vector::splat(needle);

        let mut i = 0;
        while i < split.aligned {
            // SAFETY: i + lanes <= aligned <= data.len().
            let a = unsafe { T::Vector::load(data.as_ptr().add(i)) };
            if !C::vec_apply(a, n).mask_all() {
                return false;
            }
            i += lanes;
        }
        return data[split.aligned..].iter().all(|&a| C::apply(a, needle));
    }

    data.iter().all(|&a| C::apply(a, needle))
}

pub(crate) fn find_index_broadcast<T: Element, C: MaskOp<T>>(
    data: &[T],
    needle: T,
    opts: ApplyOptions,
) -> Option<usize> {
    if use_simd::<T>(data.len(), opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(data.len(), lanes);
        let n = T::Vector::splat(needle);

        let mut i = 0;
        while i < split.aligned {
            // SAFETY: i + lanes <= aligned <= data.len().
            let a = unsafe { T::Vector::load(data.as_ptr().add(i)) };
            if C::vec_apply(a, n).mask_any() {
                // The chunk contains the first hit; locate it exactly.
                return data[i..i + lanes]
                    .iter()
                    .position(|&a| C::apply(a, needle))
                    .map(|j| i + j);
            }
            i += lanes;
        }
        return data[split.aligned..]
            .iter()
            .position(|&a| C::apply(a, needle))
            .map(|j| split.aligned + j);
    }

    data.iter().position(|&a| C::apply(a, needle))
}

pub(crate) fn any_pairwise<T: Element, C: MaskOp<T>>(
    lhs: &[T],
    rhs: &[T],
    opts: ApplyOptions,
) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());

    if use_simd::<T>(lhs.len(), opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(lhs.len(), lanes);

        let mut i = 0;
        while i < split.aligned {
            // SAFETY: i + lanes <= aligned <= both lengths.
            let a = unsafe { T::Vector::load(lhs.as_ptr().add(i)) };
            let b = unsafe { T::Vector::load(rhs.as_ptr().add(i)) };
            if C::vec_apply(a, b).mask_any() {
                return true;
            }
            i += lanes;
        }
        return lhs[split.aligned..]
            .iter()
            .zip(&rhs[split.aligned..])
            .any(|(&a, &b)| C::apply(a, b));
    }

    lhs.iter().zip(rhs).any(|(&a, &b)| C::apply(a, b))
}

pub(crate) fn all_pairwise<T: Element, C: MaskOp<T>>(
    lhs: &[T],
    rhs: &[T],
    opts: ApplyOptions,
) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());

    if use_simd::<T>(lhs.len(), opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(lhs.len(), lanes);

        let mut i = 0;
        while i < split.aligned {
            // SAFETY: i + lanes <= aligned <= both lengths.
            let a = unsafe { T::Vector::load(lhs.as_ptr().add(i)) };
            let b = unsafe { T::Vector::load(rhs.as_ptr().add(i)) };
            if !C::vec_apply(a, b).mask_all() {
                return false;
            }
            i += lanes;
        }
        return lhs[split.aligned..]
            .iter()
            .zip(&rhs[split.aligned..])
            .all(|(&a, &b)| C::apply(a, b));
    }

    lhs.iter().zip(rhs).all(|(&a, &b)| C::apply(a, b))
}

pub(crate) fn find_index_pairwise<T: Element, C: MaskOp<T>>(
    lhs: &[T],
    rhs: &[T],
    opts: ApplyOptions,
) -> Option<usize> {
    debug_assert_eq!(lhs.len(), rhs.len());

    if use_simd::<T>(lhs.len(), opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(lhs.len(), lanes);

        let mut i = 0;
        while i < split.aligned {
            // SAFETY: i + lanes <= aligned <= both lengths.
            let a = unsafe { T::Vector::load(lhs.as_ptr().add(i)) };
            let b = unsafe { T::Vector::load(rhs.as_ptr().add(i)) };
            if C::vec_apply(a, b).mask_any() {
                return lhs[i..i + lanes]
                    .iter()
                    .zip(&rhs[i..i + lanes])
                    .position(|(&a, &b)| C::apply(a, b))
                    .map(|j| i + j);
            }
            i += lanes;
        }
        return lhs[split.aligned..]
            .iter()
            .zip(&rhs[split.aligned..])
            .position(|(&a, &b)| C::apply(a, b))
            .map(|j| split.aligned + j);
    }

    lhs.iter()
        .zip(rhs)
        .position(|(&a, &b)| C::apply(a, b))
}
