//! Min/max and sum reduction kernels.
//!
//! Min/max seed an accumulator vector with the first chunk, fold the rest
//! with the lanewise min/max instruction, horizontally reduce, then fold
//! the scalar tail. Sum accumulates into the widened accumulator type; the
//! checked variant tests every step (partial sums invalidate any bound
//! precomputed from the element type alone), and only the unchecked float
//! path is ever vectorized.

use crate::dispatch::{choose, ApplyOptions, KernelChoice};
use crate::element::Element;
use crate::error::Result;
use crate::simd::vec::SimdVec;
use crate::split::aligned_split;

fn use_simd<T: Element>(len: usize, simd_op: bool, opts: ApplyOptions) -> bool {
    let lanes = <T::Vector as SimdVec<T>>::LANES;
    choose(len, lanes, simd_op, simd_op, false, opts) == KernelChoice::Simd
}

pub(crate) fn fold_min<T: Element>(data: &[T], opts: ApplyOptions) -> Option<T> {
    if data.is_empty() {
        return None;
    }

    if use_simd::<T>(data.len(), true, opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(data.len(), lanes);

        // SAFETY: aligned >= 2 * lanes here, so the first chunk exists and
        // every subsequent load stays inside the aligned prefix.
        let mut acc = unsafe { T::Vector::load(data.as_ptr()) };
        let mut i = lanes;
        while i < split.aligned {
            let chunk = unsafe { T::Vector::load(data.as_ptr().add(i)) };
            acc = acc.min_elements(chunk);
            i += lanes;
        }

        let mut best = acc.horizontal_min();
        for &x in &data[split.aligned..] {
            if x < best {
                best = x;
            }
        }
        return Some(best);
    }

    let mut best = data[0];
    for &x in &data[1..] {
        if x < best {
            best = x;
        }
    }
    Some(best)
}

pub(crate) fn fold_max<T: Element>(data: &[T], opts: ApplyOptions) -> Option<T> {
    if data.is_empty() {
        return None;
    }

    if use_simd::<T>(data.len(), true, opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(data.len(), lanes);

        // SAFETY: as in fold_min.
        let mut acc = unsafe { T::Vector::load(data.as_ptr()) };
        let mut i = lanes;
        while i < split.aligned {
            let chunk = unsafe { T::Vector::load(data.as_ptr().add(i)) };
            acc = acc.max_elements(chunk);
            i += lanes;
        }

        let mut best = acc.horizontal_max();
        for &x in &data[split.aligned..] {
            if x > best {
                best = x;
            }
        }
        return Some(best);
    }

    let mut best = data[0];
    for &x in &data[1..] {
        if x > best {
            best = x;
        }
    }
    Some(best)
}

/// Sum of all elements, accumulated in the element type and widened only
/// for the return value.
///
/// Checked summation is always scalar and tests every partial sum against
/// the element type's range (finiteness for floats), so a fault is
/// attributed to the exact element that caused it. The unchecked integer
/// path wraps in the element type; the unchecked float path may vectorize.
pub(crate) fn fold_sum<T: Element>(data: &[T], opts: ApplyOptions) -> Result<T::Accum> {
    let checked = !opts.ignore_errors;

    if checked {
        let mut acc = T::zero();
        for &x in data {
            acc = acc.checked_add_elem(x).ok_or(T::FAULT)?;
        }
        return Ok(acc.widen());
    }

    if T::IS_FLOAT && use_simd::<T>(data.len(), true, opts) {
        let lanes = <T::Vector as SimdVec<T>>::LANES;
        let split = aligned_split(data.len(), lanes);

        // SAFETY: as in fold_min.
        let mut acc = unsafe { T::Vector::load(data.as_ptr()) };
        let mut i = lanes;
        while i < split.aligned {
            let chunk = unsafe { T::Vector::load(data.as_ptr().add(i)) };
            acc = acc.add(chunk);
            i += lanes;
        }

        let mut total = acc.horizontal_add();
        for &x in &data[split.aligned..] {
            total = total.wrapping_add_elem(x);
        }
        return Ok(total.widen());
    }

    let mut acc = T::zero();
    for &x in data {
        acc = acc.wrapping_add_elem(x);
    }
    Ok(acc.widen())
}
