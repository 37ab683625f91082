//! Min/max and sum reductions.

use crate::dispatch::ApplyOptions;
use crate::element::Element;
use crate::error::Result;
use crate::kernel::fold;

/// Smallest element, or `None` for an empty slice.
///
/// Float NaN handling follows the underlying min instruction of the active
/// ISA and is unspecified when the input contains NaNs.
pub fn min<T: Element>(data: &[T], opts: ApplyOptions) -> Option<T> {
    fold::fold_min(data, opts)
}

/// Largest element, or `None` for an empty slice.
///
/// The NaN caveat of [`min`] applies.
pub fn max<T: Element>(data: &[T], opts: ApplyOptions) -> Option<T> {
    fold::fold_max(data, opts)
}

/// Sum of all elements. Accumulation runs in the element type; only the
/// returned value is widened (i64 for signed integers, u64 for unsigned
/// ones, f64 for floats). An empty slice sums to zero.
///
/// Checked summation (the default) tests every partial sum against the
/// element type — a partial sum leaving the integer range is `Overflow`, a
/// non-finite float partial sum is `Arithmetic` — and always runs the
/// scalar kernel so the fault is attributed to the exact element that
/// caused it. With `ignore_errors` integer sums wrap in the element type,
/// and f32/f64 may take the vectorized horizontal-add path, whose rounding
/// may differ from the scalar path's.
pub fn sum<T: Element>(data: &[T], opts: ApplyOptions) -> Result<T::Accum> {
    fold::fold_sum(data, opts)
}
