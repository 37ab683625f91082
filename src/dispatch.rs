//! Kernel selection.
//!
//! Pure decision logic: given the call options, the array length and what
//! the operation's vector path supports, pick one of the four kernel
//! variants. Falling back to the scalar side is always safe, so there are
//! no error conditions here.

use log::trace;

use crate::capability::capability;

/// Per-call options, both off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Force the scalar kernel regardless of capability.
    pub disable_simd: bool,
    /// Skip overflow/finiteness checking (the faster kernel variant).
    pub ignore_errors: bool,
}

/// The four kernel variants a call can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KernelChoice {
    Scalar,
    ScalarChecked,
    Simd,
    SimdChecked,
}

/// Selects the kernel variant for one call.
///
/// The SIMD side is chosen only when the operation has a vector path for
/// this shape, the capability probe confirmed the ISA, the element type has
/// real vectors on it (`lanes > 1`), and the array is long enough that at
/// least two full chunks run (`len >= 2 * lanes`); anything shorter is all
/// tail anyway.
pub(crate) fn choose(
    len: usize,
    lanes: usize,
    simd_unchecked: bool,
    simd_checked: bool,
    checkable: bool,
    opts: ApplyOptions,
) -> KernelChoice {
    let checked = checkable && !opts.ignore_errors;
    let simd_supported = if checked { simd_checked } else { simd_unchecked };

    let cap = capability();
    let simd = simd_supported
        && !opts.disable_simd
        && cap.simd_available
        && lanes > 1
        && len >= 2 * lanes;

    trace!(
        "dispatch: len={} lanes={} isa={} simd={} checked={}",
        len,
        lanes,
        cap.isa_tag(),
        simd,
        checked
    );

    match (simd, checked) {
        (true, true) => KernelChoice::SimdChecked,
        (true, false) => KernelChoice::Simd,
        (false, true) => KernelChoice::ScalarChecked,
        (false, false) => KernelChoice::Scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disable_simd_forces_scalar() {
        let opts = ApplyOptions {
            disable_simd: true,
            ignore_errors: true,
        };
        assert_eq!(choose(1024, 16, true, true, true, opts), KernelChoice::Scalar);
    }

    #[test]
    fn test_short_arrays_stay_scalar() {
        let opts = ApplyOptions::default();
        // 31 elements of a 16-lane type: one chunk plus tail, not worth it.
        let got = choose(31, 16, true, true, false, opts);
        assert_eq!(got, KernelChoice::Scalar);
    }

    #[test]
    fn test_checked_variant_selection() {
        let opts = ApplyOptions::default();
        assert_eq!(choose(4, 16, true, true, true, opts), KernelChoice::ScalarChecked);

        let unchecked = ApplyOptions {
            ignore_errors: true,
            ..Default::default()
        };
        assert_eq!(choose(4, 16, true, true, true, unchecked), KernelChoice::Scalar);

        // Ops without a fault policy never pick a checked kernel.
        assert_eq!(choose(4, 16, true, true, false, opts), KernelChoice::Scalar);
    }

    #[test]
    fn test_one_lane_types_stay_scalar() {
        let opts = ApplyOptions::default();
        assert_eq!(choose(1024, 1, true, true, false, opts), KernelChoice::Scalar);
    }
}
