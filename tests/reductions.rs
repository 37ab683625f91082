//! Predicate and fold reductions: any/all hits in the aligned region and
//! the tail, position search, min/max, and the sum overflow policy.

use lanewise::{ApplyOptions, CompareOp, LanewiseError};

const DEFAULT: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: false,
};
const SCALAR: ApplyOptions = ApplyOptions {
    disable_simd: true,
    ignore_errors: false,
};
const UNCHECKED: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: true,
};

#[test]
fn any_finds_needle_wherever_it_lands() {
    for opts in [DEFAULT, SCALAR] {
        // Hit inside the aligned region.
        let mut data = vec![0i32; 40];
        data[3] = 5;
        assert!(lanewise::any(CompareOp::Eq, &data, 5, opts));

        // Hit in the tail.
        let mut data = vec![0i32; 40];
        data[38] = 5;
        assert!(lanewise::any(CompareOp::Eq, &data, 5, opts));

        // Miss.
        let data = vec![0i32; 40];
        assert!(!lanewise::any(CompareOp::Eq, &data, 5, opts));
    }
}

#[test]
fn all_six_comparison_kinds() {
    for opts in [DEFAULT, SCALAR] {
        let data: Vec<u8> = (10..50).collect();
        assert!(lanewise::all(CompareOp::Ge, &data, 10, opts));
        assert!(lanewise::all(CompareOp::Lt, &data, 50, opts));
        assert!(lanewise::all(CompareOp::Ne, &data, 200, opts));
        assert!(!lanewise::all(CompareOp::Gt, &data, 10, opts));
        assert!(lanewise::any(CompareOp::Le, &data, 10, opts));
        assert!(!lanewise::any(CompareOp::Eq, &data, 9, opts));
    }
}

#[test]
fn predicates_on_empty_input() {
    let data: Vec<i64> = Vec::new();
    assert!(!lanewise::any(CompareOp::Eq, &data, 0, DEFAULT));
    assert!(lanewise::all(CompareOp::Eq, &data, 0, DEFAULT));
    assert_eq!(lanewise::find_index(CompareOp::Eq, &data, 0, DEFAULT), None);
}

#[test]
fn find_index_reports_first_match() {
    for opts in [DEFAULT, SCALAR] {
        let mut data = vec![0i16; 40];
        data[17] = 9;
        data[30] = 9;
        assert_eq!(lanewise::find_index(CompareOp::Eq, &data, 9, opts), Some(17));
        assert_eq!(lanewise::find_index(CompareOp::Gt, &data, 100, opts), None);

        // First match inside the first chunk beats a later one.
        let mut data = vec![5.0f32; 40];
        data[2] = -1.0;
        data[3] = -1.0;
        assert_eq!(lanewise::find_index(CompareOp::Lt, &data, 0.0, opts), Some(2));
    }
}

#[test]
fn pairwise_predicates() {
    for opts in [DEFAULT, SCALAR] {
        let a: Vec<i32> = (0..40).collect();
        let mut b: Vec<i32> = (0..40).map(|x| x + 1).collect();
        assert!(lanewise::all_pairwise(CompareOp::Lt, &a, &b, opts));
        assert!(!lanewise::any_pairwise(CompareOp::Eq, &a, &b, opts));

        b[23] = 23;
        assert!(lanewise::any_pairwise(CompareOp::Eq, &a, &b, opts));
        assert_eq!(
            lanewise::find_index_pairwise(CompareOp::Eq, &a, &b, opts),
            Some(23)
        );
    }
}

#[test]
fn min_max_across_boundaries() {
    for opts in [DEFAULT, SCALAR] {
        for len in [1usize, 2, 15, 16, 17, 33, 64, 100] {
            let data: Vec<i8> = (0..len).map(|i| ((i * 37 + 11) % 251) as u8 as i8).collect();
            let expected_min = data.iter().copied().min().unwrap();
            let expected_max = data.iter().copied().max().unwrap();
            assert_eq!(lanewise::min(&data, opts), Some(expected_min), "len {len}");
            assert_eq!(lanewise::max(&data, opts), Some(expected_max), "len {len}");
        }

        // Extremes in the tail are not lost.
        let mut data = vec![0i64; 39];
        data[38] = i64::MIN;
        data[37] = i64::MAX;
        assert_eq!(lanewise::min(&data, opts), Some(i64::MIN));
        assert_eq!(lanewise::max(&data, opts), Some(i64::MAX));
    }

    let empty: Vec<f64> = Vec::new();
    assert_eq!(lanewise::min(&empty, DEFAULT), None);
    assert_eq!(lanewise::max(&empty, DEFAULT), None);
}

#[test]
fn float_min_max() {
    for opts in [DEFAULT, SCALAR] {
        let data: Vec<f32> = (0..40).map(|i| (i as f32 - 20.5) * 1.5).collect();
        assert_eq!(lanewise::min(&data, opts), Some(-30.75));
        assert_eq!(lanewise::max(&data, opts), Some(27.75));
    }
}

#[test]
fn checked_sum_faults_when_partial_sum_leaves_the_element_range() {
    // The canonical example: 127 + 1 does not fit i8.
    assert_eq!(
        lanewise::sum(&[127i8, 1], DEFAULT),
        Err(LanewiseError::Overflow)
    );
    assert_eq!(lanewise::sum(&[127i8, 1], UNCHECKED), Ok(-128i64));

    assert_eq!(
        lanewise::sum(&[200u8, 100], DEFAULT),
        Err(LanewiseError::Overflow)
    );
    assert_eq!(lanewise::sum(&[200u8, 100], UNCHECKED), Ok(44u64));

    // A sum that dips over and would come back still faults: the check is
    // per step.
    assert_eq!(
        lanewise::sum(&[100i8, 100, -100], DEFAULT),
        Err(LanewiseError::Overflow)
    );
}

#[test]
fn sum_returns_the_widened_type() {
    let data: Vec<i16> = (1..=10).collect();
    assert_eq!(lanewise::sum(&data, DEFAULT), Ok(55i64));

    let data: Vec<u32> = vec![7; 12];
    assert_eq!(lanewise::sum(&data, DEFAULT), Ok(84u64));

    let empty: Vec<i8> = Vec::new();
    assert_eq!(lanewise::sum(&empty, DEFAULT), Ok(0i64));
}

#[test]
fn float_sum_paths_agree_on_exact_data() {
    // Sums of small integers in f32 are exact, so the vectorized unchecked
    // path and the scalar path must agree to the bit.
    let data: Vec<f32> = (0..64).map(|i| i as f32).collect();
    let expected = (63 * 64 / 2) as f64;
    assert_eq!(lanewise::sum(&data, UNCHECKED), Ok(expected));
    assert_eq!(lanewise::sum(&data, DEFAULT), Ok(expected));
    assert_eq!(
        lanewise::sum(
            &data,
            ApplyOptions {
                disable_simd: true,
                ignore_errors: true
            }
        ),
        Ok(expected)
    );
}

#[test]
fn checked_float_sum_faults_on_nonfinite_partial() {
    let data = vec![f32::MAX, f32::MAX, -f32::MAX];
    assert_eq!(lanewise::sum(&data, DEFAULT), Err(LanewiseError::Arithmetic));
    // Unchecked lets the infinity flow through.
    assert_eq!(lanewise::sum(&data, UNCHECKED), Ok(f32::INFINITY as f64));
}
