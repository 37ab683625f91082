//! Overflow and arithmetic-error policy.

use lanewise::element::Element;
use lanewise::simd::vec::SimdVec;
use lanewise::{capability, ApplyOptions, LanewiseError};

const CHECKED: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: false,
};
const CHECKED_SCALAR: ApplyOptions = ApplyOptions {
    disable_simd: true,
    ignore_errors: false,
};
const UNCHECKED: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: true,
};

#[test]
fn add_overflow_is_reported_and_wraps_unchecked() {
    let mut data = vec![i8::MAX; 40];
    assert_eq!(
        lanewise::add::array_scalar(&mut data, 1, CHECKED),
        Err(LanewiseError::Overflow)
    );

    let mut data = vec![i8::MAX; 40];
    lanewise::add::array_scalar(&mut data, 1, UNCHECKED).unwrap();
    assert!(data.iter().all(|&x| x == i8::MIN));
}

#[test]
fn unsigned_sub_wraparound_is_overflow() {
    let mut data = vec![3u16; 40];
    assert_eq!(
        lanewise::sub::array_scalar(&mut data, 4, CHECKED),
        Err(LanewiseError::Overflow)
    );

    let mut data = vec![3u16; 40];
    lanewise::sub::array_scalar(&mut data, 4, UNCHECKED).unwrap();
    assert!(data.iter().all(|&x| x == u16::MAX));
}

#[test]
fn mul_by_negative_one_faults_only_on_min() {
    let mut data = vec![-5i8; 40];
    lanewise::mul::array_scalar(&mut data, -1, CHECKED).unwrap();
    assert!(data.iter().all(|&x| x == 5));

    let mut data = vec![-5i8; 40];
    data[20] = i8::MIN;
    assert_eq!(
        lanewise::mul::array_scalar(&mut data, -1, CHECKED),
        Err(LanewiseError::Overflow)
    );
}

#[test]
fn swapped_sub_guard_matches_scalar_semantics() {
    // 10 - x faults exactly when x < 10 - MAX or x > 10 - MIN; for i8 that
    // is x < -117.
    let mut ok = vec![-117i8; 40];
    lanewise::sub::scalar_array(10, &mut ok, CHECKED).unwrap();
    assert!(ok.iter().all(|&x| x == 127));

    let mut bad = vec![-117i8; 40];
    bad[33] = -118;
    assert_eq!(
        lanewise::sub::scalar_array(10, &mut bad, CHECKED),
        Err(LanewiseError::Overflow)
    );
}

#[test]
fn integer_division_faults() {
    let mut data = vec![10i32; 8];
    data[5] = 7;
    let mut divisors = vec![2i32; 8];
    divisors[3] = 0;

    // Zero divisor reports Arithmetic in both modes.
    assert_eq!(
        lanewise::div::array_array(&mut data.clone(), &divisors, CHECKED),
        Err(LanewiseError::Arithmetic)
    );
    assert_eq!(
        lanewise::div::array_array(&mut data.clone(), &divisors, UNCHECKED),
        Err(LanewiseError::Arithmetic)
    );

    // MIN / -1 is Overflow checked, wraps unchecked.
    let mut data = vec![i32::MIN; 4];
    assert_eq!(
        lanewise::div::array_scalar(&mut data, -1, CHECKED),
        Err(LanewiseError::Overflow)
    );
    let mut data = vec![i32::MIN; 4];
    lanewise::div::array_scalar(&mut data, -1, UNCHECKED).unwrap();
    assert!(data.iter().all(|&x| x == i32::MIN));
}

#[test]
fn float_nonfinite_results_fault_checked_only() {
    let mut data = vec![f32::MAX; 40];
    assert_eq!(
        lanewise::mul::array_scalar(&mut data, 2.0, CHECKED),
        Err(LanewiseError::Arithmetic)
    );

    let mut data = vec![f32::MAX; 40];
    lanewise::mul::array_scalar(&mut data, 2.0, UNCHECKED).unwrap();
    assert!(data.iter().all(|&x| x == f32::INFINITY));

    // Division by zero shows up as a non-finite result.
    let mut data = vec![1.0f64; 40];
    assert_eq!(
        lanewise::div::array_scalar(&mut data, 0.0, CHECKED),
        Err(LanewiseError::Arithmetic)
    );
}

#[test]
fn negation_faults_only_on_type_minimum() {
    let mut data = vec![-7i16; 40];
    lanewise::neg::array(&mut data, CHECKED).unwrap();
    assert!(data.iter().all(|&x| x == 7));

    let mut data = vec![-7i16; 40];
    data[11] = i16::MIN;
    assert_eq!(
        lanewise::neg::array(&mut data, CHECKED),
        Err(LanewiseError::Overflow)
    );
    assert_eq!(
        lanewise::abs::array(&mut vec![i16::MIN; 4], CHECKED),
        Err(LanewiseError::Overflow)
    );

    // Unchecked negation of the minimum wraps back to itself.
    let mut data = vec![i16::MIN; 4];
    lanewise::neg::array(&mut data, UNCHECKED).unwrap();
    assert!(data.iter().all(|&x| x == i16::MIN));
}

// The scalar checked kernel commits every element strictly before the
// offender and nothing at or after it.
#[test]
fn scalar_abort_commits_exact_prefix() {
    let mut data: Vec<i32> = vec![1, 2, 3, i32::MAX, 5, 6];
    assert_eq!(
        lanewise::add::array_scalar(&mut data, 1, CHECKED_SCALAR),
        Err(LanewiseError::Overflow)
    );
    assert_eq!(data, [2, 3, 4, i32::MAX, 5, 6]);
}

// The SIMD checked kernel aborts at chunk granularity: the faulting chunk
// is left entirely unwritten, as is everything after it.
#[test]
fn simd_abort_stops_at_chunk_boundary() {
    let lanes = <<i32 as Element>::Vector as SimdVec<i32>>::LANES;
    if !capability().simd_available || lanes < 2 {
        return;
    }

    let len = 4 * lanes;
    let offender = lanes + 1; // second chunk
    let mut data: Vec<i32> = (0..len as i32).collect();
    data[offender] = i32::MAX;

    assert_eq!(
        lanewise::add::array_scalar(&mut data, 1, CHECKED),
        Err(LanewiseError::Overflow)
    );

    // First chunk committed.
    for (i, &x) in data.iter().enumerate().take(lanes) {
        assert_eq!(x, i as i32 + 1, "lane {i}");
    }
    // Faulting chunk and everything after untouched, including lanes of the
    // chunk that would not have overflowed on their own.
    for (i, &x) in data.iter().enumerate().skip(lanes) {
        let expected = if i == offender { i32::MAX } else { i as i32 };
        assert_eq!(x, expected, "lane {i}");
    }
}

#[test]
fn pairwise_checked_add_detects_per_chunk() {
    let mut a: Vec<i8> = vec![100; 40];
    let b: Vec<i8> = vec![27; 40];
    lanewise::add::array_array(&mut a, &b, CHECKED).unwrap();
    assert!(a.iter().all(|&x| x == 127));

    let mut a: Vec<i8> = vec![100; 40];
    let mut b: Vec<i8> = vec![27; 40];
    b[39] = 28; // fault in the tail
    assert_eq!(
        lanewise::add::array_array(&mut a, &b, CHECKED),
        Err(LanewiseError::Overflow)
    );
}
