//! Shift semantics: arithmetic sign extension, count validation, and the
//! involution properties of the unary bit operations.

use lanewise::{ApplyOptions, LanewiseError};

const DEFAULT: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: false,
};
const SCALAR: ApplyOptions = ApplyOptions {
    disable_simd: true,
    ignore_errors: false,
};

#[test]
fn arithmetic_right_shift_sign_extends() {
    for opts in [DEFAULT, SCALAR] {
        let mut data = vec![-128i8; 40];
        lanewise::rshift::array_scalar(&mut data, 1, opts).unwrap();
        assert!(data.iter().all(|&x| x == -64));

        let mut data = vec![-128i8; 40];
        lanewise::rshift::array_scalar(&mut data, 0, opts).unwrap();
        assert!(data.iter().all(|&x| x == -128));

        let mut data = vec![-1i8; 40];
        lanewise::rshift::array_scalar(&mut data, 7, opts).unwrap();
        assert!(data.iter().all(|&x| x == -1));
    }
}

#[test]
fn unsigned_right_shift_is_logical() {
    for opts in [DEFAULT, SCALAR] {
        let mut data = vec![0x80u8; 40];
        lanewise::rshift::array_scalar(&mut data, 1, opts).unwrap();
        assert!(data.iter().all(|&x| x == 0x40));

        let mut data = vec![u8::MAX; 40];
        lanewise::rshift::array_scalar(&mut data, 7, opts).unwrap();
        assert!(data.iter().all(|&x| x == 1));
    }
}

#[test]
fn left_shift_drops_high_bits() {
    for opts in [DEFAULT, SCALAR] {
        let mut data = vec![0x41i8; 40];
        lanewise::lshift::array_scalar(&mut data, 1, opts).unwrap();
        assert!(data.iter().all(|&x| x == -126));
    }
}

#[test]
fn out_of_range_counts_are_rejected_before_any_write() {
    let original: Vec<i8> = (0..40).map(|x| x as i8).collect();

    // Scalar count too large.
    let mut data = original.clone();
    assert_eq!(
        lanewise::lshift::array_scalar(&mut data, 8, DEFAULT),
        Err(LanewiseError::Arithmetic)
    );
    assert_eq!(data, original);

    // Negative scalar count.
    let mut data = original.clone();
    assert_eq!(
        lanewise::rshift::array_scalar(&mut data, -1, DEFAULT),
        Err(LanewiseError::Arithmetic)
    );
    assert_eq!(data, original);

    // One bad count in an array of counts: prescanned, nothing written.
    let mut data = original.clone();
    let mut counts = vec![1i8; 40];
    counts[25] = 9;
    assert_eq!(
        lanewise::lshift::array_array(&mut data, &counts, DEFAULT),
        Err(LanewiseError::Arithmetic)
    );
    assert_eq!(data, original);

    // ignore_errors does not waive count validation.
    let mut data = original.clone();
    let unchecked = ApplyOptions {
        ignore_errors: true,
        ..Default::default()
    };
    assert_eq!(
        lanewise::lshift::array_scalar(&mut data, 8, unchecked),
        Err(LanewiseError::Arithmetic)
    );
    assert_eq!(data, original);
}

#[test]
fn variable_count_shapes_shift_per_element() {
    let mut data = vec![1u16; 16];
    let counts: Vec<u16> = (0..16).collect();
    lanewise::lshift::array_array(&mut data, &counts, DEFAULT).unwrap();
    for (i, &x) in data.iter().enumerate() {
        assert_eq!(x, 1u16 << i, "count {i}");
    }

    // scalar << array shape
    let mut counts: Vec<u8> = (0..8).collect();
    lanewise::lshift::scalar_array(3, &mut counts, DEFAULT).unwrap();
    for (i, &x) in counts.iter().enumerate() {
        assert_eq!(x, 3u8.wrapping_shl(i as u32), "count {i}");
    }
}

#[test]
fn invert_is_an_involution() {
    let mut data: Vec<u8> = (0..=255).collect();
    let original = data.clone();
    lanewise::invert::array(&mut data, DEFAULT).unwrap();
    assert_ne!(data, original);
    lanewise::invert::array(&mut data, DEFAULT).unwrap();
    assert_eq!(data, original);
}

#[test]
fn negation_is_an_involution_away_from_min() {
    let mut data: Vec<i8> = (i8::MIN + 1..=i8::MAX).collect();
    let original = data.clone();
    lanewise::neg::array(&mut data, DEFAULT).unwrap();
    lanewise::neg::array(&mut data, DEFAULT).unwrap();
    assert_eq!(data, original);
}
