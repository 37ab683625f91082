//! Scalar/SIMD equivalence over every calling shape.
//!
//! For every operation, element type and a spread of lengths crossing the
//! largest lane-width boundaries, the dispatched path and the forced-scalar
//! path must produce identical output buffers. On builds without SIMD both
//! paths are scalar and the assertions are trivially tight; on SIMD builds
//! they pin the vector kernels to the reference semantics.

use lanewise::ApplyOptions;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Lengths around the 16-lane and 8-lane boundaries plus odd tails.
const LENGTHS: &[usize] = &[0, 1, 2, 3, 7, 15, 16, 17, 31, 32, 33, 63, 64, 65, 100];

const FAST: ApplyOptions = ApplyOptions {
    disable_simd: false,
    ignore_errors: true,
};
const REFERENCE: ApplyOptions = ApplyOptions {
    disable_simd: true,
    ignore_errors: true,
};

macro_rules! binary_equivalence {
    ($name:ident, $t:ty, $op:ident, $fix:expr) => {
        #[test]
        fn $name() {
            let mut rng = StdRng::seed_from_u64(0x1a7e);
            let fix = $fix;
            for &len in LENGTHS {
                let a: Vec<$t> = (0..len).map(|_| rng.random()).collect();
                let b: Vec<$t> = (0..len).map(|_| fix(rng.random())).collect();
                let s_l: $t = rng.random();
                let s_r: $t = fix(rng.random());

                // array OP scalar, in place
                let mut fast = a.clone();
                let mut reference = a.clone();
                lanewise::$op::array_scalar(&mut fast, s_r, FAST).unwrap();
                lanewise::$op::array_scalar(&mut reference, s_r, REFERENCE).unwrap();
                assert_eq!(fast, reference, "{} array_scalar len {len}", stringify!($op));

                // array OP scalar, separate destination
                let mut fast = vec![Default::default(); len];
                lanewise::$op::array_scalar_into(&a, s_r, &mut fast, FAST).unwrap();
                assert_eq!(fast, reference, "{} array_scalar_into len {len}", stringify!($op));

                // scalar OP array, in place
                let mut fast = b.clone();
                let mut reference = b.clone();
                lanewise::$op::scalar_array(s_l, &mut fast, FAST).unwrap();
                lanewise::$op::scalar_array(s_l, &mut reference, REFERENCE).unwrap();
                assert_eq!(fast, reference, "{} scalar_array len {len}", stringify!($op));

                // scalar OP array, separate destination
                let mut fast = vec![Default::default(); len];
                lanewise::$op::scalar_array_into(s_l, &b, &mut fast, FAST).unwrap();
                assert_eq!(fast, reference, "{} scalar_array_into len {len}", stringify!($op));

                // array OP array, in place
                let mut fast = a.clone();
                let mut reference = a.clone();
                lanewise::$op::array_array(&mut fast, &b, FAST).unwrap();
                lanewise::$op::array_array(&mut reference, &b, REFERENCE).unwrap();
                assert_eq!(fast, reference, "{} array_array len {len}", stringify!($op));

                // array OP array, separate destination
                let mut fast = vec![Default::default(); len];
                lanewise::$op::array_array_into(&a, &b, &mut fast, FAST).unwrap();
                assert_eq!(fast, reference, "{} array_array_into len {len}", stringify!($op));
            }
        }
    };
}

macro_rules! unary_equivalence {
    ($name:ident, $t:ty, $op:ident) => {
        #[test]
        fn $name() {
            let mut rng = StdRng::seed_from_u64(0x1a7e);
            for &len in LENGTHS {
                let a: Vec<$t> = (0..len).map(|_| rng.random()).collect();

                let mut fast = a.clone();
                let mut reference = a.clone();
                lanewise::$op::array(&mut fast, FAST).unwrap();
                lanewise::$op::array(&mut reference, REFERENCE).unwrap();
                assert_eq!(fast, reference, "{} array len {len}", stringify!($op));

                let mut fast = vec![Default::default(); len];
                lanewise::$op::array_into(&a, &mut fast, FAST).unwrap();
                assert_eq!(fast, reference, "{} array_into len {len}", stringify!($op));
            }
        }
    };
}

fn identity<T>(x: T) -> T {
    x
}

binary_equivalence!(add_i8, i8, add, identity);
binary_equivalence!(add_u8, u8, add, identity);
binary_equivalence!(add_i16, i16, add, identity);
binary_equivalence!(add_u16, u16, add, identity);
binary_equivalence!(add_i32, i32, add, identity);
binary_equivalence!(add_u32, u32, add, identity);
binary_equivalence!(add_i64, i64, add, identity);
binary_equivalence!(add_u64, u64, add, identity);
binary_equivalence!(add_f32, f32, add, identity);
binary_equivalence!(add_f64, f64, add, identity);

binary_equivalence!(sub_i8, i8, sub, identity);
binary_equivalence!(sub_u16, u16, sub, identity);
binary_equivalence!(sub_i32, i32, sub, identity);
binary_equivalence!(sub_u64, u64, sub, identity);
binary_equivalence!(sub_f32, f32, sub, identity);
binary_equivalence!(sub_f64, f64, sub, identity);

binary_equivalence!(mul_i8, i8, mul, identity);
binary_equivalence!(mul_u8, u8, mul, identity);
binary_equivalence!(mul_i16, i16, mul, identity);
binary_equivalence!(mul_u16, u16, mul, identity);
binary_equivalence!(mul_i32, i32, mul, identity);
binary_equivalence!(mul_u32, u32, mul, identity);
binary_equivalence!(mul_i64, i64, mul, identity);
binary_equivalence!(mul_u64, u64, mul, identity);
binary_equivalence!(mul_f32, f32, mul, identity);
binary_equivalence!(mul_f64, f64, mul, identity);

binary_equivalence!(div_i32, i32, div, |x: i32| if x == 0 { 1 } else { x });
binary_equivalence!(div_u8, u8, div, |x: u8| if x == 0 { 1 } else { x });
binary_equivalence!(div_f32, f32, div, |x: f32| x + 1.0);
binary_equivalence!(div_f64, f64, div, |x: f64| x + 1.0);

binary_equivalence!(and_i8, i8, and, identity);
binary_equivalence!(and_u32, u32, and, identity);
binary_equivalence!(or_u8, u8, or, identity);
binary_equivalence!(or_i64, i64, or, identity);
binary_equivalence!(xor_u16, u16, xor, identity);
binary_equivalence!(xor_u64, u64, xor, identity);

binary_equivalence!(lshift_i8, i8, lshift, |x: i8| x & 7);
binary_equivalence!(lshift_u8, u8, lshift, |x: u8| x & 7);
binary_equivalence!(lshift_i16, i16, lshift, |x: i16| x & 15);
binary_equivalence!(lshift_u32, u32, lshift, |x: u32| x & 31);
binary_equivalence!(lshift_i64, i64, lshift, |x: i64| x & 63);
binary_equivalence!(rshift_i8, i8, rshift, |x: i8| x & 7);
binary_equivalence!(rshift_u8, u8, rshift, |x: u8| x & 7);
binary_equivalence!(rshift_i16, i16, rshift, |x: i16| x & 15);
binary_equivalence!(rshift_u16, u16, rshift, |x: u16| x & 15);
binary_equivalence!(rshift_i32, i32, rshift, |x: i32| x & 31);
binary_equivalence!(rshift_u32, u32, rshift, |x: u32| x & 31);
binary_equivalence!(rshift_i64, i64, rshift, |x: i64| x & 63);
binary_equivalence!(rshift_u64, u64, rshift, |x: u64| x & 63);

unary_equivalence!(neg_i8, i8, neg);
unary_equivalence!(neg_i16, i16, neg);
unary_equivalence!(neg_i32, i32, neg);
unary_equivalence!(neg_i64, i64, neg);
unary_equivalence!(neg_f32, f32, neg);
unary_equivalence!(neg_f64, f64, neg);

unary_equivalence!(abs_i8, i8, abs);
unary_equivalence!(abs_i32, i32, abs);
unary_equivalence!(abs_i64, i64, abs);
unary_equivalence!(abs_f32, f32, abs);
unary_equivalence!(abs_f64, f64, abs);

unary_equivalence!(invert_i8, i8, invert);
unary_equivalence!(invert_u8, u8, invert);
unary_equivalence!(invert_u32, u32, invert);
unary_equivalence!(invert_i64, i64, invert);

// The checked kernels must make the same accept/reject decision on both
// paths, and produce identical data whenever they accept.
macro_rules! checked_decision_equivalence {
    ($name:ident, $t:ty, $op:ident) => {
        #[test]
        fn $name() {
            let mut rng = StdRng::seed_from_u64(0xfeed);
            let checked_fast = ApplyOptions::default();
            let checked_ref = ApplyOptions {
                disable_simd: true,
                ..Default::default()
            };
            for &len in LENGTHS {
                for narrow in [false, true] {
                    let sample = |rng: &mut StdRng| -> $t {
                        if narrow {
                            rng.random_range(-16..16) as $t
                        } else {
                            rng.random()
                        }
                    };
                    let a: Vec<$t> = (0..len).map(|_| sample(&mut rng)).collect();
                    let s: $t = sample(&mut rng);

                    let mut fast = a.clone();
                    let mut reference = a.clone();
                    let fast_res = lanewise::$op::array_scalar(&mut fast, s, checked_fast);
                    let ref_res = lanewise::$op::array_scalar(&mut reference, s, checked_ref);
                    assert_eq!(
                        fast_res, ref_res,
                        "{} checked decision len {len} s {s}",
                        stringify!($op)
                    );
                    if fast_res.is_ok() {
                        assert_eq!(fast, reference);
                    }

                    let mut fast = a.clone();
                    let mut reference = a.clone();
                    let fast_res = lanewise::$op::scalar_array(s, &mut fast, checked_fast);
                    let ref_res = lanewise::$op::scalar_array(s, &mut reference, checked_ref);
                    assert_eq!(
                        fast_res, ref_res,
                        "{} checked swapped decision len {len} s {s}",
                        stringify!($op)
                    );
                    if fast_res.is_ok() {
                        assert_eq!(fast, reference);
                    }
                }
            }
        }
    };
}

checked_decision_equivalence!(checked_add_i8, i8, add);
checked_decision_equivalence!(checked_add_i32, i32, add);
checked_decision_equivalence!(checked_sub_i8, i8, sub);
checked_decision_equivalence!(checked_sub_i64, i64, sub);
checked_decision_equivalence!(checked_mul_i8, i8, mul);
checked_decision_equivalence!(checked_mul_i16, i16, mul);

// In place and separate destination agree for non-faulting inputs.
#[test]
fn in_place_matches_separate_destination() {
    let mut rng = StdRng::seed_from_u64(7);
    for &len in LENGTHS {
        let a: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();

        let mut in_place = a.clone();
        lanewise::add::array_scalar(&mut in_place, 17, ApplyOptions::default()).unwrap();

        let mut separate = vec![0i32; len];
        lanewise::add::array_scalar_into(&a, 17, &mut separate, ApplyOptions::default()).unwrap();

        assert_eq!(in_place, separate, "len {len}");
    }
}
