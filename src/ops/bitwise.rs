//! Bitwise logic and shifts, integer element types only.
//!
//! These operations carry no overflow policy, so `ignore_errors` has no
//! effect on them. Shift counts must lie in `0..bit_width`; any other
//! count (negative included) is rejected with `Arithmetic` before a single
//! element is written, in every calling shape and both kernel families.
//!
//! Right shift is arithmetic for signed element types and logical for
//! unsigned ones, matching the scalar `>>` operator. Only the uniform-count
//! shapes (`array_scalar` forms) vectorize; per-lane variable counts run
//! the scalar kernel.

binary_op_api! {
    /// Elementwise bitwise AND.
    and, AndOp, IntElement
}

binary_op_api! {
    /// Elementwise bitwise OR.
    or, OrOp, IntElement
}

binary_op_api! {
    /// Elementwise bitwise XOR.
    xor, XorOp, IntElement
}

binary_op_api! {
    /// Elementwise left shift.
    lshift, LshiftOp, IntElement
}

binary_op_api! {
    /// Elementwise right shift (arithmetic for signed types, logical for
    /// unsigned ones).
    rshift, RshiftOp, IntElement
}
