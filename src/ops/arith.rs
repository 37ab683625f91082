//! Arithmetic operations.
//!
//! Checked variants (the default) report `Overflow` when an integer result
//! does not fit the element type and `Arithmetic` when a float result is
//! non-finite. With `ignore_errors` set, integer results wrap and float
//! results may be Inf/NaN. Integer division is the exception: a zero
//! divisor is `Arithmetic` in both modes, and `MIN / -1` wraps only when
//! unchecked.

binary_op_api! {
    /// Elementwise addition.
    add, AddOp, Element
}

binary_op_api! {
    /// Elementwise subtraction.
    sub, SubOp, Element
}

binary_op_api! {
    /// Elementwise multiplication.
    mul, MulOp, Element
}

binary_op_api! {
    /// Elementwise division. Integer division always runs the scalar
    /// kernel; there is no vector divide for integer lanes.
    div, DivOp, Element
}
