//! Unary operations.
//!
//! Negation and absolute value fault (checked) only on the signed minimum,
//! which has no positive counterpart; unchecked they wrap back to the
//! minimum. Bitwise inversion is total and carries no fault policy.

unary_op_api! {
    /// Elementwise negation, signed integers and floats.
    neg, NegOp, SignedElement
}

unary_op_api! {
    /// Elementwise absolute value, signed integers and floats.
    abs, AbsOp, SignedElement
}

unary_op_api! {
    /// Elementwise bitwise NOT, integer types.
    invert, InvertOp, IntElement
}
