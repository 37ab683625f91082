//! Error types for lanewise operations.
//!
//! Kernels report failures through a small closed enum rather than panicking,
//! so callers can distinguish integer overflow from floating point range
//! faults and recover (the amount of the destination already written before
//! the fault is part of each kernel's documented contract).

use std::fmt;

/// Errors a checked kernel can report.
///
/// Predicate reductions (`any`, `all`, `find_index`) never fail; a miss is a
/// normal `false` / `None` return, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanewiseError {
    /// An integer operation's true mathematical result would not fit in the
    /// element type.
    Overflow,
    /// A floating point operation produced a non-finite value, an integer
    /// division had a zero divisor, or a shift count was outside
    /// `0..bit_width`.
    Arithmetic,
}

impl fmt::Display for LanewiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanewiseError::Overflow => {
                write!(f, "integer overflow: result does not fit the element type")
            }
            LanewiseError::Arithmetic => {
                write!(f, "arithmetic error: non-finite result, zero divisor or bad shift count")
            }
        }
    }
}

impl std::error::Error for LanewiseError {}

/// Result type alias for lanewise operations.
pub type Result<T> = std::result::Result<T, LanewiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_display() {
        let display = format!("{}", LanewiseError::Overflow);
        assert!(display.contains("integer overflow"));
    }

    #[test]
    fn test_arithmetic_display() {
        let display = format!("{}", LanewiseError::Arithmetic);
        assert!(display.contains("arithmetic error"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = LanewiseError::Overflow;

        // Should implement Error trait
        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
