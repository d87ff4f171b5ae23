//! Math error types
//!
//! Failures raised by the checked constructors and the `try_` variants of
//! the degenerate operations.

use std::fmt;

/// Error type for quaternion and vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Slice factory given a length other than 3 or 4
    InvalidLength { len: usize },
    /// Vector (or vector part) with zero norm where a direction is required
    DegenerateVector,
    /// Quaternion with zero norm where a non-zero value is required
    DegenerateQuaternion,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidLength { len } => {
                write!(f, "Invalid component count: expected 3 or 4, got {}", len)
            }
            MathError::DegenerateVector => write!(f, "Degenerate vector: norm is zero"),
            MathError::DegenerateQuaternion => write!(f, "Degenerate quaternion: norm is zero"),
        }
    }
}

impl std::error::Error for MathError {}
