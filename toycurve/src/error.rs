//! Error types.

use crate::Curve;

/// Curve construction and point arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Underlying field arithmetic failed, e.g. the modulus is not prime or
    /// elements of two different fields were combined.
    #[error(transparent)]
    Field(#[from] toyfield::Error),

    /// The coordinates do not satisfy the curve equation.
    #[error("({x},{y}) is not a point of {curve}")]
    InvalidPoint {
        /// Rejected x-coordinate.
        x: u64,
        /// Rejected y-coordinate.
        y: u64,
        /// Curve the point was checked against.
        curve: Curve,
    },

    /// Points (or a point and a curve) belonging to different curves were
    /// combined.
    #[error("curve mismatch: {left} and {right}")]
    CurveMismatch {
        /// Curve of the left-hand operand.
        left: Curve,
        /// Curve of the right-hand operand.
        right: Curve,
    },

    /// There is no prime at this position of the prime table.
    #[error("no prime at index {0}")]
    UnknownPrime(usize),
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
