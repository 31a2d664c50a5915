//! Error types.

/// Field arithmetic errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested modulus is not a prime (or is smaller than 2).
    #[error("modulus {0} is not a prime")]
    InvalidPrime(u64),

    /// Operands were taken from two different fields.
    #[error("field mismatch: cannot combine elements of F_{left} and F_{right}")]
    FieldMismatch {
        /// Modulus of the left-hand operand.
        left: u64,
        /// Modulus of the right-hand operand.
        right: u64,
    },

    /// Multiplicative inverse of zero was requested.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
