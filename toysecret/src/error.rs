//! Error types.

/// Key exchange and message encryption errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Curve or point arithmetic failed.
    #[error(transparent)]
    Curve(#[from] toycurve::Error),

    /// A key, message or coordinate needed for the operation is absent.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The token is malformed, expired, or was not produced with this key.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Decrypted plaintext is not valid UTF-8.
    #[error("decrypted message is not valid UTF-8")]
    InvalidUtf8,

    /// Key material of the wrong length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Key text is not valid URL-safe base64.
    #[error("key is not valid url-safe base64")]
    InvalidKeyEncoding,

    /// The key derivation function rejected its output length.
    #[error("key derivation failed")]
    KeyDerivation,

    /// The scalar has no inverse modulo the subgroup order.
    #[error("{scalar} is not invertible modulo {modulus}")]
    NotInvertible {
        /// Scalar to invert.
        scalar: i64,
        /// Order of the subgroup the inverse was taken in.
        modulus: u64,
    },

    /// The operating system's random number generator failed.
    #[error("system entropy source failed")]
    Entropy,
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
