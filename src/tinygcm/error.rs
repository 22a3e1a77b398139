use thiserror::Error;

/// Library result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Library error type. Every precondition is checked before any cipher work
/// runs, so a rejection never leaks keystream or a partial tag.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Computed authentication tag did not match the supplied tag. The
    /// ciphertext and/or AAD was modified since it was encrypted, or the
    /// wrong key or nonce was used. The plaintext output buffer holds
    /// unspecified bytes after this error.
    #[error("GCM authentication failed (invalid tag)")]
    AuthFailed,

    /// An input was longer than the 8-bit length framing allows: 255 bytes,
    /// or 239 for plaintext so that the padded ciphertext still fits.
    #[error("input of {len} bytes exceeds the 8-bit length framing")]
    SizeOverflow { len: usize },

    /// Ciphertext must be a whole number of 16-byte blocks.
    #[error("ciphertext length {len} is not a multiple of 16 bytes")]
    BadAlignment { len: usize },

    /// Plaintext/ciphertext and AAD were both empty, leaving nothing to
    /// encrypt and nothing to authenticate.
    #[error("plaintext/ciphertext and AAD both empty")]
    EmptyInput,

    /// The supplied workspace is smaller than the operation requires.
    #[error("workspace of {len} bytes is below the {required} required")]
    WorkspaceTooSmall { len: usize, required: usize },

    /// An output buffer is too small for what the operation must write.
    #[error("output buffer of {len} bytes cannot hold {required} bytes")]
    OutputTooSmall { len: usize, required: usize },
}
