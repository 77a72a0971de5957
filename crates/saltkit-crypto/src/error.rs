use std::path::PathBuf;

use thiserror::Error;

use crate::keys::KeyKind;

pub type CryptoResult<T> = Result<T, CryptoError>;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),

    #[error("failed to encode {kind} key as PEM")]
    Marshal {
        kind: KeyKind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to decode PEM as a {expected} key")]
    Decode {
        expected: KeyKind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("expected a {expected} key, found a {found} key")]
    TypeMismatch { expected: KeyKind, found: KeyKind },

    #[error("key modulus of {modulus_bytes} bytes is too small for chunked encryption")]
    KeyTooSmall { modulus_bytes: usize },

    #[error("failed to encrypt chunk {index}: {reason}")]
    Encrypt { index: usize, reason: String },

    #[error("failed to decrypt chunk {index}: {reason}")]
    Decrypt { index: usize, reason: String },

    #[error("ciphertext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("ciphertext length {len} is not a multiple of the {part_len}-byte block size")]
    TruncatedCiphertext { len: usize, part_len: usize },

    #[error("decrypted payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write {kind} key PEM: {source}")]
    Write {
        kind: KeyKind,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
