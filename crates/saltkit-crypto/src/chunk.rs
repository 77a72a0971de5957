//! Fixed-size chunking bounded by the key modulus
//!
//! Encryption chunks leave room for the 11-byte PKCS#1 v1.5 padding;
//! decryption chunks are exactly modulus-sized because every encrypted block
//! comes out of the modular exponentiation at full width. Chunks are produced
//! in input order and reassembled by concatenation alone.

use crate::error::{CryptoError, CryptoResult};
use crate::PKCS1_OVERHEAD;

/// Maximum plaintext bytes per encrypted block for a modulus of
/// `modulus_bytes` bytes.
///
/// Fails with [`CryptoError::KeyTooSmall`] when the padding overhead leaves no
/// room for payload at all.
pub fn encrypt_part_len(modulus_bytes: usize) -> CryptoResult<usize> {
    if modulus_bytes <= PKCS1_OVERHEAD {
        return Err(CryptoError::KeyTooSmall { modulus_bytes });
    }
    Ok(modulus_bytes - PKCS1_OVERHEAD)
}

/// Ciphertext bytes per block: exactly the modulus size.
pub fn decrypt_part_len(modulus_bytes: usize) -> usize {
    modulus_bytes
}

/// Split `data` into ordered chunks of at most `part_len` bytes.
///
/// The final chunk may be shorter; empty input yields no chunks.
/// `part_len` must be non-zero.
pub fn split(data: &[u8], part_len: usize) -> Vec<&[u8]> {
    if data.is_empty() {
        return vec![];
    }
    data.chunks(part_len).collect()
}
