//! saltkit-crypto: RSA key pair handling and chunked private-key encryption
//!
//! Pipeline: plaintext → fixed-size chunks → per-chunk private-key RSA block →
//! concatenate → unpadded URL-safe base64
//!
//! Wire format:
//! ```text
//! ciphertext = b64url_nopad( block_0 || block_1 || ... || block_n )
//! block_i    = rsa_private( 0x00 0x01 0xFF.. 0x00 || chunk_i )   (modulus-sized)
//! chunk_i    = at most modulus_bytes - 11 bytes of plaintext, in order
//! ```
//!
//! Chunks carry no position metadata; ordering relies on sequential
//! concatenation alone. Decryption walks modulus-sized blocks with the public
//! key and strips the padding again. Key material travels as PEM
//! (`PRIVATE KEY` = PKCS#8, `PUBLIC KEY` = SPKI).

pub mod chunk;
pub mod cipher;
pub mod error;
pub mod keys;

pub use cipher::{decrypt_with_public, decrypt_with_public_utf8, encrypt_with_private};
pub use error::{CryptoError, CryptoResult};
pub use keys::{
    decode_private_pem, decode_public_pem, encode_private_pem, encode_public_pem,
    load_private_pem, load_public_pem, KeyKind, KeyPair,
};

/// PKCS#1 v1.5 padding overhead per encrypted chunk, in bytes.
pub const PKCS1_OVERHEAD: usize = 11;

/// Modulus size for generated key pairs when the caller has no preference.
pub const DEFAULT_KEY_BITS: usize = 2048;
