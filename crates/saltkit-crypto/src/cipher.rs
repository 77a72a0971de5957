//! Chunked encrypt-with-private-key / decrypt-with-public-key
//!
//! Each plaintext chunk becomes one modulus-sized block:
//! ```text
//! EB = 00 || 01 || FF.. (>= 8 bytes) || 00 || chunk
//! block = EB ^ d mod n        (encrypt, private exponent)
//! EB    = block ^ e mod n     (decrypt, public exponent)
//! ```
//! This is the signature-style PKCS#1 v1.5 type-1 construction, so anyone
//! holding the public key can read the payload; the private key only proves
//! who produced it. Blocks are concatenated in chunk order and the whole
//! buffer travels as unpadded URL-safe base64.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::chunk;
use crate::error::{CryptoError, CryptoResult};

/// Encrypt `plaintext` with the private key.
///
/// Splits the input into chunks of `modulus_bytes - 11`, transforms each chunk
/// independently, and base64-encodes the concatenated blocks. Empty input
/// yields an empty string.
pub fn encrypt_with_private(
    key: &RsaPrivateKey,
    plaintext: impl AsRef<[u8]>,
) -> CryptoResult<String> {
    let plaintext = plaintext.as_ref();
    let modulus_bytes = key.size();
    let part_len = chunk::encrypt_part_len(modulus_bytes)?;

    let mut buffer = Vec::with_capacity(plaintext.len().div_ceil(part_len) * modulus_bytes);
    for (index, part) in chunk::split(plaintext, part_len).into_iter().enumerate() {
        let block = private_encrypt_block(key, part, modulus_bytes)
            .map_err(|reason| CryptoError::Encrypt { index, reason })?;
        buffer.extend_from_slice(&block);
    }

    Ok(URL_SAFE_NO_PAD.encode(&buffer))
}

/// Decrypt the output of [`encrypt_with_private`] with the matching public
/// key, returning the plaintext bytes.
///
/// A decoded ciphertext whose length is not an exact multiple of the modulus
/// size is rejected with [`CryptoError::TruncatedCiphertext`] rather than
/// decrypting a trailing partial block.
pub fn decrypt_with_public(key: &RsaPublicKey, encoded: &str) -> CryptoResult<Vec<u8>> {
    let raw = URL_SAFE_NO_PAD.decode(encoded)?;
    let part_len = chunk::decrypt_part_len(key.size());
    if !raw.len().is_multiple_of(part_len) {
        return Err(CryptoError::TruncatedCiphertext {
            len: raw.len(),
            part_len,
        });
    }

    let mut plaintext = Vec::new();
    for (index, block) in chunk::split(&raw, part_len).into_iter().enumerate() {
        let part = public_decrypt_block(key, block, part_len)
            .map_err(|reason| CryptoError::Decrypt { index, reason })?;
        plaintext.extend_from_slice(&part);
    }

    Ok(plaintext)
}

/// [`decrypt_with_public`] for textual payloads.
pub fn decrypt_with_public_utf8(key: &RsaPublicKey, encoded: &str) -> CryptoResult<String> {
    Ok(String::from_utf8(decrypt_with_public(key, encoded)?)?)
}

fn private_encrypt_block(
    key: &RsaPrivateKey,
    part: &[u8],
    modulus_bytes: usize,
) -> Result<Vec<u8>, String> {
    let padded = pad_type1(part, modulus_bytes).ok_or_else(|| {
        format!(
            "chunk of {} bytes exceeds the {}-byte payload limit",
            part.len(),
            modulus_bytes - crate::PKCS1_OVERHEAD
        )
    })?;
    let m = BigUint::from_bytes_be(&padded);
    let c = m.modpow(key.d(), key.n());
    Ok(to_fixed_be(&c, modulus_bytes))
}

fn public_decrypt_block(
    key: &RsaPublicKey,
    block: &[u8],
    modulus_bytes: usize,
) -> Result<Vec<u8>, String> {
    let c = BigUint::from_bytes_be(block);
    let m = c.modpow(key.e(), key.n());
    let eb = to_fixed_be(&m, modulus_bytes);
    let part = unpad_type1(&eb)
        .ok_or_else(|| "invalid block structure: wrong key or corrupted ciphertext".to_string())?;
    Ok(part.to_vec())
}

/// `00 01 FF.. 00 || data`, padded to exactly `k` bytes. None if the data does
/// not leave room for the minimum 8 bytes of FF fill.
fn pad_type1(data: &[u8], k: usize) -> Option<Vec<u8>> {
    if k < crate::PKCS1_OVERHEAD || data.len() > k - crate::PKCS1_OVERHEAD {
        return None;
    }
    let mut eb = Vec::with_capacity(k);
    eb.push(0x00);
    eb.push(0x01);
    eb.resize(k - data.len() - 1, 0xff);
    eb.push(0x00);
    eb.extend_from_slice(data);
    Some(eb)
}

fn unpad_type1(eb: &[u8]) -> Option<&[u8]> {
    if eb.len() < crate::PKCS1_OVERHEAD || eb[0] != 0x00 || eb[1] != 0x01 {
        return None;
    }
    let mut i = 2;
    while i < eb.len() && eb[i] == 0xff {
        i += 1;
    }
    // minimum 8 bytes of fill, then the 00 separator
    if i < 10 || i == eb.len() || eb[i] != 0x00 {
        return None;
    }
    Some(&eb[i + 1..])
}

/// Big-endian encoding left-padded with zeros to exactly `k` bytes.
fn to_fixed_be(value: &BigUint, k: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; k];
    out[k - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;
    use proptest::prelude::*;
    use std::sync::OnceLock;

    /// Keygen is the slow part; share one pair per modulus size across tests.
    fn small_pair() -> &'static KeyPair {
        static PAIR: OnceLock<KeyPair> = OnceLock::new();
        PAIR.get_or_init(|| KeyPair::generate(512).unwrap())
    }

    fn full_pair() -> &'static KeyPair {
        static PAIR: OnceLock<KeyPair> = OnceLock::new();
        PAIR.get_or_init(|| KeyPair::generate(2048).unwrap())
    }

    #[test]
    fn hello_roundtrip_2048() {
        let pair = full_pair();
        let encoded = encrypt_with_private(&pair.private, "hello").unwrap();

        // transport encoding must be unpadded URL-safe base64
        assert!(!encoded.contains('='));
        let raw = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
        assert_eq!(raw.len(), 256, "one modulus-sized block");

        let decrypted = decrypt_with_public_utf8(&pair.public, &encoded).unwrap();
        assert_eq!(decrypted, "hello");
    }

    #[test]
    fn empty_plaintext_roundtrips_to_empty() {
        let pair = small_pair();
        let encoded = encrypt_with_private(&pair.private, "").unwrap();
        assert_eq!(encoded, "");

        let decrypted = decrypt_with_public(&pair.public, &encoded).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn multi_chunk_roundtrip() {
        let pair = small_pair();
        // 512-bit modulus: 64-byte blocks, 53 bytes of payload each
        let plaintext: Vec<u8> = (0u8..=255).cycle().take(200).collect();

        let encoded = encrypt_with_private(&pair.private, &plaintext).unwrap();
        let raw = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
        assert_eq!(raw.len(), 200usize.div_ceil(53) * 64);

        let decrypted = decrypt_with_public(&pair.public, &encoded).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn plaintext_with_leading_and_trailing_zeros() {
        let pair = small_pair();
        let plaintext = [0u8, 0, 1, 2, 3, 0, 0];

        let encoded = encrypt_with_private(&pair.private, plaintext).unwrap();
        let decrypted = decrypt_with_public(&pair.public, &encoded).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let pair = small_pair();
        let result = decrypt_with_public(&pair.public, "not~base64!");
        assert!(matches!(result, Err(CryptoError::Base64(_))));
    }

    #[test]
    fn truncated_ciphertext_is_rejected() {
        let pair = small_pair();
        let encoded = encrypt_with_private(&pair.private, "hello").unwrap();
        let mut raw = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
        raw.pop();

        let result = decrypt_with_public(&pair.public, &URL_SAFE_NO_PAD.encode(&raw));
        assert!(matches!(
            result,
            Err(CryptoError::TruncatedCiphertext { len: 63, part_len: 64 })
        ));
    }

    #[test]
    fn tampered_block_fails_decryption() {
        let pair = small_pair();
        let encoded = encrypt_with_private(&pair.private, "secret data").unwrap();
        let mut raw = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
        raw[0] ^= 0xff;

        let result = decrypt_with_public(&pair.public, &URL_SAFE_NO_PAD.encode(&raw));
        assert!(matches!(result, Err(CryptoError::Decrypt { index: 0, .. })));
    }

    #[test]
    fn mismatched_keys_never_recover_plaintext() {
        let pair_a = small_pair();
        let pair_b = KeyPair::generate(512).unwrap();

        let encoded = encrypt_with_private(&pair_a.private, "hello").unwrap();
        match decrypt_with_public(&pair_b.public, &encoded) {
            Err(_) => {}
            Ok(bytes) => assert_ne!(bytes, b"hello"),
        }
    }

    #[test]
    fn non_utf8_payload_errors_on_text_decrypt() {
        let pair = small_pair();
        let encoded = encrypt_with_private(&pair.private, [0xffu8, 0xfe, 0xfd]).unwrap();
        let result = decrypt_with_public_utf8(&pair.public, &encoded);
        assert!(matches!(result, Err(CryptoError::InvalidUtf8(_))));
    }

    #[test]
    fn pad_unpad_roundtrip() {
        let eb = pad_type1(b"abc", 64).unwrap();
        assert_eq!(eb.len(), 64);
        assert_eq!(&eb[..2], &[0x00, 0x01]);
        assert_eq!(unpad_type1(&eb).unwrap(), b"abc");
    }

    #[test]
    fn pad_rejects_oversized_data() {
        assert!(pad_type1(&[0u8; 54], 64).is_none());
        assert!(pad_type1(&[0u8; 53], 64).is_some());
    }

    #[test]
    fn unpad_rejects_malformed_blocks() {
        assert!(unpad_type1(&[0u8; 64]).is_none()); // no 0x01 marker
        let mut eb = pad_type1(b"abc", 64).unwrap();
        eb[1] = 0x02;
        assert!(unpad_type1(&eb).is_none());
    }

    proptest! {
        /// decrypt(pub, encrypt(priv, p)) == p for arbitrary payloads
        #[test]
        fn roundtrip(data in proptest::collection::vec(any::<u8>(), 0..=300)) {
            let pair = small_pair();
            let encoded = encrypt_with_private(&pair.private, &data).unwrap();
            let decrypted = decrypt_with_public(&pair.public, &encoded).unwrap();
            prop_assert_eq!(decrypted, data);
        }
    }
}
