//! PIN-keyed envelope encryption.
//!
//! Seals plaintext bytes under a key derived from a PIN string using
//! AES-256-GCM. The envelope is the hex encoding of `nonce || ciphertext+tag`,
//! so a sealed blob is self-contained: the caller only needs the PIN to open
//! it again.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{CipherError, Result};

/// AES-GCM nonce length in bytes.
pub const NONCE_SIZE: usize = 12;

/// AES-256 key length in bytes.
pub const KEY_SIZE: usize = 32;

/// Derive a 256-bit key from a PIN.
///
/// A single unsalted SHA-256 of the PIN bytes. This keeps every store file
/// written by earlier versions readable, but offers no resistance to offline
/// guessing of short PINs: the envelope has no field to carry a salt or an
/// iteration count, so an iterated KDF would be a format break.
pub fn derive_key(pin: &str) -> Zeroizing<[u8; KEY_SIZE]> {
    let digest = Sha256::digest(pin.as_bytes());
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    key.copy_from_slice(&digest);
    key
}

/// Encrypt `plaintext` under a key derived from `pin`.
///
/// A fresh random nonce is generated on every call; reusing a nonce under the
/// same key would break both confidentiality and integrity.
///
/// # Errors
///
/// Returns `CipherError::EncryptionFailed` if the AEAD rejects the input.
pub fn seal(plaintext: &[u8], pin: &str) -> Result<String> {
    trace!(plaintext_len = plaintext.len(), "sealing");

    let key = derive_key(pin);
    let cipher = Aes256Gcm::new_from_slice(key.as_ref())
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    // Prepend the nonce so open() can split it back out.
    let mut envelope = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);

    trace!(envelope_len = envelope.len(), "sealed");

    Ok(hex::encode(envelope))
}

/// Decrypt an envelope produced by [`seal`].
///
/// # Errors
///
/// Returns `CipherError::MalformedEnvelope` if the hex cannot be decoded or
/// the decoded bytes are shorter than one nonce, and
/// `CipherError::AuthenticationFailed` if the tag check fails; a wrong PIN
/// and a tampered envelope are indistinguishable here.
pub fn open(envelope: &str, pin: &str) -> Result<Vec<u8>> {
    let data = hex::decode(envelope.trim())
        .map_err(|e| CipherError::MalformedEnvelope(e.to_string()))?;

    if data.len() < NONCE_SIZE {
        return Err(CipherError::MalformedEnvelope(format!(
            "{} bytes is shorter than one nonce",
            data.len()
        ))
        .into());
    }

    let (nonce_bytes, ciphertext) = data.split_at(NONCE_SIZE);

    let key = derive_key(pin);
    let cipher = Aes256Gcm::new_from_slice(key.as_ref())
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CipherError::AuthenticationFailed)?;

    trace!(plaintext_len = plaintext.len(), "opened");

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_seal_open_roundtrip() {
        let plaintext = b"hello, secret world!";
        let envelope = seal(plaintext, "1234").unwrap();

        assert_ne!(envelope.as_bytes(), plaintext);
        let opened = open(&envelope, "1234").unwrap();
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn test_wrong_pin_fails_authentication() {
        let envelope = seal(b"sensitive data", "1234").unwrap();
        let result = open(&envelope, "0000");

        assert!(matches!(
            result,
            Err(Error::Cipher(CipherError::AuthenticationFailed))
        ));
    }

    #[test]
    fn test_tampered_envelope_fails() {
        let envelope = seal(b"important secret", "1234").unwrap();

        // Flip one byte in the ciphertext portion (after the hex-encoded nonce).
        let mut bytes = hex::decode(&envelope).unwrap();
        bytes[NONCE_SIZE + 1] ^= 0xff;
        let tampered = hex::encode(bytes);

        let result = open(&tampered, "1234");
        assert!(matches!(
            result,
            Err(Error::Cipher(CipherError::AuthenticationFailed))
        ));
    }

    #[test]
    fn test_non_hex_envelope_is_malformed() {
        let result = open("this is not hex!", "1234");
        assert!(matches!(
            result,
            Err(Error::Cipher(CipherError::MalformedEnvelope(_)))
        ));
    }

    #[test]
    fn test_truncated_envelope_is_malformed() {
        // Four valid hex bytes, shorter than one nonce.
        let result = open("deadbeef", "1234");
        assert!(matches!(
            result,
            Err(Error::Cipher(CipherError::MalformedEnvelope(_)))
        ));
    }

    #[test]
    fn test_empty_plaintext_roundtrips() {
        let envelope = seal(b"", "1234").unwrap();
        let opened = open(&envelope, "1234").unwrap();
        assert!(opened.is_empty());
    }

    #[test]
    fn test_fresh_nonce_per_seal() {
        let a = seal(b"same plaintext", "1234").unwrap();
        let b = seal(b"same plaintext", "1234").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_key_is_deterministic() {
        assert_eq!(*derive_key("1234"), *derive_key("1234"));
        assert_ne!(*derive_key("1234"), *derive_key("4321"));
    }
}
