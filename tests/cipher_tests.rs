//! Tests for the envelope encryption layer.

use foxhole::core::cipher::{self, NONCE_SIZE};
use foxhole::error::{CipherError, Error};
use proptest::prelude::*;

#[test]
fn test_seal_open_roundtrip() {
    let plaintext = b"super secret password 123!";
    let envelope = cipher::seal(plaintext, "1234").unwrap();

    // Envelope is hex text, at least one nonce long.
    assert!(envelope.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(envelope.len() >= NONCE_SIZE * 2);

    let opened = cipher::open(&envelope, "1234").unwrap();
    assert_eq!(opened, plaintext);
}

#[test]
fn test_open_with_wrong_pin_fails() {
    let envelope = cipher::seal(b"secret", "1234").unwrap();

    let result = cipher::open(&envelope, "0000");
    assert!(matches!(
        result,
        Err(Error::Cipher(CipherError::AuthenticationFailed))
    ));
}

#[test]
fn test_every_flipped_byte_is_detected() {
    let envelope = cipher::seal(b"tamper target", "1234").unwrap();
    let bytes = hex::decode(&envelope).unwrap();

    for i in 0..bytes.len() {
        let mut tampered = bytes.clone();
        tampered[i] ^= 0x01;
        let result = cipher::open(&hex::encode(&tampered), "1234");

        assert!(
            matches!(result, Err(Error::Cipher(CipherError::AuthenticationFailed))),
            "flipping byte {} went undetected",
            i
        );
    }
}

#[test]
fn test_non_hex_envelope_rejected() {
    let result = cipher::open("zzzz-not-hex", "1234");
    assert!(matches!(
        result,
        Err(Error::Cipher(CipherError::MalformedEnvelope(_)))
    ));
}

#[test]
fn test_envelope_shorter_than_nonce_rejected() {
    let result = cipher::open(&hex::encode([0u8; NONCE_SIZE - 1]), "1234");
    assert!(matches!(
        result,
        Err(Error::Cipher(CipherError::MalformedEnvelope(_)))
    ));
}

#[test]
fn test_unicode_plaintext_roundtrips() {
    let plaintext = "🔐 Unicode secrets: 日本語, émojis, and more!".as_bytes();
    let envelope = cipher::seal(plaintext, "påss-φρ").unwrap();
    assert_eq!(cipher::open(&envelope, "påss-φρ").unwrap(), plaintext);
}

proptest! {
    #[test]
    fn prop_roundtrip(plaintext in proptest::collection::vec(any::<u8>(), 0..2048), pin in ".{1,32}") {
        let envelope = cipher::seal(&plaintext, &pin).unwrap();
        let opened = cipher::open(&envelope, &pin).unwrap();
        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn prop_wrong_pin_rejected(
        plaintext in proptest::collection::vec(any::<u8>(), 0..512),
        a in "[a-z0-9]{1,16}",
        b in "[a-z0-9]{1,16}",
    ) {
        prop_assume!(a != b);
        let envelope = cipher::seal(&plaintext, &a).unwrap();
        prop_assert!(cipher::open(&envelope, &b).is_err());
    }
}
