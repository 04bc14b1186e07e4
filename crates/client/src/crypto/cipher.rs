//! AES-256-CBC decryption of individual API response bodies.
//!
//! The remote service encrypts every response under a fixed key/IV pair,
//! appends a PKCS#7-style pad, and Base64-encodes the result. Decryption here
//! runs the block cipher with `NoPadding` and removes the pad manually in
//! [`strip_padding`], because the server's encoder is not strict PKCS#7 and a
//! standard unpadding routine would reject bodies the server considers valid.

use aes::Aes256;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use thiserror::Error;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Byte length of the AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES block, and of the CBC initialisation vector.
pub const BLOCK_LEN: usize = 16;

/// Fixed AES-256 key shared with the remote service. Hex:
/// `4e5c6d1a8b3fe8137a3b9df26a9c4de195267b8e6f6c0b4e1c3ae1d27f2b4e6f`.
/// Any change breaks wire compatibility with deployed servers.
const KEY: [u8; KEY_LEN] = [
    0x4e, 0x5c, 0x6d, 0x1a, 0x8b, 0x3f, 0xe8, 0x13, 0x7a, 0x3b, 0x9d, 0xf2, 0x6a, 0x9c, 0x4d,
    0xe1, 0x95, 0x26, 0x7b, 0x8e, 0x6f, 0x6c, 0x0b, 0x4e, 0x1c, 0x3a, 0xe1, 0xd2, 0x7f, 0x2b,
    0x4e, 0x6f,
];

/// Fixed CBC initialisation vector shared with the remote service. Hex:
/// `a9c21f8d7e6b4a9db12e4f9d5c1a7b8e`.
const IV: [u8; BLOCK_LEN] = [
    0xa9, 0xc2, 0x1f, 0x8d, 0x7e, 0x6b, 0x4a, 0x9d, 0xb1, 0x2e, 0x4f, 0x9d, 0x5c, 0x1a, 0x7b,
    0x8e,
];

/// Errors produced by the cipher layer.
///
/// The fetch orchestrator collapses all of these into a single
/// decoding-failure category; the variants exist for log messages only.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The response body is not valid standard Base64.
    #[error("response body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded ciphertext length is not a multiple of [`BLOCK_LEN`].
    #[error("ciphertext length {0} is not a multiple of the AES block size")]
    Misaligned(usize),

    /// The block cipher rejected the input.
    #[error("block cipher failure")]
    Cipher,
}

/// Decode a Base64 response body and decrypt it to plaintext.
///
/// Pure and synchronous. An empty body decrypts to an empty string.
///
/// # Errors
///
/// Returns [`CipherError::Base64`] on malformed Base64,
/// [`CipherError::Misaligned`] when the ciphertext is not block-aligned, and
/// [`CipherError::Cipher`] on any cipher-level failure.
pub fn decode_response(ciphertext_b64: &str) -> Result<String, CipherError> {
    // Response bodies may carry a trailing newline; the server's own Base64
    // encoder tolerates it, so we do too.
    let mut buf = STANDARD.decode(ciphertext_b64.trim())?;

    if buf.len() % BLOCK_LEN != 0 {
        return Err(CipherError::Misaligned(buf.len()));
    }

    let plain = Aes256CbcDec::new(&KEY.into(), &IV.into())
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| CipherError::Cipher)?;

    Ok(strip_padding(plain))
}

/// Strip the server's trailing pad from a decrypted buffer.
///
/// Tolerant variant of PKCS#7 removal. The last byte is read as the pad
/// length, and the buffer is returned untouched when that length is 0,
/// greater than [`BLOCK_LEN`], or greater than the buffer itself. The pad
/// bytes are never inspected, so a genuine plaintext whose final byte falls
/// in `1..=16` is silently truncated. Deployed servers encode against exactly
/// this behaviour; do not replace it with strict PKCS#7 validation.
///
/// Invalid UTF-8 decodes lossily (U+FFFD), never as an error.
pub fn strip_padding(plain: &[u8]) -> String {
    if plain.is_empty() {
        return String::new();
    }

    let pad_len = plain[plain.len() - 1] as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > plain.len() {
        return String::from_utf8_lossy(plain).into_owned();
    }

    String::from_utf8_lossy(&plain[..plain.len() - pad_len]).into_owned()
}

/// Encrypt a plaintext the way the server does: AES-256-CBC under the fixed
/// key/IV with PKCS#7 padding, then standard Base64. Test fixture builder.
#[cfg(test)]
pub(crate) fn encrypt_b64(plain: &[u8]) -> String {
    use cipher::{block_padding::Pkcs7, BlockEncryptMut};

    type Aes256CbcEnc = cbc::Encryptor<Aes256>;

    let ciphertext = Aes256CbcEnc::new(&KEY.into(), &IV.into()).encrypt_padded_vec_mut::<Pkcs7>(plain);
    STANDARD.encode(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_with_pkcs7_encoder() {
        let plaintext = r#"{"channels":[{"id":7,"name":"news"}]}"#;
        let body = encrypt_b64(plaintext.as_bytes());
        assert_eq!(decode_response(&body).unwrap(), plaintext);
    }

    #[test]
    fn round_trip_exact_block_multiple() {
        // 16 bytes of plaintext forces a full extra pad block.
        let plaintext = "0123456789abcdef";
        let body = encrypt_b64(plaintext.as_bytes());
        assert_eq!(decode_response(&body).unwrap(), plaintext);
    }

    #[test]
    fn empty_body_decodes_to_empty_string() {
        assert_eq!(decode_response("").unwrap(), "");
    }

    #[test]
    fn malformed_base64_is_an_error() {
        let err = decode_response("not base64!!!").unwrap_err();
        assert!(matches!(err, CipherError::Base64(_)));
    }

    #[test]
    fn misaligned_ciphertext_is_an_error() {
        // 5 raw bytes — valid Base64, not a block multiple.
        let body = STANDARD.encode([1u8, 2, 3, 4, 5]);
        let err = decode_response(&body).unwrap_err();
        assert!(matches!(err, CipherError::Misaligned(5)));
    }

    // -----------------------------------------------------------------------
    // strip_padding heuristic — must match the server's encoder bit-for-bit
    // -----------------------------------------------------------------------

    #[test]
    fn pad_len_zero_keeps_full_text() {
        let mut data = b"payload".to_vec();
        data.push(0x00);
        assert_eq!(strip_padding(&data), "payload\u{0}");
    }

    #[test]
    fn pad_len_above_sixteen_keeps_full_text() {
        let mut data = b"payload".to_vec();
        data.push(0x11);
        assert_eq!(strip_padding(&data), "payload\u{11}");
    }

    #[test]
    fn pad_len_exceeding_length_keeps_full_text() {
        // 3 bytes ending in 5: pad length larger than the buffer.
        assert_eq!(strip_padding(&[b'a', b'b', 5]), "ab\u{5}");
    }

    #[test]
    fn pad_len_equal_to_length_strips_everything() {
        assert_eq!(strip_padding(&[3, 3, 3]), "");
    }

    #[test]
    fn well_formed_pad_is_stripped() {
        assert_eq!(strip_padding(b"HE\x03\x03\x03"), "HE");
    }

    #[test]
    fn pad_bytes_are_not_validated() {
        // Strict PKCS#7 would reject this; the heuristic strips 3 bytes
        // purely on the value of the last one.
        assert_eq!(strip_padding(b"HELLO\x03"), "HEL");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(strip_padding(&[]), "");
    }

    #[test]
    fn high_bit_final_byte_keeps_full_text() {
        // 0xFF read as unsigned is 255, far outside 1..=16.
        let mut data = b"abc".to_vec();
        data.push(0xFF);
        assert_eq!(strip_padding(&data), "abc\u{fffd}");
    }
}
