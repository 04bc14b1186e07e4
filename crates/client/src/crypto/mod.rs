//! AES-256-CBC response decryption primitives.
//!
//! This module is intentionally free of HTTP dependencies. It decodes a
//! Base64 response body, decrypts it under the fixed key/IV shared with the
//! remote service, and strips the server's trailing pad with a tolerant
//! heuristic (see [`cipher::strip_padding`]).

pub mod cipher;

pub use cipher::{decode_response, CipherError};
