//! `ostora-client` — obfuscated fetch-and-decrypt pipeline for the Ostora API.
//!
//! The remote service hides behind a rotating hostname: every request targets
//! a fresh `{random-label}.s-25.shop` subdomain so that a static hostname
//! blocklist never matches twice, and every response body is a Base64-encoded
//! AES-256-CBC ciphertext under a fixed, pre-shared key/IV.
//!
//! [`ApiClient::fetch`] builds the URL, performs a single non-blocking GET,
//! and decrypts the body into plaintext (typically JSON) for the caller. Each
//! call is independent: no retry, no caching, no shared mutable state.

pub mod crypto;
pub mod fetch;
pub mod host;

pub use common::FetchError;
pub use fetch::ApiClient;
