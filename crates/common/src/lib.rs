//! Common types and errors shared across `ostora-bridge` crates.

pub mod error;
pub mod protocol;

pub use error::FetchError;
