//! SHA-1 hex digests for the analytics SDK.
//!
//! The SDK signs requests with the SHA-1 of its API secret, sent as a
//! 40-character lowercase hex string. [`hash_sha1`] produces that string
//! from the UTF-8 bytes of its input; the remaining helpers hash raw bytes,
//! readers, files and batches with the same rendering.
//!
//! The SHA-1 provider sits behind the default `sha1` feature. Builds
//! without it return [`HashError::AlgorithmUnavailable`] rather than any
//! substitute output.

pub mod batch;
pub mod config;
pub mod digest;
pub mod error;
pub mod sha1_hash;
pub mod stream;

pub use batch::hash_sha1_batch;
pub use config::HashOptions;
pub use digest::{DIGEST_LEN, HEX_LEN, Sha1Digest};
pub use error::{HashError, Result};
pub use sha1_hash::{hash_sha1, hash_sha1_utf8, sha1_bytes, sha1_digest, verify_sha1};
pub use stream::{sha1_file, sha1_reader};
