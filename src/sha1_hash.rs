//! SHA-1 of text and bytes, rendered as lowercase hex.
//!
//! Text is always hashed as its UTF-8 bytes.
#[cfg(feature = "sha1")]
use sha1::{Digest, Sha1};

use crate::digest::Sha1Digest;
use crate::error::{HashError, Result};

/// Incremental SHA-1 state.
///
/// Without the `sha1` feature the type is uninhabited and [`Hasher::new`]
/// reports [`HashError::AlgorithmUnavailable`].
pub(crate) struct Hasher {
    #[cfg(feature = "sha1")]
    inner: Sha1,
    #[cfg(not(feature = "sha1"))]
    never: std::convert::Infallible,
}

impl Hasher {
    #[cfg(feature = "sha1")]
    pub(crate) fn new() -> Result<Self> {
        Ok(Self { inner: Sha1::new() })
    }

    #[cfg(not(feature = "sha1"))]
    pub(crate) fn new() -> Result<Self> {
        Err(HashError::AlgorithmUnavailable { algorithm: "sha1" })
    }

    #[cfg_attr(not(feature = "sha1"), allow(unused_variables))]
    pub(crate) fn update(&mut self, bytes: &[u8]) {
        #[cfg(feature = "sha1")]
        self.inner.update(bytes);
        #[cfg(not(feature = "sha1"))]
        match self.never {}
    }

    pub(crate) fn finalize(self) -> Sha1Digest {
        #[cfg(feature = "sha1")]
        {
            Sha1Digest::from_bytes(self.inner.finalize().into())
        }
        #[cfg(not(feature = "sha1"))]
        match self.never {}
    }
}

pub fn sha1_bytes(bytes: &[u8]) -> Result<Sha1Digest> {
    let mut hasher = Hasher::new()?;
    hasher.update(bytes);
    Ok(hasher.finalize())
}

pub fn sha1_digest(input: &str) -> Result<Sha1Digest> {
    sha1_bytes(input.as_bytes())
}

/// Hash `input` and render the digest as 40 lowercase hex characters.
///
/// ```
/// # #[cfg(feature = "sha1")]
/// # {
/// assert_eq!(
///     sdk_digest::hash_sha1("test").unwrap(),
///     "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3"
/// );
/// # }
/// # #[cfg(not(feature = "sha1"))]
/// # assert!(sdk_digest::hash_sha1("test").is_err());
/// ```
pub fn hash_sha1(input: &str) -> Result<String> {
    let digest = sha1_digest(input)?;
    tracing::trace!(len = input.len(), "computed sha1");
    Ok(digest.to_hex())
}

/// Like [`hash_sha1`], for bytes that must first be checked to be UTF-8.
pub fn hash_sha1_utf8(bytes: &[u8]) -> Result<String> {
    let input = std::str::from_utf8(bytes).map_err(|err| HashError::Encoding {
        valid_up_to: err.valid_up_to(),
    })?;
    hash_sha1(input)
}

pub fn verify_sha1(input: &str, expected: &str) -> bool {
    let Ok(expected) = expected.parse::<Sha1Digest>() else {
        return false;
    };
    sha1_digest(input).is_ok_and(|digest| digest == expected)
}
