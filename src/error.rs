use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while computing or parsing digests.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HashError {
    /// The input bytes are not UTF-8 text.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Encoding { valid_up_to: usize },

    /// The digest provider was not compiled into this build.
    #[error("digest algorithm `{algorithm}` is not available in this build")]
    AlgorithmUnavailable { algorithm: &'static str },

    /// A textual digest was not 40 hexadecimal digits.
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("failed to read input")]
    Io(#[from] io::Error),

    #[error("failed to read {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HashError>;
