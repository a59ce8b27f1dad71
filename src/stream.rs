//! Streamed SHA-1 over readers and files.
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::config::HashOptions;
use crate::digest::Sha1Digest;
use crate::error::{HashError, Result};
use crate::sha1_hash::Hasher;

/// Digest everything `reader` yields until EOF, `options.buffer_size()`
/// bytes at a time.
pub fn sha1_reader<R: Read>(mut reader: R, options: &HashOptions) -> Result<Sha1Digest> {
    Ok(digest_stream(&mut reader, options)?.0)
}

pub fn sha1_file(path: impl AsRef<Path>, options: &HashOptions) -> Result<Sha1Digest> {
    let path = path.as_ref();
    let into_file_error = |source| HashError::File {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(into_file_error)?;
    let (digest, total) = digest_stream(&mut file, options).map_err(|err| match err {
        HashError::Io(source) => into_file_error(source),
        other => other,
    })?;
    tracing::debug!(path = %path.display(), bytes = total, "hashed file");
    Ok(digest)
}

fn digest_stream<R: Read>(reader: &mut R, options: &HashOptions) -> Result<(Sha1Digest, u64)> {
    let mut hasher = Hasher::new()?;
    let mut buffer = vec![0_u8; options.buffer_size()];
    let mut total = 0_u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        hasher.update(&buffer[..read]);
        total += read as u64;
    }
    Ok((hasher.finalize(), total))
}
