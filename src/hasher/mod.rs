//! Content Hasher
//!
//! Streams a file through a digest in fixed-size chunks and returns the
//! lowercase hex digest.

pub mod algorithm;

pub use algorithm::{ContentHasher, HashAlgorithm};

use crate::error::{InspectError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Algorithm used when none is given
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// Bytes read per chunk
pub const HASH_CHUNK_SIZE: usize = 8192;

/// Digest of a file's contents under the named algorithm.
///
/// The name is resolved before the file is opened, so an unknown
/// algorithm fails with [`InspectError::UnsupportedAlgorithm`] even for a
/// missing file.
pub fn file_hash(path: impl AsRef<Path>, algorithm: &str) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    file_hash_with(path, algorithm)
}

/// Digest of a file's contents under [`DEFAULT_ALGORITHM`].
pub fn file_hash_sha256(path: impl AsRef<Path>) -> Result<String> {
    file_hash_with(path, HashAlgorithm::Sha256)
}

pub fn file_hash_with(path: impl AsRef<Path>, algorithm: HashAlgorithm) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| InspectError::from_io(e, path))?;
    let digest = hash_reader(file, algorithm).map_err(|e| InspectError::from_io(e, path))?;
    debug!(path = %path.display(), algorithm = %algorithm, "Hashed file");
    Ok(digest)
}

/// Feed `reader` through `algorithm` in [`HASH_CHUNK_SIZE`] chunks until EOF.
pub fn hash_reader<R: Read>(mut reader: R, algorithm: HashAlgorithm) -> io::Result<String> {
    let mut hasher = algorithm.hasher();
    let mut buf = [0u8; HASH_CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize_hex())
}
