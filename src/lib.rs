//! Ultra File Search: filesystem path inspection
//!
//! Reports file metadata or recursive directory totals for a path, computes
//! content digests of files, and creates directories idempotently. Each
//! operation is a stateless, blocking call over the filesystem.

pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod hasher;
pub mod inspect;
pub mod logging;

pub use directory::ensure_dir;
pub use error::{InspectError, Result};
pub use hasher::{file_hash, file_hash_sha256, HashAlgorithm, DEFAULT_ALGORITHM};
pub use inspect::{search, search_with, DirectoryReport, FileReport, Report, WalkerConfig};
