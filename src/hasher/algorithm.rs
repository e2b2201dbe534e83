//! Digest algorithm registry

use crate::error::InspectError;
use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::digest::DynDigest;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fmt;
use std::str::FromStr;

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b,
    Blake2s,
    Blake3,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 15] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
        HashAlgorithm::Blake3,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha512_224 => "sha512_224",
            HashAlgorithm::Sha512_256 => "sha512_256",
            HashAlgorithm::Sha3_224 => "sha3_224",
            HashAlgorithm::Sha3_256 => "sha3_256",
            HashAlgorithm::Sha3_384 => "sha3_384",
            HashAlgorithm::Sha3_512 => "sha3_512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Digest length in bytes
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 | HashAlgorithm::Sha3_224 => 28,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha512_256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Blake2s
            | HashAlgorithm::Blake3 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 | HashAlgorithm::Blake2b => 64,
        }
    }

    /// Fresh incremental state for this algorithm
    pub fn hasher(self) -> ContentHasher {
        let state = match self {
            HashAlgorithm::Md5 => State::Dyn(Box::new(Md5::new())),
            HashAlgorithm::Sha1 => State::Dyn(Box::new(Sha1::new())),
            HashAlgorithm::Sha224 => State::Dyn(Box::new(Sha224::new())),
            HashAlgorithm::Sha256 => State::Dyn(Box::new(Sha256::new())),
            HashAlgorithm::Sha384 => State::Dyn(Box::new(Sha384::new())),
            HashAlgorithm::Sha512 => State::Dyn(Box::new(Sha512::new())),
            HashAlgorithm::Sha512_224 => State::Dyn(Box::new(Sha512_224::new())),
            HashAlgorithm::Sha512_256 => State::Dyn(Box::new(Sha512_256::new())),
            HashAlgorithm::Sha3_224 => State::Dyn(Box::new(Sha3_224::new())),
            HashAlgorithm::Sha3_256 => State::Dyn(Box::new(Sha3_256::new())),
            HashAlgorithm::Sha3_384 => State::Dyn(Box::new(Sha3_384::new())),
            HashAlgorithm::Sha3_512 => State::Dyn(Box::new(Sha3_512::new())),
            HashAlgorithm::Blake2b => State::Dyn(Box::new(Blake2b512::new())),
            HashAlgorithm::Blake2s => State::Dyn(Box::new(Blake2s256::new())),
            HashAlgorithm::Blake3 => State::Blake3(Box::new(blake3::Hasher::new())),
        };
        ContentHasher {
            algorithm: self,
            state,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; `-` and `_` are interchangeable ("SHA3-256" == "sha3_256").
impl FromStr for HashAlgorithm {
    type Err = InspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| InspectError::UnsupportedAlgorithm(s.to_string()))
    }
}

enum State {
    Dyn(Box<dyn DynDigest>),
    Blake3(Box<blake3::Hasher>),
}

/// Incremental digest state
pub struct ContentHasher {
    algorithm: HashAlgorithm,
    state: State,
}

impl ContentHasher {
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            State::Dyn(digest) => digest.update(data),
            State::Blake3(hasher) => {
                hasher.update(data);
            }
        }
    }

    /// Consume the state and return the lowercase hex digest
    pub fn finalize_hex(self) -> String {
        match self.state {
            State::Dyn(digest) => hex::encode(digest.finalize()),
            State::Blake3(hasher) => hex::encode(hasher.finalize().as_bytes()),
        }
    }
}
