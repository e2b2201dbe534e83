//! Property-based tests for hashing and aggregation guarantees

use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use ultra_file_search::hasher::{hash_reader, HashAlgorithm, HASH_CHUNK_SIZE};
use ultra_file_search::inspect::report::extension;
use ultra_file_search::{file_hash, search, Report};

/// Chunked streaming equals hashing the whole buffer at once
#[test]
fn test_streaming_matches_one_shot_property() {
    let mut runner = TestRunner::new(Config {
        cases: 64,
        ..Config::default()
    });

    runner
        .run(
            &proptest::collection::vec(any::<u8>(), 0..(HASH_CHUNK_SIZE * 3)),
            |data| {
                for alg in HashAlgorithm::ALL {
                    let mut one_shot = alg.hasher();
                    one_shot.update(&data);
                    let expected = one_shot.finalize_hex();

                    let streamed = hash_reader(Cursor::new(&data), alg).unwrap();
                    prop_assert_eq!(&streamed, &expected, "algorithm {}", alg);
                }

                let sha256 = hash_reader(Cursor::new(&data), HashAlgorithm::Sha256).unwrap();
                prop_assert_eq!(sha256, hex::encode(Sha256::digest(&data)));
                Ok(())
            },
        )
        .unwrap();
}

/// File digests are stable across repeated calls
#[test]
fn test_file_hash_determinism_property() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        ..Config::default()
    });
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("content.bin");

    runner
        .run(&any::<Vec<u8>>(), |content| {
            fs::write(&path, &content).unwrap();
            let first = file_hash(&path, "sha256").unwrap();
            let second = file_hash(&path, "sha256").unwrap();
            prop_assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

/// Directory totals equal the sum of individually inspected files
#[test]
fn test_directory_totals_property() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        ..Config::default()
    });

    let files = proptest::collection::vec((0usize..3, 0usize..2048), 0..12);

    runner
        .run(&files, |files| {
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path();
            let subdirs = [root.join("a"), root.join("a").join("b"), root.join("c")];
            for dir in &subdirs {
                fs::create_dir_all(dir).unwrap();
            }

            let mut expected_size = 0u64;
            let mut individual_sum = 0u64;
            for (i, (dir_idx, len)) in files.iter().enumerate() {
                let path = subdirs[*dir_idx].join(format!("f{}.dat", i));
                fs::write(&path, vec![1u8; *len]).unwrap();
                expected_size += *len as u64;

                match search(&path).unwrap() {
                    Report::File(file) => individual_sum += file.size,
                    Report::Directory(_) => panic!("expected a file"),
                }
            }

            let report = search(root).unwrap();
            let dir = report.as_directory().unwrap();
            prop_assert_eq!(dir.total_files, files.len() as u64);
            prop_assert_eq!(dir.total_dirs, 3);
            prop_assert_eq!(dir.total_size, expected_size);
            prop_assert_eq!(dir.total_size, individual_sum);
            Ok(())
        })
        .unwrap();
}

/// The reported extension is the final dotted suffix
#[test]
fn test_extension_property() {
    let mut runner = TestRunner::default();

    runner
        .run(&("[a-z0-9]{1,8}", "[a-z0-9]{1,5}"), |(stem, ext)| {
            let name = format!("{}.{}", stem, ext);
            prop_assert_eq!(extension(std::path::Path::new(&name)), format!(".{}", ext));
            prop_assert_eq!(extension(std::path::Path::new(&stem)), "");
            Ok(())
        })
        .unwrap();
}
