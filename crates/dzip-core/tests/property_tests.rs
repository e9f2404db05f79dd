//! Property-based tests for the path-traversal guard.
//!
//! These tests use proptest to generate entry names and check that the
//! lexical join plus prefix check agree with a direct count of how far a
//! name climbs.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use dzip_core::UnzipError;
use dzip_core::copy::CopyBuffer;
use dzip_core::copy::copy_with_buffer;
use dzip_core::security::ensure_within;
use dzip_core::security::join_entry;
use dzip_core::security::normalize;
use proptest::prelude::*;
use std::io::Cursor;
use std::path::Path;

const DEST: &str = "/srv/extract/archive";

/// Lowest depth (relative to the destination) a name reaches while walking
/// its components. Negative means it climbed above the destination.
fn lowest_depth(name: &str) -> i32 {
    let mut depth = 0;
    let mut lowest = 0;
    for part in name.split('/') {
        match part {
            "" | "." => {}
            ".." => depth -= 1,
            _ => depth += 1,
        }
        lowest = lowest.min(depth);
    }
    lowest
}

fn final_depth(name: &str) -> i32 {
    name.split('/').fold(0, |depth, part| match part {
        "" | "." => depth,
        ".." => depth - 1,
        _ => depth + 1,
    })
}

proptest! {
    /// Any name with more leading `..` than directories is rejected.
    #[test]
    fn prop_climbing_names_rejected(
        ups in 1usize..6,
        suffix in prop::collection::vec("[a-z]{1,8}", 0..4)
    ) {
        let mut name = "../".repeat(ups);
        name.push_str(&suffix.join("/"));

        let dest = Path::new(DEST);
        let candidate = join_entry(dest, &name);
        let result = ensure_within(&candidate, dest);
        prop_assert!(
            matches!(result, Err(UnzipError::IllegalPath { .. })),
            "{} should be rejected", name
        );
    }

    /// Plain relative names are always accepted and land under the
    /// destination.
    #[test]
    fn prop_plain_names_accepted(
        components in prop::collection::vec("[a-zA-Z0-9_.-]{1,20}", 1..6)
    ) {
        prop_assume!(components.iter().all(|c| c != "." && c != ".."));
        let name = components.join("/");

        let dest = Path::new(DEST);
        let candidate = join_entry(dest, &name);
        prop_assert!(ensure_within(&candidate, dest).is_ok());
        prop_assert!(candidate.starts_with(dest));
    }

    /// The guard accepts exactly the names that never climb above the
    /// destination and end strictly below it. Generated components are too
    /// short to spell the destination's own name, so a name that climbs out
    /// can never walk back in.
    #[test]
    fn prop_guard_matches_depth(
        parts in prop::collection::vec(prop_oneof![
            Just("..".to_string()),
            Just(".".to_string()),
            "[a-z]{1,4}",
        ], 0..8)
    ) {
        let name = parts.join("/");
        let dest = Path::new(DEST);
        let candidate = join_entry(dest, &name);
        let accepted = ensure_within(&candidate, dest).is_ok();

        let expected = lowest_depth(&name) >= 0 && final_depth(&name) > 0;
        prop_assert_eq!(accepted, expected, "name: {}", name);
    }

    /// Normalization is idempotent.
    #[test]
    fn prop_normalize_idempotent(
        parts in prop::collection::vec(prop_oneof![
            Just("..".to_string()),
            Just(".".to_string()),
            "[a-z]{1,4}",
        ], 0..8),
        absolute in any::<bool>()
    ) {
        let mut raw = parts.join("/");
        if absolute {
            raw.insert(0, '/');
        }
        let once = normalize(Path::new(&raw));
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Copy preserves arbitrary content byte for byte.
    #[test]
    fn prop_copy_preserves_content(data in prop::collection::vec(any::<u8>(), 0..200_000)) {
        let mut buffer = CopyBuffer::new();
        let mut input = Cursor::new(&data);
        let mut output = Vec::new();

        let copied = copy_with_buffer(&mut input, &mut output, &mut buffer)
            .expect("in-memory copy should succeed");
        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(output, data);
    }
}
