// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

/// Length of the algorithm label (`sha256:`) leading a registry digest
const PREFIX: usize = 7;

/// Strips the algorithm label from a `Docker-Content-Digest` value
///
/// Exactly the first seven bytes are removed. Values that are too short, or
/// that would be split inside a multi-byte character, yield an empty digest.
pub fn strip_algorithm(digest: &str) -> &str {
    digest.get(PREFIX..).unwrap_or_default()
}
