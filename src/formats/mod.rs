// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

mod catalog;
mod digest;
pub mod docker;

pub use self::catalog::{Catalog, Tags};
pub use self::digest::strip_algorithm;

/// The `Accept` value requesting a given docker manifest schema version
pub const fn accept(version: u8) -> &'static str {
    match version {
        1 => "application/vnd.docker.distribution.manifest.v1+json",
        _ => "application/vnd.docker.distribution.manifest.v2+json",
    }
}
