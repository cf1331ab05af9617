// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct History {
    #[serde(default, rename = "v1Compatibility")]
    pub v1_compatibility: String,
}

/// The legacy image description embedded, as a string, in each history entry
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Compatibility {
    #[serde(default)]
    pub created: String,

    #[serde(default)]
    pub architecture: String,
}

/// A schema 1 manifest, decoded leniently
///
/// Only the fields merged into an image are kept. Every field is optional so
/// that a partial or signed (`prettyjws`) document still decodes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub tag: String,

    #[serde(default)]
    pub architecture: String,

    #[serde(default)]
    pub history: Vec<History>,
}

impl Manifest {
    /// Decodes the nested JSON document of the most recent history entry
    pub fn compatibility(&self) -> serde_json::Result<Option<Compatibility>> {
        match self.history.first() {
            None => Ok(None),
            Some(h) if h.v1_compatibility.is_empty() => Ok(None),
            Some(h) => serde_json::from_str(&h.v1_compatibility).map(Some),
        }
    }
}
