// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use serde::{Deserialize, Deserializer};

/// The body of `GET /v2/_catalog`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default, deserialize_with = "nullable")]
    pub repositories: Vec<String>,
}

/// The body of `GET /v2/<name>/tags/list`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Tags {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
}

impl Tags {
    /// An empty tag list for the named repository
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }
}

// Registries answer `"tags": null` for repositories without tags.
fn nullable<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
