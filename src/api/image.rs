// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::formats::docker::{v1, v2};

use std::fmt::Display;

use log::{debug, warn};

/// Everything known about one tag, merged from both manifest schemas
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    registry: String,
    name: String,
    tag: String,
    digest: String,
    architecture: String,
    created: String,
    size: u64,
    manifest: v2::Manifest,
}

impl Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}:{}", self.registry, self.name, self.tag)
    }
}

impl Image {
    pub(crate) fn new(
        registry: &str,
        name: &str,
        tag: &str,
        digest: &str,
        manifest: v2::Manifest,
    ) -> Self {
        Self {
            registry: registry.into(),
            name: name.into(),
            tag: tag.into(),
            digest: digest.into(),
            architecture: String::new(),
            created: String::new(),
            size: manifest.size(),
            manifest,
        }
    }

    /// Fills in the fields only the schema 1 manifest carries
    pub(super) fn merge(&mut self, legacy: &v1::Manifest) {
        if !legacy.name.is_empty() {
            self.name = legacy.name.clone();
        }

        if !legacy.tag.is_empty() {
            self.tag = legacy.tag.clone();
        }

        self.architecture = legacy.architecture.clone();

        match legacy.compatibility() {
            Ok(Some(compat)) => {
                self.created = compat.created;
                if self.architecture.is_empty() {
                    self.architecture = compat.architecture;
                }
            }

            Ok(None) => debug!("{}: schema 1 manifest has no history", self),
            Err(e) => warn!("{}: invalid v1Compatibility entry: {}", self, e),
        }
    }

    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The hex manifest digest, without its algorithm label
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// The raw creation timestamp; empty when unknown
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Total bytes of all layers and the config blob
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn schema_version(&self) -> usize {
        self.manifest.schema_version
    }

    pub fn media_type(&self) -> &str {
        &self.manifest.media_type
    }

    pub fn config(&self) -> &v2::Config {
        &self.manifest.config
    }

    pub fn layers(&self) -> &[v2::Layer] {
        &self.manifest.layers
    }
}
