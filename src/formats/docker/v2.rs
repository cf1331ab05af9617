// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, rename = "mediaType")]
    pub media_type: String,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub digest: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Layer {
    #[serde(default, rename = "mediaType")]
    pub media_type: String,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub digest: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default, rename = "schemaVersion")]
    pub schema_version: usize,

    #[serde(default, rename = "mediaType")]
    pub media_type: String,

    #[serde(default)]
    pub config: Config,

    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Manifest {
    /// The sum of every layer size plus the config blob size
    pub fn size(&self) -> u64 {
        self.layers
            .iter()
            .map(|l| l.size)
            .fold(self.config.size, u64::saturating_add)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn size() {
        let m: Manifest = serde_json::from_str(
            r#"{
                "schemaVersion": 2,
                "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
                "config": {
                    "mediaType": "application/vnd.docker.container.image.v1+json",
                    "size": 50,
                    "digest": "sha256:c0ffee"
                },
                "layers": [
                    {"mediaType": "application/vnd.docker.image.rootfs.diff.tar.gzip", "size": 100, "digest": "sha256:aa"},
                    {"mediaType": "application/vnd.docker.image.rootfs.diff.tar.gzip", "size": 250, "digest": "sha256:bb"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(m.schema_version, 2);
        assert_eq!(m.layers.len(), 2);
        assert_eq!(m.layers[1].digest, "sha256:bb");
        assert_eq!(m.size(), 400);
    }

    #[test]
    fn empty() {
        assert_eq!(Manifest::default().size(), 0);
    }

    #[test]
    fn saturates() {
        let m = Manifest {
            config: Config {
                size: u64::MAX,
                ..Default::default()
            },
            layers: vec![Layer {
                size: 1,
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(m.size(), u64::MAX);
    }
}
