// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::api::{Credentials, Endpoint};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use serde::Deserialize;

/// The contents of `config.json`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "RegistryUrl", alias = "registryUrl", alias = "registry_url")]
    pub registry_url: String,

    #[serde(rename = "CheckTLS", alias = "checkTLS", alias = "check_tls")]
    pub check_tls: bool,

    #[serde(rename = "Language", alias = "language")]
    pub language: String,

    /// Seconds before a registry request is abandoned
    #[serde(rename = "Timeout", alias = "timeout")]
    pub timeout: u64,

    #[serde(rename = "Username", alias = "username")]
    pub username: Option<String>,

    #[serde(rename = "Password", alias = "password")]
    pub password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: String::new(),
            check_tls: true,
            language: "en".into(),
            timeout: Endpoint::DEFAULT_TIMEOUT.as_secs(),
            username: None,
            password: None,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "config.json";

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("unable to open {:?}", path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid configuration in {:?}", path))
    }

    /// Loads the given file, or `config.json` if it exists, or the defaults
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(Self::DEFAULT_PATH).exists() => {
                Self::load(Path::new(Self::DEFAULT_PATH))
            }
            None => {
                debug!("no {} found, using defaults", Self::DEFAULT_PATH);
                Ok(Self::default())
            }
        }
    }

    pub fn endpoint(&self) -> Result<Endpoint> {
        if self.registry_url.is_empty() {
            return Err(anyhow!("no registry url configured"));
        }

        let credentials = match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            (None, None) => None,
            _ => {
                warn!("username and password must be configured together");
                None
            }
        };

        Ok(Endpoint::new(&self.registry_url, self.check_tls)?
            .with_timeout(Duration::from_secs(self.timeout))
            .with_credentials(credentials))
    }
}

/// The user-facing messages of one language
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Locale {
    #[serde(rename = "ImageOrTagNotFound", alias = "imageOrTagNotFound")]
    pub image_or_tag_not_found: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            image_or_tag_not_found: crate::api::Registry::NOT_FOUND.into(),
        }
    }
}

impl Locale {
    const FALLBACK: &'static str = "en";

    fn path(dir: &Path, language: &str) -> PathBuf {
        dir.join(format!("{}.json", language))
    }

    fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("unable to open {:?}", path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid locale in {:?}", path))
    }

    /// Loads `<dir>/<language>.json`, falling back to English
    pub fn load(dir: &Path, language: &str) -> Self {
        match Self::read(&Self::path(dir, language)) {
            Ok(locale) => return locale,
            Err(e) => warn!("{:#}", e),
        }

        if language != Self::FALLBACK {
            match Self::read(&Self::path(dir, Self::FALLBACK)) {
                Ok(locale) => return locale,
                Err(e) => warn!("{:#}", e),
            }
        }

        Self::default()
    }
}
