// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use super::Error;

use std::time::Duration;

use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Where a registry lives and how to reach it
///
/// Built once from configuration and handed to `Registry::new()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    check_tls: bool,
    timeout: Duration,
    credentials: Option<Credentials>,
}

impl Endpoint {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Validates the url and strips its trailing slashes
    pub fn new(url: &str, check_tls: bool) -> Result<Self, Error> {
        let trimmed = url.trim().trim_end_matches('/');
        match Url::parse(trimmed) {
            Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => (),
            _ => return Err(Error::InvalidUrl(url.into())),
        }

        Ok(Self {
            url: trimmed.into(),
            check_tls,
            timeout: Self::DEFAULT_TIMEOUT,
            credentials: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn check_tls(&self) -> bool {
        self.check_tls
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// The registry host, as displayed next to image names
    pub fn host(&self) -> &str {
        host(&self.url)
    }
}

/// Trims the scheme and the trailing `/v2/` segment off a registry url
///
/// This is a plain string trim, not a url parse: ports and paths other than
/// `/v2` are kept.
pub fn host(url: &str) -> &str {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let url = url.trim_end_matches('/');
    url.strip_suffix("/v2").unwrap_or(url)
}
