// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use super::{Endpoint, Error, Fetched, Image};
use crate::formats::{self, docker, strip_algorithm, Catalog, Tags};

use log::{debug, info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::form_urlencoded::byte_serialize;

/// A read-only client for one registry
///
/// Construction probes the registry; a `Registry` value therefore always
/// refers to a reachable endpoint. Every call is a fresh round trip.
#[derive(Clone, Debug)]
pub struct Registry {
    client: Client,
    endpoint: Endpoint,
    not_found: String,
}

impl Registry {
    pub const NOT_FOUND: &'static str = "Image or tag not found";

    const DIGEST_HEADER: &'static str = "Docker-Content-Digest";

    pub fn new(endpoint: Endpoint) -> Result<Self, Error> {
        if endpoint.credentials().is_some() {
            warn!(
                "ignoring credentials for {}: authentication is not supported",
                endpoint.url()
            );
        }

        let client = Client::builder()
            .timeout(endpoint.timeout())
            .danger_accept_invalid_certs(!endpoint.check_tls())
            .build()
            .map_err(|source| Error::Transport {
                url: endpoint.url().into(),
                source,
            })?;

        let registry = Self {
            client,
            endpoint,
            not_found: Self::NOT_FOUND.into(),
        };

        registry.probe()?;
        info!("connected to registry at {}", registry.endpoint.url());
        Ok(registry)
    }

    /// Replaces the text of `Error::NotFound`
    pub fn with_not_found_message(mut self, message: impl Into<String>) -> Self {
        self.not_found = message.into();
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn probe(&self) -> Result<(), Error> {
        let url = format!("{}/", self.endpoint.url());

        let rep = self
            .client
            .get(&url)
            .send()
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        match rep.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized { url }),
            status => Err(Error::Status { url, status }),
        }
    }

    fn get(&self, path: &str, version: u8) -> Result<Response, Error> {
        let url = format!("{}/{}", self.endpoint.url(), path);
        debug!("GET {} (schema {})", url, version);

        let rep = self
            .client
            .get(&url)
            .header(ACCEPT, formats::accept(version))
            .send()
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        match rep.status() {
            s if s.is_success() => Ok(rep),
            status => Err(Error::Status { url, status }),
        }
    }

    fn decode<T: DeserializeOwned>(rep: Response) -> Result<T, Error> {
        let url = rep.url().to_string();

        let body = rep.bytes().map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode { url, source })
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str, version: u8) -> Result<T, Error> {
        Self::decode(self.get(path, version)?)
    }

    /// Lists the repositories hosted by the registry
    pub fn catalog(&self) -> Fetched<Catalog> {
        match self.fetch(&escape("_catalog"), 2) {
            Ok(catalog) => Fetched::complete(catalog),
            Err(e) => {
                warn!("unable to list repositories: {}", e);
                Fetched::degraded(Catalog::default(), e)
            }
        }
    }

    /// Lists the tags of a repository, sorted ascending
    pub fn tags(&self, name: &str) -> Fetched<Tags> {
        let path = format!("{}/tags/list", escape(name));

        match self.fetch::<Tags>(&path, 2) {
            Ok(mut tags) => {
                if tags.name.is_empty() {
                    tags.name = name.into();
                }

                tags.tags.sort();
                Fetched::complete(tags)
            }

            Err(e) => {
                warn!("unable to list tags of {}: {}", name, e);
                Fetched::degraded(Tags::empty(name), e)
            }
        }
    }

    /// Fetches and merges both manifest schemas of a tag
    ///
    /// Only a failure to fetch the schema 2 manifest is reported, as
    /// `Error::NotFound`. Everything taken from the schema 1 manifest is best
    /// effort and left empty when unavailable.
    pub fn image(&self, name: &str, tag: &str) -> Result<Image, Error> {
        let path = format!("{}/manifests/{}", escape(name), escape(tag));

        let rep = self.get(&path, 2).map_err(|e| {
            warn!("no manifest for {}:{}: {}", name, tag, e);
            Error::NotFound {
                name: name.into(),
                tag: tag.into(),
                message: self.not_found.clone(),
            }
        })?;

        let digest = match rep
            .headers()
            .get(Self::DIGEST_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            Some(digest) => strip_algorithm(digest).to_string(),
            None => {
                warn!("{}:{}: missing {} header", name, tag, Self::DIGEST_HEADER);
                String::new()
            }
        };

        let manifest = Self::decode::<docker::v2::Manifest>(rep).unwrap_or_else(|e| {
            warn!("{}:{}: {}", name, tag, e);
            Default::default()
        });

        let mut image = Image::new(self.endpoint.host(), name, tag, &digest, manifest);

        match self.fetch::<docker::v1::Manifest>(&path, 1) {
            Ok(legacy) => image.merge(&legacy),
            Err(e) => warn!("{}: no schema 1 manifest: {}", image, e),
        }

        Ok(image)
    }
}

/// Encodes one path segment the way a query component is encoded
fn escape(segment: &str) -> String {
    byte_serialize(segment.as_bytes()).collect()
}
