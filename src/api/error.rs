// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to a registry
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The registry answered outside of 2xx
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: StatusCode },

    /// The registry requires credentials
    #[error("authentication not supported (registry at {url} answered 401)")]
    Unauthorized { url: String },

    /// The body did not have the expected shape
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The requested image or tag does not exist
    ///
    /// Displays the localized message only; the rendering layer shows it as is.
    #[error("{message}")]
    NotFound {
        name: String,
        tag: String,
        message: String,
    },

    #[error("invalid registry url: {0:?}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_shows_message() {
        let err = Error::NotFound {
            name: "golang/harbor".into(),
            tag: "nope".into(),
            message: "Image or tag not found".into(),
        };
        assert_eq!(err.to_string(), "Image or tag not found");
    }

    #[test]
    fn unauthorized() {
        let err = Error::Unauthorized {
            url: "https://registry.example.com/v2".into(),
        };
        assert!(err.to_string().starts_with("authentication not supported"));
    }

    #[test]
    fn status() {
        let err = Error::Status {
            url: "http://localhost/v2/_catalog".into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "request to http://localhost/v2/_catalog returned status 500 Internal Server Error"
        );
    }
}
