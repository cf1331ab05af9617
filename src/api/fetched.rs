// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use super::Error;

use std::ops::Deref;

/// A value that may have been degraded by a failed fetch
///
/// Listing operations never fail outright: when the registry cannot be
/// queried they fall back to an empty value and keep the cause here, so an
/// empty result can be told apart from a failed one.
#[derive(Debug)]
pub struct Fetched<T> {
    value: T,
    error: Option<Error>,
}

impl<T> Fetched<T> {
    pub fn complete(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn degraded(value: T, error: Error) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Fetched<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
