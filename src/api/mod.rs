// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

mod endpoint;
mod error;
mod fetched;
mod image;
mod registry;

#[cfg(test)]
mod mock;

pub use self::endpoint::{Credentials, Endpoint};
pub use self::error::Error;
pub use self::fetched::Fetched;
pub use self::image::Image;
pub use self::registry::Registry;
