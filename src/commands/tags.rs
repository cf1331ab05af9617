// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::api::Registry;

use super::Command;

use anyhow::Result;
use log::warn;
use structopt::StructOpt;

/// List all tags for a given repository
#[derive(StructOpt, Debug)]
pub struct Tags {
    /// The repository name (e.g. golang/harbor)
    name: String,
}

impl Command for Tags {
    fn execute(self, registry: &Registry) -> Result<()> {
        let tags = registry.tags(&self.name);
        if let Some(e) = tags.error() {
            warn!("tag list of {} is incomplete: {}", self.name, e);
        }

        for tag in &tags.tags {
            println!("{}", tag);
        }

        Ok(())
    }
}
