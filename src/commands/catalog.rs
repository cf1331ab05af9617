// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::api::Registry;
use crate::formats::Tags;

use super::Command;

use std::io::{stdout, Write};

use anyhow::Result;
use log::warn;
use structopt::StructOpt;

/// List every repository of the registry with its tags
#[derive(StructOpt, Debug)]
pub struct Catalog {
    /// Only show repositories whose name contains this text (case-insensitive)
    #[structopt(short, long)]
    filter: Option<String>,
}

impl Catalog {
    fn wanted(&self, name: &str) -> bool {
        match &self.filter {
            Some(filter) => name.to_lowercase().contains(&filter.to_lowercase()),
            None => true,
        }
    }
}

impl Command for Catalog {
    fn execute(self, registry: &Registry) -> Result<()> {
        let catalog = registry.catalog();
        if let Some(e) = catalog.error() {
            warn!("repository list is incomplete: {}", e);
        }

        let repos: Vec<Tags> = catalog
            .repositories
            .iter()
            .filter(|name| self.wanted(name))
            .map(|name| {
                let tags = registry.tags(name);
                if tags.is_degraded() {
                    warn!("showing {} without tags", name);
                }
                tags.into_inner()
            })
            .collect();

        render(&repos, &mut stdout().lock())?;
        Ok(())
    }
}

fn render(repos: &[Tags], out: &mut impl Write) -> std::io::Result<()> {
    let width = repos.iter().map(|r| r.name.len()).max().unwrap_or_default();

    for repo in repos {
        writeln!(out, "{:width$}  {}", repo.name, repo.tags.join(" "), width = width)?;
    }

    Ok(())
}
