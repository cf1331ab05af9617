// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::api::Registry;
use crate::config::{Config, Locale};

use std::path::PathBuf;

use anyhow::Result;
use log::debug;
use structopt::StructOpt;

mod catalog;
mod inspect;
mod tags;

pub trait Command {
    fn execute(self, registry: &Registry) -> Result<()>;
}

#[derive(StructOpt, Debug)]
pub enum Cmd {
    Catalog(catalog::Catalog),
    Tags(tags::Tags),
    Inspect(inspect::Inspect),
}

impl Command for Cmd {
    fn execute(self, registry: &Registry) -> Result<()> {
        match self {
            Self::Catalog(cmd) => cmd.execute(registry),
            Self::Tags(cmd) => cmd.execute(registry),
            Self::Inspect(cmd) => cmd.execute(registry),
        }
    }
}

#[derive(StructOpt, Debug)]
#[structopt(about = "browse the contents of a docker registry")]
pub struct Main {
    /// The configuration file (default: ./config.json, if present)
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// The registry API url (e.g. https://registry.example.com/v2)
    #[structopt(short, long)]
    registry: Option<String>,

    /// Don't verify the registry's TLS certificate
    #[structopt(short = "k", long)]
    insecure: bool,

    /// The language of user-facing messages
    #[structopt(short, long)]
    language: Option<String>,

    /// The directory holding `<language>.json` message files
    #[structopt(long, parse(from_os_str), default_value = "locales")]
    locales: PathBuf,

    /// Seconds before a registry request is abandoned
    #[structopt(long)]
    timeout: Option<u64>,

    /// Log debug output (RUST_LOG takes precedence)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    #[structopt(subcommand)]
    cmd: Cmd,
}

impl Main {
    /// The file configuration with command line overrides applied
    fn config(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;

        if let Some(url) = &self.registry {
            config.registry_url = url.clone();
        }

        if self.insecure {
            config.check_tls = false;
        }

        if let Some(language) = &self.language {
            config.language = language.clone();
        }

        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        Ok(config)
    }

    pub fn execute(self) -> Result<()> {
        let config = self.config()?;
        let locale = Locale::load(&self.locales, &config.language);

        let registry = Registry::new(config.endpoint()?)?
            .with_not_found_message(locale.image_or_tag_not_found);

        debug!("browsing {}", registry.endpoint().host());
        self.cmd.execute(&registry)
    }
}
