// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::api::{Image, Registry};
use crate::pretty::{Created, Size};

use super::Command;

use std::io::{stdout, Write};

use anyhow::Result;
use structopt::StructOpt;

/// Show the details of one tag
#[derive(StructOpt, Debug)]
pub struct Inspect {
    /// The repository name (e.g. golang/harbor)
    name: String,

    /// The tag
    tag: String,
}

impl Command for Inspect {
    fn execute(self, registry: &Registry) -> Result<()> {
        let image = registry.image(&self.name, &self.tag)?;
        render(&image, &mut stdout().lock())?;
        Ok(())
    }
}

fn render(image: &Image, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Registry:     {}", image.registry())?;
    writeln!(out, "Name:         {}", image.name())?;
    writeln!(out, "Tag:          {}", image.tag())?;
    writeln!(out, "Digest:       {}", image.digest())?;
    writeln!(out, "Architecture: {}", image.architecture())?;
    writeln!(out, "Created:      {}", Created(image.created()))?;
    writeln!(out, "Size:         {}", Size(image.size()))?;
    writeln!(out, "Schema:       {} ({})", image.schema_version(), image.media_type())?;
    writeln!(
        out,
        "Config:       {}  {}",
        Size(image.config().size),
        image.config().digest
    )?;
    writeln!(out, "Layers:")?;

    for (i, layer) in image.layers().iter().enumerate() {
        writeln!(
            out,
            "  {:>3}  {:>8}  {}  {}",
            i + 1,
            Size(layer.size).to_string(),
            layer.digest,
            layer.media_type
        )?;
    }

    Ok(())
}
