// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

mod api;
mod commands;
mod config;
mod formats;
mod pretty;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

fn level(verbose: u8) -> &'static str {
    if verbose == 0 {
        "warn"
    } else {
        "debug"
    }
}

fn logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let main = commands::Main::from_args();
    logging(main.verbose);
    main.execute()
}

#[cfg(test)]
mod test {
    use super::level;

    #[test]
    fn verbosity() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "debug");
        assert_eq!(level(3), "debug");
    }
}
