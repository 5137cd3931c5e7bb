//! Command execution for designkb

pub mod search;

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use designkb_core::config::Config;
use designkb_core::error::Result;
use designkb_core::selector;

/// Validate the selector, load configuration and run the search
pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Selector problems are reported ahead of config problems
    let partition = selector::resolve(cli.domain.as_deref(), cli.stack.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    debug!(elapsed = ?start.elapsed(), ?config, "load_config");

    search::execute(cli, &config, partition)
}
