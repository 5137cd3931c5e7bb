//! `designkb <query>` - search one partition of the knowledge base
//!
//! - exactly one of `--domain` / `--stack`
//! - `-n` bounds the result count (default from config, 5 out of the box)
//! - ranking: keyword matches > body matches, ties in declared order
//! - zero matches is not an error: report it and exit 0

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use designkb_core::config::Config;
use designkb_core::corpus::Partition;
use designkb_core::error::Result;
use designkb_core::search::{self, Query};

use self::format::{output_human, output_json, output_records};

/// Execute the search command
pub fn execute(cli: &Cli, config: &Config, partition: Partition) -> Result<()> {
    let start = Instant::now();

    let query = Query {
        text: cli.query.clone(),
        partition,
        top_n: cli.max_results.unwrap_or_else(|| config.default_top_n()),
    };
    let source = config.corpus_source(cli.corpus.as_deref());

    if cli.verbose {
        debug!(
            query = %query.text,
            family = %partition.family(),
            partition = %partition,
            top_n = query.top_n.get(),
            source = %source.describe(),
            "search_params"
        );
    }

    let report = search::execute(&query, &source, &config.search_options())?;

    match cli.format {
        OutputFormat::Human => output_human(cli, &report),
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Records => output_records(&report),
    }

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "execute_command");
    }

    Ok(())
}
