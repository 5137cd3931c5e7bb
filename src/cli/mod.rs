//! CLI argument parsing for designkb
//!
//! Uses clap for argument parsing. The query is positional; exactly one of
//! `--domain` / `--stack` selects the partition. Selector values are kept as
//! raw strings here and validated by the core selector so that unknown or
//! conflicting values produce the tool's own diagnostics.

pub mod parse;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

pub use designkb_core::format::OutputFormat;
use parse::{parse_count, parse_format};

/// designkb - search the design knowledge base by domain or stack
#[derive(Parser, Debug)]
#[command(name = "designkb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Free-text search query
    pub query: String,

    /// Design domain to search (style, typography, color, product, landing, chart, ux, prompt)
    #[arg(long, short = 'd')]
    pub domain: Option<String>,

    /// Technology stack to search (html-tailwind, react, nextjs, vue, nuxtjs, nuxt-ui, svelte, swiftui, react-native, flutter)
    #[arg(long, short = 's')]
    pub stack: Option<String>,

    /// Maximum number of results (positive integer)
    #[arg(short = 'n', long = "max-results", value_parser = parse_count)]
    pub max_results: Option<NonZeroUsize>,

    /// Output format
    #[arg(long, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Corpus root directory overriding the built-in data
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Config file path (defaults to ~/.config/designkb/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress the "no results" notice
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, designkb_core=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}
