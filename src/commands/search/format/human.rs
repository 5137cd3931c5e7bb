//! Human-readable output formatting for search command

use crate::cli::Cli;
use designkb_core::format::format_score;
use designkb_core::search::SearchReport;

/// Output in human-readable format
pub fn output_human(cli: &Cli, report: &SearchReport) {
    let partition = report.partition;

    if report.hits.is_empty() {
        if !cli.quiet {
            println!(
                "No results found for '{}' in {} '{}'",
                report.query,
                partition.family(),
                partition
            );
        }
        return;
    }

    let noun = if report.hits.len() == 1 {
        "result"
    } else {
        "results"
    };
    println!(
        "Found {} {} for '{}' in {} '{}'",
        report.hits.len(),
        noun,
        report.query,
        partition.family(),
        partition
    );

    for hit in &report.hits {
        println!();
        println!(
            "{}. {} [{}] (score {})",
            hit.rank,
            hit.title,
            hit.id,
            format_score(hit.score)
        );
        if !hit.keywords.is_empty() {
            println!("   keywords: {}", hit.keywords.join(", "));
        }
        if cli.verbose {
            println!("   matched: {}", hit.matched_terms.join(", "));
        }
        for line in hit.body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            println!("   {}", line);
        }
    }
}
