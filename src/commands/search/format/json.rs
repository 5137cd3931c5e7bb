//! JSON output formatting for search command

use designkb_core::error::Result;
use designkb_core::search::SearchReport;

/// Output in JSON format
pub fn output_json(report: &SearchReport) -> Result<()> {
    let output = serde_json::json!({
        "query": report.query,
        "family": report.partition.family(),
        "partition": report.partition.as_str(),
        "count": report.hits.len(),
        "results": report.hits,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
