//! Records output formatting for search command

use designkb_core::format::format_score;
use designkb_core::records::{csv_or_dash, escape_quotes, single_line};
use designkb_core::search::SearchReport;

/// Output in records format
pub fn output_records(report: &SearchReport) {
    println!(
        "H designkb=1 records=1 mode=search family={} partition={} query=\"{}\" results={}",
        report.partition.family(),
        report.partition,
        escape_quotes(&report.query),
        report.hits.len()
    );

    for hit in &report.hits {
        println!(
            "R {} {} score={} \"{}\" keywords={}",
            hit.rank,
            hit.id,
            format_score(hit.score),
            escape_quotes(&hit.title),
            csv_or_dash(&hit.keywords)
        );
        println!("B {} {}", hit.id, single_line(&hit.body));
    }
}
