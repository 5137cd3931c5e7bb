use std::num::NonZeroUsize;

use designkb_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a positive result count
pub fn parse_count(s: &str) -> std::result::Result<NonZeroUsize, String> {
    s.parse::<NonZeroUsize>()
        .map_err(|_| format!("'{}' is not a positive integer", s))
}
