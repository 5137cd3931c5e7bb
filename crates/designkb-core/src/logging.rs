use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Emit a trace event carrying the time elapsed since `$start`,
/// optionally with extra `field = value` pairs.
///
/// ```rust,ignore
/// trace_time!(start, "load_family", entries = corpus.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "designkb=debug",
        (false, None) => "designkb=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // DESIGNKB_LOG / RUST_LOG take precedence over flags
    let filter = EnvFilter::try_from_env("DESIGNKB_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("designkb={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    #[test]
    fn test_trace_time_accepts_fields() {
        let start = Instant::now();
        let hits = [1, 2, 3];
        crate::trace_time!(start, "plain");
        crate::trace_time!(start, "with_fields", results = hits.len(), first = hits[0]);
    }
}
