//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing with JSON output, filtered by `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Same as [`init`], with a caller-chosen fallback filter.
pub fn init_with_default(default_filter: &str) {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), default_filter);

    // JSON logs + timestamps; stdout stays free for the rendered dashboard.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_filter(directives: Option<&str>, default_filter: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_when_directives_are_missing() {
        let filter = build_filter(None, "warn");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn uses_supplied_directives() {
        let filter = build_filter(Some("vinolytics_dashboard=debug"), "info");
        assert_eq!(filter.to_string(), "vinolytics_dashboard=debug");
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init_with_default("error");
        init_with_default("error");
    }
}
