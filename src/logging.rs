//! Log subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used with `--verbose`.
pub const VERBOSE_DIRECTIVE: &str = "hello_service=debug,info";

/// Filter used when `RUST_LOG` is unset or blank.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Pick the filter directive from the verbose flag and `RUST_LOG`.
pub fn log_directive(verbose: bool, rust_log: Option<&str>) -> &str {
    if verbose {
        return VERBOSE_DIRECTIVE;
    }

    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => DEFAULT_DIRECTIVE,
    }
}

/// Install the global subscriber.
///
/// Reads `.env` before `RUST_LOG` so a level set there applies.
pub fn init(verbose: bool) {
    dotenvy::dotenv().ok();

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::try_new(log_directive(verbose, rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verbose_overrides_rust_log() {
        assert_eq!(log_directive(true, Some("warn")), VERBOSE_DIRECTIVE);
    }

    #[test]
    fn missing_or_blank_rust_log_uses_default() {
        assert_eq!(log_directive(false, None), DEFAULT_DIRECTIVE);
        assert_eq!(log_directive(false, Some("  ")), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn rust_log_from_dotenv_file_is_used() {
        let dotenv = b"APP_VERSION=2.0.0\nRUST_LOG=hello_service=trace,warn\n";
        let rust_log = dotenvy::from_read_iter(&dotenv[..])
            .filter_map(|item| item.ok())
            .find(|(key, _)| key == "RUST_LOG")
            .map(|(_, value)| value);

        assert_eq!(
            log_directive(false, rust_log.as_deref()),
            "hello_service=trace,warn"
        );
        assert!(EnvFilter::try_new(log_directive(false, rust_log.as_deref())).is_ok());
    }
}
