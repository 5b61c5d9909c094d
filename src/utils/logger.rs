use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per event, for batch runs that feed a log collector.
    Json,
}

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "travel_quote=debug,info"
    } else {
        "travel_quote=info"
    }
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Source locations only help when chasing a problem.
    let layer = fmt::layer()
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_crate_level() {
        assert_eq!(default_directive(false), "travel_quote=info");
        assert!(default_directive(true).starts_with("travel_quote=debug"));
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
