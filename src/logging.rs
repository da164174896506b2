use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "mobihw=warn";
const VERBOSE_FILTER: &str = "mobihw=debug";

/// Route diagnostics to stderr so stdout stays parseable under `--json`.
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .try_init();
}
