use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SKULINK_LOG";

/// Installs the stderr subscriber. `SKULINK_LOG` takes an `EnvFilter`
/// directive and overrides `verbose`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("skulink=debug,skulink_server=debug,info")
        } else {
            EnvFilter::new("skulink=info,skulink_server=info,warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
