//! Logger setup shared by Realchat binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise every event at `default_level` or
/// above is shown, and the binary's own crate is always included.
///
/// # Arguments
///
/// * `bin_name` - Name of the binary (usually `env!("CARGO_BIN_NAME")`)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. "info")
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let directive = default_directive(bin_name, default_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();

    match result {
        Ok(()) => tracing::debug!("Logger initialized (fallback filter: {})", directive),
        Err(e) => eprintln!("Logger already initialized: {e}"),
    }
}

/// Build the fallback filter directive, e.g. `info,realchat_server=info`.
fn default_directive(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("{default_level},{crate_name}={default_level},tower_http={default_level}")
}
