use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for the portal.
/// Priority: WIFI_BUTTON_LOG env > verbose flag > default (info)
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WIFI_BUTTON_LOG").unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("wifi_button={level},tower_http={level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
