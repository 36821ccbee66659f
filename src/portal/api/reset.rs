use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::response::Html;
use tracing::info;

use crate::infrastructure::config::DeviceConfig;
use crate::portal::error::PortalError;
use crate::portal::pages::portal_page;
use crate::portal::router::AppState;

/// `GET /api/config/reset` — drop the stored configuration.
///
/// On the device this also disconnects from the WLAN; here the live
/// state simply falls back to defaults.
pub async fn reset_device(State(state): State<Arc<AppState>>) -> Result<Html<String>, PortalError> {
    state.store.reset()?;

    let config = {
        let mut guard = state.config.write().expect("config lock poisoned");
        *guard = DeviceConfig::default();
        guard.clone()
    };
    state.relay_on.store(false, Ordering::Relaxed);

    info!("Device configuration reset to defaults");
    Ok(Html(portal_page(&config, "")))
}
