use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::Html,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::infrastructure::config::{ConfigError, ConfigStore, DeviceConfig};
use crate::infrastructure::paths::PortalPaths;

use super::api;
use super::pages::portal_page;

/// Largest accepted upload; firmware images for the button's MCU stay
/// well under this.
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Shared state for the router
pub struct AppState {
    pub store: ConfigStore,
    pub config: std::sync::RwLock<DeviceConfig>,
    pub paths: PortalPaths,

    // Mirror of the GPIO lines the JSON endpoints report. On the real
    // device these are pin reads; here they are plain flags.
    pub relay_on: AtomicBool,
    pub button_pressed: AtomicBool,
}

impl AppState {
    pub fn new(paths: PortalPaths) -> Result<Self, ConfigError> {
        let store = ConfigStore::new(paths.config_file());
        let config = store.load()?;

        Ok(Self {
            store,
            config: std::sync::RwLock::new(config),
            paths,
            relay_on: AtomicBool::new(false),
            button_pressed: AtomicBool::new(false),
        })
    }

    /// Snapshot of the live configuration.
    pub fn config(&self) -> DeviceConfig {
        self.config.read().expect("config lock poisoned").clone()
    }

    /// Mutate the live configuration and persist the result.
    pub fn update_config(
        &self,
        mutate: impl FnOnce(&mut DeviceConfig),
    ) -> Result<DeviceConfig, ConfigError> {
        let mut guard = self.config.write().expect("config lock poisoned");
        mutate(&mut guard);
        let snapshot = guard.clone();
        drop(guard);

        self.store.save(&snapshot)?;
        Ok(snapshot)
    }
}

/// Create the main router
pub fn create_router(state: Arc<AppState>) -> Router {
    let device_fs = ServeDir::new(&state.paths.data_dir);

    Router::new()
        .route("/", get(index))
        .route("/api/gpio/leds", post(api::leds::set_leds))
        .route("/api/config/ssid", post(api::wifi::set_ssid))
        .route("/api/time", post(api::time::set_time))
        .route("/api/upload/firmware", post(api::upload::upload_firmware))
        .route("/api/upload/path", get(api::upload::set_upload_path))
        .route("/api/upload/file", post(api::upload::save_file))
        .route("/api/config/reset", get(api::reset::reset_device))
        .route("/api/gpio/relay", get(api::gpio::relay))
        .route("/api/gpio/buttonState", get(api::gpio::button_state))
        .fallback_service(device_fs)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// `GET /` — the configuration page with live values filled in.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(portal_page(&state.config(), ""))
}
