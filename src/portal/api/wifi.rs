use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use tracing::info;

use crate::domain::WifiCredentials;
use crate::portal::error::PortalError;
use crate::portal::pages::portal_page;
use crate::portal::router::AppState;

#[derive(Debug, Deserialize)]
pub struct SsidForm {
    pub ssid: String,
    pub ssid_pw: String,
}

/// `POST /api/config/ssid` — store WLAN credentials.
///
/// Rejected input does not fail the request; the page is re-rendered
/// with the reason in the form's message line, as the device firmware
/// does.
pub async fn set_ssid(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SsidForm>,
) -> Result<Html<String>, PortalError> {
    match WifiCredentials::new(form.ssid, form.ssid_pw) {
        Ok(credentials) => {
            info!(ssid = %credentials.ssid(), "WiFi credentials updated");
            let config = state.update_config(|config| config.wifi = Some(credentials))?;
            Ok(Html(portal_page(&config, "")))
        }
        Err(err) => {
            info!(reason = %err, "Rejected WiFi credentials");
            Ok(Html(portal_page(&state.config(), &err.to_string())))
        }
    }
}
