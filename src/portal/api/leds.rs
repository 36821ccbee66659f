use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use tracing::info;

use crate::domain::LedColor;
use crate::portal::error::PortalError;
use crate::portal::pages::portal_page;
use crate::portal::router::AppState;

#[derive(Debug, Deserialize)]
pub struct LedsForm {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// `POST /api/gpio/leds` — store the slider values and re-render the page.
pub async fn set_leds(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LedsForm>,
) -> Result<Html<String>, PortalError> {
    let color = LedColor::new(form.red, form.green, form.blue);
    let config = state.update_config(|config| config.leds = color)?;

    info!(leds = %config.leds, "LED color updated");
    Ok(Html(portal_page(&config, "")))
}
