use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use tracing::info;

use crate::domain::{ClockMode, TimeSettings, UtcOffset};
use crate::portal::error::PortalError;
use crate::portal::pages::portal_page;
use crate::portal::router::AppState;

#[derive(Debug, Deserialize)]
pub struct TimeForm {
    #[serde(rename = "sumTime")]
    pub sum_time: String,
    pub utc: String,
}

/// `POST /api/time` — store DST mode and UTC offset.
pub async fn set_time(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TimeForm>,
) -> Result<Html<String>, PortalError> {
    let mode = ClockMode::parse(&form.sum_time).map_err(PortalError::validation)?;
    let offset = UtcOffset::parse(&form.utc).map_err(PortalError::validation)?;

    let config = state.update_config(|config| config.time = TimeSettings::new(mode, offset))?;

    info!(mode = %mode, offset = %offset, "Clock settings updated");
    Ok(Html(portal_page(&config, "")))
}
