use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::portal::error::PortalError;
use crate::portal::router::AppState;

#[derive(Debug, Deserialize)]
pub struct RelayQuery {
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RelayStatus {
    pub status: &'static str,
    pub relay: &'static str,
}

/// `GET /api/gpio/relay?state=ON|OFF` — switch or read the relay line.
pub async fn relay(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RelayQuery>,
) -> Result<Json<RelayStatus>, PortalError> {
    if let Some(requested) = query.state.as_deref() {
        let on = match requested {
            "ON" => true,
            "OFF" => false,
            other => {
                return Err(PortalError::Validation(format!(
                    "Expected state=ON or state=OFF, got: {other}"
                )));
            }
        };
        state.relay_on.store(on, Ordering::Relaxed);
        info!(relay = requested, "Relay switched");
    }

    let relay = if state.relay_on.load(Ordering::Relaxed) {
        "ON"
    } else {
        "OFF"
    };
    Ok(Json(RelayStatus {
        status: "OK",
        relay,
    }))
}

#[derive(Debug, Serialize)]
pub struct ButtonStatus {
    pub status: &'static str,
    pub pressed: bool,
}

/// `GET /api/gpio/buttonState` — report the button line.
pub async fn button_state(State(state): State<Arc<AppState>>) -> Json<ButtonStatus> {
    let pressed = state.button_pressed.load(Ordering::Relaxed);
    debug!(pressed, "Button state read");
    Json(ButtonStatus {
        status: "OK",
        pressed,
    })
}
