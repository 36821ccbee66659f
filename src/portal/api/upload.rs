use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::info;

use crate::domain::UploadPath;
use crate::portal::error::PortalError;
use crate::portal::pages::portal_page;
use crate::portal::router::AppState;

/// Multipart field name the firmware form submits.
const FIRMWARE_FIELD: &str = "updateProgram";

/// Multipart field name the file-save form submits.
const SAVE_FILE_FIELD: &str = "saveFile";

/// `POST /api/upload/firmware` — stage an OTA firmware image.
///
/// The image is written next to the config file; flashing it is the
/// device's job, not the portal's.
pub async fn upload_firmware(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Html<String>, PortalError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FIRMWARE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| PortalError::Validation("No firmware file selected".to_string()))?
            .to_string();
        if !file_name.to_ascii_lowercase().ends_with(".bin") {
            return Err(PortalError::Validation(format!(
                "Expected a *.bin file, got: {file_name}"
            )));
        }

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(PortalError::Validation(format!("{file_name} is empty")));
        }

        let target = state.paths.firmware_file();
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &data).await?;

        info!(
            file = %file_name,
            bytes = data.len(),
            staged = %target.display(),
            "Firmware image staged"
        );
        return Ok(Html(portal_page(&state.config(), "")));
    }

    Err(PortalError::Validation(format!(
        "Missing '{FIRMWARE_FIELD}' field"
    )))
}

#[derive(Debug, Deserialize)]
pub struct UploadPathQuery {
    pub path: String,
}

/// `GET /api/upload/path?path=…` — set the directory file uploads land in.
pub async fn set_upload_path(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UploadPathQuery>,
) -> Result<Html<String>, PortalError> {
    let path = UploadPath::new(query.path).map_err(PortalError::validation)?;

    info!(path = %path, "Upload path set");
    let config = state.update_config(|config| config.upload_path = path)?;
    Ok(Html(portal_page(&config, "")))
}

/// `POST /api/upload/file` — save a file under the current upload path.
pub async fn save_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Html<String>, PortalError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(SAVE_FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| PortalError::Validation("No file selected".to_string()))?
            .to_string();
        validate_file_name(&file_name)?;

        let data = field.bytes().await?;
        let target = upload_target(&state, &file_name);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &data).await?;

        info!(
            file = %file_name,
            bytes = data.len(),
            saved = %target.display(),
            "File saved to device filesystem"
        );
        return Ok(Html(portal_page(&state.config(), "")));
    }

    Err(PortalError::Validation(format!(
        "Missing '{SAVE_FILE_FIELD}' field"
    )))
}

/// Join the upload directory and file name onto the data root.
///
/// The file name was validated to be a bare name and the upload path
/// rejects `..` segments at construction, so the result cannot escape
/// the root.
fn upload_target(state: &AppState, file_name: &str) -> PathBuf {
    let upload_path = state.config().upload_path;
    state
        .paths
        .data_dir
        .join(upload_path.relative())
        .join(file_name)
}

fn validate_file_name(name: &str) -> Result<(), PortalError> {
    if name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name == "."
        || name.contains("..")
    {
        return Err(PortalError::Validation(format!("Invalid file name: {name}")));
    }
    Ok(())
}
