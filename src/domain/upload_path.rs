use std::fmt;
use std::path::{Component, Path};

/// Directory inside the device filesystem that uploaded files land in.
///
/// Must be absolute (rooted at the device FS, not the host FS) and free
/// of `..`/backslash segments so an upload can never escape the data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPath(String);

#[derive(Debug, thiserror::Error)]
pub enum UploadPathError {
    #[error("Upload path must start with '/', got: {0}")]
    NotAbsolute(String),

    #[error("Upload path must not contain '..' or '\\' segments: {0}")]
    UnsafeSegment(String),
}

impl UploadPath {
    pub fn new(path: impl Into<String>) -> Result<Self, UploadPathError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(UploadPathError::NotAbsolute(path));
        }
        if path.contains('\\') {
            return Err(UploadPathError::UnsafeSegment(path));
        }
        let has_unsafe = Path::new(&path)
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::CurDir));
        if has_unsafe {
            return Err(UploadPathError::UnsafeSegment(path));
        }

        // Normalize away a trailing slash; the root stays "/".
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Ok(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path relative to the data root, for joining onto a host
    /// directory. Empty for the root.
    pub fn relative(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl Default for UploadPath {
    fn default() -> Self {
        Self("/srv".to_string())
    }
}

impl fmt::Display for UploadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for UploadPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for UploadPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UploadPath::new(s).map_err(serde::de::Error::custom)
    }
}
