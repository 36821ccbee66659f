use std::path::PathBuf;

/// All resolved paths needed by portal components.
/// Resolved once at startup, then passed to components via DI.
#[derive(Debug, Clone)]
pub struct PortalPaths {
    /// Directory holding `config.toml` and staged firmware.
    pub config_dir: PathBuf,
    /// Root of the device filesystem served back out and written to
    /// by file uploads.
    pub data_dir: PathBuf,
}

impl PortalPaths {
    pub fn new(config_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        let config_dir = config_dir.unwrap_or_else(default_config_dir);
        let data_dir = data_dir.unwrap_or_else(|| config_dir.join("data"));
        Self {
            config_dir,
            data_dir,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Where an uploaded firmware image is staged until the device
    /// picks it up.
    pub fn firmware_file(&self) -> PathBuf {
        self.config_dir.join("firmware").join("update.bin")
    }
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Could not find home directory")
        .join(".wifi-button")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_defaults_under_config_dir() {
        let paths = PortalPaths::new(Some(PathBuf::from("/tmp/wb")), None);
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/wb/data"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/wb/config.toml"));
        assert_eq!(
            paths.firmware_file(),
            PathBuf::from("/tmp/wb/firmware/update.bin")
        );
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let paths = PortalPaths::new(Some(PathBuf::from("/tmp/wb")), Some(PathBuf::from("/srv")));
        assert_eq!(paths.data_dir, PathBuf::from("/srv"));
    }
}
