use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{LedColor, TimeSettings, UploadPath, WifiCredentials};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Persisted device configuration, everything the portal's forms set.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceConfig {
    // Kept before the table-valued fields so the TOML serializer emits
    // it at the top level.
    #[serde(default)]
    pub upload_path: UploadPath,

    #[serde(default)]
    pub leds: LedColor,

    /// WLAN the button joins after setup. `None` while the device is
    /// still in access-point mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi: Option<WifiCredentials>,

    #[serde(default)]
    pub time: TimeSettings,
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn load(&self) -> Result<DeviceConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(DeviceConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, config: &DeviceConfig) -> Result<(), ConfigError> {
        self.ensure_config_dir()?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove the persisted configuration; the next load yields defaults.
    pub fn reset(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockMode, UtcOffset};

    fn store_in(dir: &std::path::Path) -> ConfigStore {
        ConfigStore::new(dir.join("config.toml"))
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = store_in(tmp.path()).load().unwrap();
        assert_eq!(config, DeviceConfig::default());
        assert_eq!(config.upload_path.as_str(), "/srv");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let config = DeviceConfig {
            leds: LedColor::new(255, 80, 0),
            wifi: Some(WifiCredentials::new("HomeNet", "hunter2hunter2").unwrap()),
            time: TimeSettings::new(ClockMode::Summer, UtcOffset::parse("5.30").unwrap()),
            upload_path: UploadPath::new("/srv/js").unwrap(),
        };

        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(tmp.path().join("nested").join("config.toml"));
        store.save(&DeviceConfig::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_reset_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        store.save(&DeviceConfig::default()).unwrap();
        store.reset().unwrap();
        assert!(!store.path().exists());

        // Resetting twice is fine.
        store.reset().unwrap();
    }

    #[test]
    fn test_rejects_invalid_stored_credentials() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        fs::write(
            store.path(),
            "[wifi]\nssid = \"a<b\"\npassword = \"hunter2hunter2\"\n",
        )
        .unwrap();
        assert!(store.load().is_err());
    }
}
