mod clock_mode;
mod led_color;
mod time_settings;
mod upload_path;
mod utc_offset;
mod wifi_credentials;

pub use clock_mode::{ClockMode, ClockModeError};
pub use led_color::LedColor;
pub use time_settings::TimeSettings;
pub use upload_path::{UploadPath, UploadPathError};
pub use utc_offset::{UtcOffset, UtcOffsetError};
pub use wifi_credentials::{CredentialsError, Passphrase, Ssid, WifiCredentials};
