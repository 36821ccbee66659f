use std::path::PathBuf;

use anyhow::Result;

use crate::infrastructure::config::ConfigStore;
use crate::infrastructure::paths::PortalPaths;

pub fn execute(config_dir: Option<PathBuf>) -> Result<()> {
    let paths = PortalPaths::new(config_dir, None);
    let store = ConfigStore::new(paths.config_file());
    let config = store.load()?;

    if store.path().exists() {
        println!("Device configuration: {}", store.path().display());
    } else {
        println!("Device configuration: not saved yet (showing defaults)");
    }

    println!("  LEDs: {}", config.leds);
    match &config.wifi {
        Some(wifi) => println!("  WLAN: {}", wifi.ssid()),
        None => println!("  WLAN: not configured (device stays in AP mode)"),
    }
    println!("  Clock: {} ({})", config.time.utc_offset, config.time.mode);
    println!("  Upload path: {}", config.upload_path);

    let firmware = paths.firmware_file();
    if firmware.exists() {
        println!("  Staged firmware: {}", firmware.display());
    }

    Ok(())
}
