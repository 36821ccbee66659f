use std::path::PathBuf;

use anyhow::Result;

use crate::infrastructure::config::ConfigStore;
use crate::infrastructure::paths::PortalPaths;

pub fn execute(config_dir: Option<PathBuf>, force: bool) -> Result<()> {
    let paths = PortalPaths::new(config_dir, None);
    let store = ConfigStore::new(paths.config_file());

    if !store.path().exists() {
        println!("Nothing to reset; no configuration stored.");
        return Ok(());
    }

    if !force {
        println!("This will remove the stored device configuration:");
        println!("  - {}", store.path().display());
        println!("\nRun with --force to confirm, or press Ctrl+C to cancel.");
        return Ok(());
    }

    store.reset()?;
    println!("Device configuration removed.");

    Ok(())
}
