use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use ttr_config::{DEFAULT_CONFIG_FILE, GlobalArgs, Settings};

/// Settings from `--config`, else `ttr.toml` in the working directory, else defaults.
///
/// An explicit path must exist; the implicit file is optional.
pub(crate) fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    if let Some(path) = &global.config {
        return read_settings(path);
    }
    let implicit = Path::new(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        return read_settings(implicit);
    }
    debug!("no settings file; using defaults");
    Ok(Settings::default())
}

fn read_settings(path: &Path) -> Result<Settings> {
    let settings = Settings::from_file(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}
