use anyhow::{Context, Result};
use std::path::Path;
use typesketch_config::Settings;

/// Load settings from a JSON file, or fall back to the built-in
/// defaults. Loaded settings are validated before use.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse settings file {}", path.display()))?
        }
        None => Settings::new(),
    };

    settings.validate().context("settings failed validation")?;
    Ok(settings)
}
