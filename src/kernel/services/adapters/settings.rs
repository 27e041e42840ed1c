use std::path::Path;

use crate::kernel::services::ports::settings::Settings;

pub fn parse_settings(data: &str) -> Result<Settings, serde_json::Error> {
    serde_json::from_str(data)
}

/// Reads settings from `path`; a missing or malformed file yields `None`.
pub fn load_settings(path: &Path) -> Option<Settings> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) => {
            tracing::debug!(path = %path.display(), error = %error, "settings not readable");
            return None;
        }
    };

    match parse_settings(&data) {
        Ok(settings) => Some(settings),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "invalid settings file");
            None
        }
    }
}

/// Writes the default settings to `path` unless the file already exists.
pub fn ensure_settings_file(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(&Settings::default())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/settings.rs"]
mod tests;
