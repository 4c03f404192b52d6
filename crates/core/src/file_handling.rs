//! Reading and validating the settings file.

use std::fs;
use std::path::Path;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::interpolation::{get_tokens, ACTION_KEY, UNIT_KEY};

fn read_settings_text(path: &str) -> Result<Option<String>> {
    if !Path::exists(Path::new(path)) {
        return Ok(None);
    }

    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) => Err(Error::io_error("settings".to_string(), path.to_string(), e)),
    }
}

fn validate_prompt(template: &str, allowed: &[&str]) -> Result<()> {
    for key in get_tokens(template)? {
        if !allowed.contains(&key.as_str()) {
            return Err(Error::UnknownPlaceholder {
                template: template.to_string(),
                key,
            });
        }
    }

    Ok(())
}

fn validate_settings(settings: &Settings) -> Result<()> {
    // The action is not known yet when the selection is confirmed
    validate_prompt(&settings.confirm_selection_prompt, &[UNIT_KEY])?;
    validate_prompt(&settings.confirm_execution_prompt, &[UNIT_KEY, ACTION_KEY])?;

    Ok(())
}

/// Loads and validates settings from a YAML file.
///
/// A missing or blank file yields [`Settings::default`].
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The YAML is malformed or has unknown fields
/// - A prompt template does not parse or uses an unknown placeholder
///
/// # Examples
///
/// ```no_run
/// use unitcuts_core::file_handling::get_settings;
///
/// let settings = get_settings("/home/me/.unitcuts/config.yml")?;
/// println!("Selector: {}", settings.selector);
/// # Ok::<(), unitcuts_core::error::Error>(())
/// ```
pub fn get_settings(path: &str) -> Result<Settings> {
    let Some(text) = read_settings_text(path)? else {
        log::debug!("No settings file at `{path}`, using defaults");
        return Ok(Settings::default());
    };

    if text.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&text).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            path.to_string(),
            e,
        )
    })?;

    validate_settings(&settings)?;

    Ok(settings)
}
