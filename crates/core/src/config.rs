//! Settings and path utilities for unitcuts.
//!
//! Settings are read from a YAML file. Every field is optional; a missing
//! file means all defaults. Command-line flags are applied on top by the
//! binary.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;

use crate::advice::ASPELL;
use crate::pipeline::{DEFAULT_CONFIRM_EXECUTION_PROMPT, DEFAULT_CONFIRM_SELECTION_PROMPT};

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.unitcuts/config.yml";

/// Default shell for sessions when neither the settings nor `$SHELL` name one
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Default prefix for commands that change system units
pub const DEFAULT_PRIVILEGE_COMMAND: &str = "sudo";

/// Which interactive selector to use.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// fzf when it is on `PATH`, the built-in list otherwise.
    #[default]
    Auto,
    Fzf,
    Builtin,
}

impl FromStr for SelectorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "fzf" => Ok(Self::Fzf),
            "builtin" => Ok(Self::Builtin),
            other => Err(format!(
                "unknown selector `{other}`, expected one of: auto, fzf, builtin"
            )),
        }
    }
}

impl Display for SelectorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Fzf => "fzf",
            Self::Builtin => "builtin",
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub selector: SelectorKind,
    /// `None` runs system unit actions without a prefix.
    pub privilege_command: Option<String>,
    pub user_units: bool,
    /// `None` disables the advisory spell-check.
    pub spell_checker: Option<String>,
    pub strict_actions: bool,
    pub confirm_selection_prompt: String,
    pub confirm_execution_prompt: String,
    pub shell: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selector: SelectorKind::default(),
            privilege_command: Some(DEFAULT_PRIVILEGE_COMMAND.to_string()),
            user_units: false,
            spell_checker: Some(ASPELL.to_string()),
            strict_actions: false,
            confirm_selection_prompt: DEFAULT_CONFIRM_SELECTION_PROMPT.to_string(),
            confirm_execution_prompt: DEFAULT_CONFIRM_EXECUTION_PROMPT.to_string(),
            shell: None,
        }
    }
}

impl Settings {
    /// Shell for new sessions: the configured one, then `$SHELL`, then
    /// [`DEFAULT_SHELL`].
    #[must_use]
    pub fn resolve_shell(&self, env_shell: Option<String>) -> String {
        self.shell
            .as_deref()
            .map(|shell| shellexpand::tilde(shell).to_string())
            .or(env_shell)
            .unwrap_or_else(|| DEFAULT_SHELL.to_string())
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use unitcuts_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".unitcuts/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-config.yml".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-config.yml"));
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.selector, SelectorKind::Auto);
        assert_eq!(settings.privilege_command.as_deref(), Some("sudo"));
        assert_eq!(settings.spell_checker.as_deref(), Some("aspell"));
        assert!(!settings.user_units);
        assert!(!settings.strict_actions);
    }

    #[test]
    fn test_resolve_shell_order() {
        let mut settings = Settings::default();
        assert_eq!(settings.resolve_shell(None), DEFAULT_SHELL);
        assert_eq!(
            settings.resolve_shell(Some("/bin/zsh".to_string())),
            "/bin/zsh"
        );

        settings.shell = Some("/usr/bin/fish".to_string());
        assert_eq!(
            settings.resolve_shell(Some("/bin/zsh".to_string())),
            "/usr/bin/fish"
        );
    }

    #[test]
    fn test_selector_kind_from_str() {
        assert_eq!("fzf".parse::<SelectorKind>(), Ok(SelectorKind::Fzf));
        assert_eq!("Builtin".parse::<SelectorKind>(), Ok(SelectorKind::Builtin));
        assert!("skim".parse::<SelectorKind>().is_err());
    }
}
