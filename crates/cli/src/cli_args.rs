//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate and applies the flags on top of the loaded settings.

use clap::{Parser, Subcommand};
use unitcuts_core::config::{SelectorKind, Settings};

/// Command-line arguments for the `uc` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use unitcuts_cli::cli_args::{Args, Recipe};
///
/// let args = Args::parse_from(["uc", "service", "nginx", "restart"]);
/// assert!(matches!(args.recipe, Recipe::Service { .. }));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(version, about = "Pick a service unit or a directory and act on it")]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the settings YAML.
    ///
    /// If not provided, defaults to `~/.unitcuts/config.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    /// Print the command that would run instead of running it.
    #[arg(long, short = 'd', action, global = true)]
    pub dry_run: bool,

    /// Answer yes to both confirmations without asking.
    #[arg(long, short = 'y', action, global = true)]
    pub yes: bool,

    /// Selector to use: auto, fzf or builtin.
    #[arg(long, global = true)]
    pub selector: Option<SelectorKind>,

    /// Act on user units (`systemctl --user`).
    #[arg(long, action, global = true)]
    pub user: bool,

    /// Refuse actions outside the built-in action list.
    #[arg(long, action, global = true)]
    pub strict_action: bool,

    /// Skip the spell-check of the selected unit.
    #[arg(long, action, global = true)]
    pub no_advice: bool,

    #[command(subcommand)]
    pub recipe: Recipe,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Recipe {
    /// Pick a service unit and run a systemctl action on it.
    #[command(alias = "svc")]
    Service {
        /// Case-insensitive regular expression narrowing the unit list.
        pattern: Option<String>,

        /// Action to run, skipping the action menu.
        ///
        /// Known actions: start, stop, restart, status, enable, disable,
        /// enable-now, disable-now.
        action: Option<String>,
    },

    /// Pick a frequently used directory and open a shell in it.
    Jump {
        /// Words passed to the directory index to narrow the list.
        query: Vec<String>,
    },
}

impl Args {
    /// Settings with the command-line flags applied.
    ///
    /// Flags only ever switch things on; a flag that is absent leaves the
    /// setting from the file untouched.
    #[must_use]
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(selector) = self.selector {
            settings.selector = selector;
        }
        if self.user {
            settings.user_units = true;
        }
        if self.strict_action {
            settings.strict_actions = true;
        }
        if self.no_advice {
            settings.spell_checker = None;
        }

        settings
    }
}
