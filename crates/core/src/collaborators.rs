//! Interfaces to the external programs the recipes drive.
//!
//! Each recipe talks to its collaborators through these traits so the flow
//! can be exercised without a service manager, a terminal or a fuzzy finder.
//! Process-backed implementations live in [`crate::systemctl`],
//! [`crate::fzf`], [`crate::advice`] and [`crate::session`].

use std::path::Path;

use crate::action::ActionChoice;
use crate::error::Result;

/// Lists service units. Each record is one line of enumerator output whose
/// first whitespace-delimited token is the unit name.
pub trait UnitEnumerator {
    fn list_units(&self) -> Result<Vec<String>>;
}

/// Presents a list and returns the chosen entry, or `None` when the user
/// cancels or picks nothing.
pub trait Selector {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<String>>;
}

/// Asks a free-text question. `None` means the input stream is closed.
pub trait Prompter {
    fn ask(&self, question: &str) -> Result<Option<String>>;
}

/// Advisory check run against a selection. An empty list means no advice.
pub trait Advisor {
    fn suggestions(&self, token: &str) -> Result<Vec<String>>;
}

/// Used when no spell-checker is available.
pub struct NoAdvice;

impl Advisor for NoAdvice {
    fn suggestions(&self, _token: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Performs the state change on a unit and reports the exit code.
pub trait Executor {
    fn execute(&self, action: &ActionChoice, unit: &str) -> Result<i32>;
}

/// Lists directories known to the directory-jump tool.
pub trait DirectoryIndex {
    fn directories(&self, query: Option<&str>) -> Result<Vec<String>>;
}

/// Starts a new interactive session rooted at a directory and waits for it.
pub trait SessionLauncher {
    fn launch(&self, root: &Path) -> Result<i32>;
}
