//! The `jump` recipe: pick a frequently used directory and open a shell there.

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::collaborators::{DirectoryIndex, Selector, SessionLauncher};
use crate::error::Result;
use crate::outcome::{AbortReason, Outcome};

/// Selector label for the directory list.
pub const DIRECTORY_SELECT_PROMPT: &str = "dir";

pub struct Jump<'a> {
    pub index: &'a dyn DirectoryIndex,
    pub selector: &'a dyn Selector,
    pub launcher: &'a dyn SessionLauncher,
}

impl Jump<'_> {
    /// Lists directories matching `query`, lets the user pick one and
    /// launches a session rooted there.
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails.
    pub fn run<W: Write>(&self, query: Option<&str>, messages: &mut W) -> Result<Outcome> {
        let query = query.filter(|q| !q.trim().is_empty());
        let directories = self.index.directories(query)?;
        debug!("{} candidate directories", directories.len());

        if directories.is_empty() {
            writeln!(messages, "{}", AbortReason::NoCandidatesFound)?;
            return Ok(Outcome::Aborted(AbortReason::NoCandidatesFound));
        }

        let selection = self
            .selector
            .select(DIRECTORY_SELECT_PROMPT, &directories)?
            .filter(|s| !s.trim().is_empty());

        let Some(directory) = selection else {
            writeln!(messages, "{}", AbortReason::NoSelectionMade)?;
            return Ok(Outcome::Aborted(AbortReason::NoSelectionMade));
        };

        let code = self.launcher.launch(Path::new(&directory))?;

        Ok(Outcome::Executed(code))
    }
}
