use std::path::Path;
use std::process::Command;

use crate::collaborators::{DirectoryIndex, SessionLauncher};
use crate::error::Result;
use crate::execution::{capture_stdout, describe, execute_command};

pub const ZOXIDE: &str = "zoxide";

/// Directories ranked by `zoxide`, best match first.
pub struct ZoxideIndex;

impl ZoxideIndex {
    fn command(query: Option<&str>) -> Command {
        let mut command = Command::new(ZOXIDE);
        command.args(["query", "--list"]);
        if let Some(query) = query {
            command.args(query.split_whitespace());
        }
        command
    }
}

impl DirectoryIndex for ZoxideIndex {
    fn directories(&self, query: Option<&str>) -> Result<Vec<String>> {
        let stdout = capture_stdout(Self::command(query))?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Spawns an interactive shell rooted at a directory. The parent keeps its
/// own working directory.
pub struct ShellLauncher {
    pub shell: String,
}

impl ShellLauncher {
    #[must_use]
    pub fn command(&self, root: &Path) -> Command {
        let mut command = Command::new(&self.shell);
        // Give `-i` argument to start an interactive shell,
        // which will make it read ~/.rc or ~/.profile or whatever file
        command.arg("-i").current_dir(root);
        command
    }
}

impl SessionLauncher for ShellLauncher {
    fn launch(&self, root: &Path) -> Result<i32> {
        let command = self.command(root);
        println!("Executing: {} (in {})", describe(&command), root.display());

        execute_command(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoxide_query_splits_keywords() {
        let command = ZoxideIndex::command(Some("proj  rust"));
        assert_eq!(describe(&command), "zoxide query --list proj rust");
    }

    #[test]
    fn test_zoxide_query_without_keywords() {
        let command = ZoxideIndex::command(None);
        assert_eq!(describe(&command), "zoxide query --list");
    }

    #[test]
    fn test_shell_launcher_sets_working_directory() {
        let launcher = ShellLauncher {
            shell: "/bin/zsh".to_string(),
        };
        let command = launcher.command(Path::new("/tmp"));
        assert_eq!(describe(&command), "/bin/zsh -i");
        assert_eq!(command.get_current_dir(), Some(Path::new("/tmp")));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_launcher_propagates_exit_code() {
        // `false` ignores `-i` and exits 1
        let launcher = ShellLauncher {
            shell: "false".to_string(),
        };
        assert_eq!(launcher.launch(Path::new("/")).unwrap(), 1);
    }
}
