// Process-backed unit enumeration and execution through `systemctl`.

use std::process::Command;

use crate::action::ActionChoice;
use crate::collaborators::{Executor, UnitEnumerator};
use crate::error::Result;
use crate::execution::{capture_stdout, describe, execute_command};

pub const SYSTEMCTL: &str = "systemctl";

/// Lists service units, including inactive ones.
pub struct SystemctlEnumerator {
    /// Target the user manager (`--user`) rather than the system one.
    pub user: bool,
}

impl SystemctlEnumerator {
    fn command(&self) -> Command {
        let mut command = Command::new(SYSTEMCTL);
        if self.user {
            command.arg("--user");
        }
        // --plain drops the tree glyphs, --no-legend the header and footer
        command.args([
            "list-units",
            "--type=service",
            "--all",
            "--plain",
            "--no-legend",
            "--no-pager",
        ]);
        command
    }
}

impl UnitEnumerator for SystemctlEnumerator {
    fn list_units(&self) -> Result<Vec<String>> {
        let stdout = capture_stdout(self.command())?;

        Ok(stdout.lines().map(str::to_string).collect())
    }
}

/// Runs `[privilege] systemctl [--user] <action> <unit>`.
pub struct SystemctlExecutor {
    pub user: bool,
    /// Prefix such as `sudo`. Ignored for user units.
    pub privilege_command: Option<String>,
    /// Print the command instead of running it.
    pub dry_run: bool,
}

impl SystemctlExecutor {
    #[must_use]
    pub fn command(&self, action: &ActionChoice, unit: &str) -> Command {
        let mut command = match (&self.privilege_command, self.user) {
            (Some(privilege), false) => {
                let mut command = Command::new(privilege);
                command.arg(SYSTEMCTL);
                command
            }
            _ => Command::new(SYSTEMCTL),
        };

        if self.user {
            command.arg("--user");
        }

        command.args(action.systemctl_args()).arg(unit);
        command
    }
}

impl Executor for SystemctlExecutor {
    fn execute(&self, action: &ActionChoice, unit: &str) -> Result<i32> {
        let command = self.command(action, unit);

        println!("Executing: {}", describe(&command));

        if self.dry_run {
            eprintln!("Dry run is specified, exiting without executing.");
            return Ok(0);
        }

        execute_command(command)
    }
}
