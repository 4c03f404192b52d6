use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use log::debug;

use crate::collaborators::Selector;
use crate::error::{Error, Result};

pub const FZF: &str = "fzf";

/// fzf exit code when nothing matched the query.
const NO_MATCH: i32 = 1;
/// fzf exit code when the user pressed escape or ctrl-c.
const INTERRUPTED: i32 = 130;

/// Single-choice selection through `fzf`.
///
/// Items are written to fzf's stdin; the picked line comes back on stdout.
/// fzf draws its interface on the controlling terminal, so stderr is left
/// attached.
#[derive(Default)]
pub struct FzfSelector;

impl FzfSelector {
    fn command(prompt: &str) -> Command {
        let mut command = Command::new(FZF);
        command
            .arg("--prompt")
            .arg(format!("{prompt}> "))
            .arg("--no-multi")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        command
    }
}

impl Selector for FzfSelector {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<String>> {
        let mut child = Self::command(prompt).spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            let list = items.join("\n");
            match stdin.write_all(list.as_bytes()) {
                // fzf may exit before reading everything
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                result => result?,
            }
            // Dropping stdin closes the pipe so fzf sees the end of the list
        }

        let output = child.wait_with_output()?;

        match output.status.code() {
            Some(0) => {}
            Some(NO_MATCH | INTERRUPTED) => {
                debug!("fzf returned without a selection ({})", output.status);
                return Ok(None);
            }
            _ => return Err(Error::command_failed(FZF, output.status)),
        }

        Ok(parse_selection(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// First non-blank line of fzf output, trimmed.
fn parse_selection(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
