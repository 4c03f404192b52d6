//! Advisory spell-check of a selection through `aspell`'s pipe mode.
//!
//! In pipe mode (`aspell -a`) aspell prints a banner line, then one line per
//! word of input: `*` for a known word, `& word count offset: a, b, c` for a
//! misspelled word with suggestions and `# word offset` when it has none.
//! A blank line ends the results for one input line.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use itertools::Itertools;
use log::debug;

use crate::collaborators::Advisor;
use crate::error::{Error, Result};

pub const ASPELL: &str = "aspell";

pub struct AspellAdvisor {
    program: String,
}

impl AspellAdvisor {
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-a")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        command
    }
}

impl Advisor for AspellAdvisor {
    fn suggestions(&self, token: &str) -> Result<Vec<String>> {
        let mut child = self.command().spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // `^` makes aspell check the rest of the line literally
            match writeln!(stdin, "^{token}") {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                result => result?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::command_failed(&self.program, output.status));
        }

        let suggestions = parse_pipe_output(&String::from_utf8_lossy(&output.stdout));
        debug!("{} suggestion(s) for `{token}`", suggestions.len());

        Ok(suggestions)
    }
}

/// Collects the suggestions from every `&` line, dropping duplicates.
#[must_use]
pub fn parse_pipe_output(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix("& "))
        .filter_map(|rest| rest.split_once(": "))
        .flat_map(|(_, suggestions)| suggestions.split(", "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "@(#) International Ispell Version 3.1.20 (but really Aspell 0.60.8.1)\n";

    #[test]
    fn test_known_words_have_no_suggestions() {
        let output = format!("{BANNER}*\n\n");
        assert!(parse_pipe_output(&output).is_empty());
    }

    #[test]
    fn test_misspelled_word_suggestions() {
        let output = format!("{BANNER}& nginx 3 1: engine, Nginx, gin\n*\n\n");
        assert_eq!(parse_pipe_output(&output), ["engine", "Nginx", "gin"]);
    }

    #[test]
    fn test_word_without_suggestions() {
        let output = format!("{BANNER}# sshd 1\n*\n\n");
        assert!(parse_pipe_output(&output).is_empty());
    }

    #[test]
    fn test_suggestions_across_words_are_deduplicated() {
        let output = format!("{BANNER}& foo 2 1: for, fool\n& fooo 2 5: fool, food\n\n");
        assert_eq!(parse_pipe_output(&output), ["for", "fool", "food"]);
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let advisor = AspellAdvisor::new("/nonexistent/aspell");
        assert!(advisor.suggestions("nginx").is_err());
    }
}
