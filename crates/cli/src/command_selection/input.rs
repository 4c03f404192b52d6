use std::io::{stderr, stdin, BufRead, Write};

use unitcuts_core::collaborators::Prompter;
use unitcuts_core::error::Result;

/// Hint appended to every yes/no question.
const ANSWER_HINT: &str = "([Y]es/[n]o)";

/// Asks questions on stderr and reads the answer from stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, question: &str) -> Result<Option<String>> {
        let mut stderr = stderr();
        write!(stderr, "{question} {ANSWER_HINT}: ")?;
        stderr.flush()?;

        read_answer(&mut stdin().lock())
    }
}

/// Reads one line, `None` once the input is closed.
fn read_answer<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        // Move off the prompt line so the abort message starts fresh
        eprintln!();
        return Ok(None);
    }

    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_single_line() {
        let mut input = Cursor::new("y\nn\n");
        assert_eq!(read_answer(&mut input).unwrap(), Some("y\n".to_string()));
        assert_eq!(read_answer(&mut input).unwrap(), Some("n\n".to_string()));
    }

    #[test]
    fn test_empty_line_is_an_answer() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_answer(&mut input).unwrap(), Some("\n".to_string()));
    }

    #[test]
    fn test_closed_input_is_none() {
        let mut input = Cursor::new("");
        assert_eq!(read_answer(&mut input).unwrap(), None);
    }
}
