use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Fails with [`Error::MissingTool`] unless `tool` is on `PATH`.
///
/// # Errors
///
/// Returns [`Error::MissingTool`] when the lookup fails.
pub fn require_tool(tool: &str) -> Result<()> {
    which::which(tool)
        .map(|_| ())
        .map_err(|_| Error::missing_tool(tool))
}

/// Program and arguments of a command, for display and logging.
#[must_use]
pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs a command attached to the current terminal and waits for it.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or waited on. A
/// non-zero exit is not an error; its code is returned.
pub fn execute_command(mut command: Command) -> Result<i32> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!("Spawning `{}`", describe(command));

    let status = command.spawn()?.wait()?;

    Ok(exit_code(status))
}

/// Captures standard output of a command that must succeed.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned, exits unsuccessfully
/// or prints non-UTF-8 output.
pub fn capture_stdout(mut command: Command) -> Result<String> {
    let description = describe(&command);
    debug!("Capturing `{description}`");

    let output = command.stderr(Stdio::inherit()).output()?;

    if !output.status.success() {
        return Err(Error::command_failed(&description, output.status));
    }

    String::from_utf8(output.stdout).map_err(|_| Error::InvalidOutput(description))
}

/// Exit code of a finished process. Signals map to `128 + signal` on unix.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_missing_tool() {
        let result = require_tool("unitcuts-no-such-tool");
        assert!(
            matches!(result, Err(Error::MissingTool { ref tool }) if tool == "unitcuts-no-such-tool")
        );
    }

    #[test]
    fn test_describe_joins_program_and_args() {
        let mut command = Command::new("systemctl");
        command.args(["restart", "nginx.service"]);
        assert_eq!(describe(&command), "systemctl restart nginx.service");
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_command_propagates_exit_code() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 3"]);
        assert_eq!(execute_command(command).unwrap(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_stdout() {
        let mut command = Command::new("sh");
        command.args(["-c", "printf 'a\\nb\\n'"]);
        assert_eq!(capture_stdout(command).unwrap(), "a\nb\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_stdout_fails_on_nonzero_exit() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 1"]);
        assert!(matches!(
            capture_stdout(command),
            Err(Error::CommandFailed { .. })
        ));
    }
}
