use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Required tool `{}` was not found on PATH.", .tool)]
    MissingTool { tool: String },

    #[error("`{}` exited with {}.", .command, .status)]
    CommandFailed { command: String, status: String },

    #[error("I/O error: {}", _0)]
    Io(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    File {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing prompt template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering prompt template: {}", .0)]
    Render(#[from] RenderError),

    #[error("Prompt template `{}` uses unknown placeholder `{}`.", .template, .key)]
    UnknownPlaceholder { template: String, key: String },

    #[error("Unknown action `{}`. Expected one of: {}", .0, .1)]
    UnknownAction(String, String),

    #[error("Output of `{}` was not valid UTF-8.", .0)]
    InvalidOutput(String),
}

impl Error {
    pub fn missing_tool(tool: &str) -> Self {
        Self::MissingTool {
            tool: tool.to_string(),
        }
    }

    pub fn command_failed(command: &str, status: std::process::ExitStatus) -> Self {
        Self::CommandFailed {
            command: command.to_string(),
            status: status.to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::File {
            file_description,
            path,
            original,
        }
    }
}
