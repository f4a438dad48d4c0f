//! Error types for mediaprobe-av.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing a media file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The probe binary could not be found, so nothing was run.
    #[error("missing dependency: {tool} is not installed or not on PATH")]
    DependencyMissing { tool: String },

    /// The probe binary could not be run, or exited unsuccessfully.
    #[error("{tool} failed: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: ProcessError,
    },

    /// The probe ran but its output was not the JSON we expected.
    #[error("failed to parse {tool} output: {source}")]
    Parse {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a subprocess run did not produce usable output.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// Spawning or waiting on the process failed at the OS level.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The process ran to completion with a failing status.
    #[error("exited with {}: {}", exit_description(.code), .stderr.trim())]
    Exit { code: Option<i32>, stderr: String },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Create a dependency missing error.
    pub fn dependency_missing(tool: impl Into<String>) -> Self {
        Self::DependencyMissing { tool: tool.into() }
    }

    /// Create a tool failure error.
    pub fn tool_failed(tool: impl Into<String>, source: impl Into<ProcessError>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            source: source.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            tool: tool.into(),
            source,
        }
    }
}
