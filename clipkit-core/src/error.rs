// ============================================================================
// clipkit-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for clipkit-core
//
// A single error enum covers the three stages every utility goes through:
// validating inputs, running the external tools and interpreting what the
// tools report. The CLI maps each variant onto a process exit code through
// `CoreError::exit_code`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for validation and usage failures.
pub const EXIT_VALIDATION: i32 = 1;

/// Exit code for failures of the external tools.
pub const EXIT_EXTERNAL: i32 = 2;

/// Errors produced by clipkit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("File '{}' does not exist.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Please provide at least two video files to concatenate (got {0}).")]
    NotEnoughInputs(usize),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed while waiting for {0}: {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("{tool} failed ({}): {stderr}", describe_exit(.exit_code))]
    ExternalTool {
        tool: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to parse ffprobe output: {0}")]
    ProbeParse(String),

    #[error("No video stream found in {}", .0.display())]
    NoVideoStream(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipkit-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Process exit code for this error.
    ///
    /// Validation failures exit with 1 and happen before any external tool
    /// is invoked. Everything that involves running a tool exits with 2.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::InputNotFound(_)
            | CoreError::NotEnoughInputs(_)
            | CoreError::PathError(_) => EXIT_VALIDATION,
            _ => EXIT_EXTERNAL,
        }
    }

    /// True when the error was raised before any external invocation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.exit_code() == EXIT_VALIDATION
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Builds an `ExternalTool` error from a tool name, exit code and captured stderr.
pub fn command_failed_error(
    tool: impl Into<String>,
    exit_code: Option<i32>,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::ExternalTool {
        tool: tool.into(),
        exit_code,
        stderr: stderr.into(),
    }
}

/// Builds a `CommandStart` error, or `DependencyNotFound` when the binary is missing.
pub fn command_start_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    let tool = tool.into();
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(tool)
    } else {
        CoreError::CommandStart(tool, err)
    }
}

/// Builds a `CommandWait` error.
pub fn command_wait_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(tool.into(), err)
}
