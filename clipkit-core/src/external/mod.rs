// ============================================================================
// clipkit-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates every interaction with the external command-line
// tools. Argument lists are built as plain data (see `ffmpeg_builder`) and
// handed to a `ToolRunner`, which runs the tool to completion and returns
// its captured output.
//
// KEY COMPONENTS:
// - ToolRunner: trait seam between command construction and execution
// - SidecarRunner: production runner (ffmpeg-sidecar for ffmpeg, a plain
//   child process for ffprobe)
// - MockRunner: recording runner for tests (`test-mocks` feature)

use crate::error::{CoreResult, command_failed_error};

/// ffmpeg argument building, filter graphs and invocations
pub mod ffmpeg_builder;

/// ffmpeg/ffprobe execution
pub mod ffmpeg_executor;

/// ffprobe report parsing and probe queries
pub mod ffprobe_executor;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use ffmpeg_builder::{FfmpegArgs, FfmpegInvocation, VideoFilterChain, concat_filter_graph};
pub use ffmpeg_executor::SidecarRunner;
pub use ffprobe_executor::{
    AudioParams, ProbeReport, ProbeStream, StreamParams, VideoParams, get_resolution,
    get_stream_params, has_audio_stream, parse_frame_rate, probe_streams,
};

/// Captured result of one external tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// A successful run with the given stdout.
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and diagnostic text.
    #[must_use]
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turns a nonzero exit into an `ExternalTool` error carrying stderr verbatim.
    pub fn into_result(self, tool: &str) -> CoreResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(command_failed_error(tool, self.exit_code, self.stderr))
        }
    }
}

/// Runs the external tools synchronously.
///
/// Implementations must block until the tool exits and must not interpret
/// the exit code; callers decide what a nonzero exit means.
pub trait ToolRunner {
    /// Runs the transcoder with `args` (program name excluded).
    fn run_ffmpeg(&self, args: &[String]) -> CoreResult<ToolOutput>;

    /// Runs the stream-inspection tool with `args` (program name excluded).
    fn run_ffprobe(&self, args: &[String]) -> CoreResult<ToolOutput>;
}
