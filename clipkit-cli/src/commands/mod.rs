//! Command implementations for the clipkit binaries.
//!
//! Each submodule turns one binary's arguments into a plan, runs it and
//! returns the process exit code.

/// Audio removal (`clipkit-noaudio`)
pub mod noaudio;

/// Audio-aware concatenation (`clipkit-concat`)
pub mod concat;

/// Quality re-encode (`clipkit-highq`)
pub mod highq;

/// Reversal (`clipkit-reverse`)
pub mod reverse;

/// Upscale + sharpen (`clipkit-upsharpen`)
pub mod upsharpen;

/// Folder-wide resize to 1080p (`clipkit-batch-upscale`)
pub mod batch_upscale;

/// Resize to an explicit size (`clipkit-upscale`)
pub mod upscale;

use clipkit_core::{CoreResult, FfmpegInvocation, ToolConfig, ToolRunner, execute};

use crate::output::{print_command, print_error, print_success};

/// What to print for the outcome of one transformation.
pub struct Messages {
    /// Printed before the output path, e.g. "Audio removed successfully."
    pub success: &'static str,
    /// Printed above the tool's diagnostic text, e.g. "Error removing audio"
    pub failure: &'static str,
}

/// Runs a planned transformation and reports it.
///
/// Planning errors are printed without running anything. Returns 0 on
/// success, otherwise the error's exit code.
pub fn run_planned<R: ToolRunner + ?Sized>(
    runner: &R,
    plan: CoreResult<FfmpegInvocation>,
    tools: &ToolConfig,
    messages: &Messages,
) -> i32 {
    let invocation = match plan {
        Ok(invocation) => invocation,
        Err(e) => {
            print_error(messages.failure, &e);
            return e.exit_code();
        }
    };

    print_command(&invocation.command_line(&tools.ffmpeg_path));
    match execute(runner, &invocation) {
        Ok(output) => {
            print_success(&format!(
                "{} Output saved to '{}'.",
                messages.success,
                output.display()
            ));
            0
        }
        Err(e) => {
            print_error(messages.failure, &e);
            e.exit_code()
        }
    }
}
