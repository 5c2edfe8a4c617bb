//! Transformations and their execution.
//!
//! Each submodule plans one transformation: it validates the inputs, works
//! out the output path and builds the ffmpeg argument list. Planning never
//! runs ffmpeg itself (reversal and concatenation do consult ffprobe). The
//! planned `FfmpegInvocation` is then run once with `execute`.

/// Audio removal
pub mod remove_audio;

/// Audio-aware concatenation
pub mod concat;

/// Quality re-encode
pub mod quality;

/// Reversal with matched encoding parameters
pub mod reverse;

/// Upscale + sharpen and plain resize
pub mod upscale;

/// Folder-wide resize to 1080p
pub mod batch;

pub use batch::{BatchItem, BatchOutcome, BatchSummary, ResizeDecision, decide_resize, process_folder};
pub use concat::{ConcatRequest, concat_invocation, plan_concat};
pub use quality::plan_quality;
pub use remove_audio::plan_remove_audio;
pub use reverse::{plan_reverse, reverse_invocation};
pub use upscale::{plan_resize, plan_upscale_sharpen};

use crate::error::CoreResult;
use crate::external::{FfmpegInvocation, ToolRunner};

use std::path::PathBuf;

/// Runs a planned invocation to completion.
///
/// Returns the output path on success. A nonzero exit becomes an
/// `ExternalTool` error carrying ffmpeg's diagnostic text; any partially
/// written output is left on disk.
pub fn execute<R: ToolRunner + ?Sized>(runner: &R, invocation: &FfmpegInvocation) -> CoreResult<PathBuf> {
    runner
        .run_ffmpeg(&invocation.args)?
        .into_result("ffmpeg")?;
    log::debug!("ffmpeg wrote {}", invocation.output_path.display());
    Ok(invocation.output_path.clone())
}
