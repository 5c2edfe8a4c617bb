//! Audio removal: copy the video stream as-is and drop audio.

use crate::config::{RemoveAudioConfig, ToolConfig};
use crate::error::CoreResult;
use crate::external::{FfmpegArgs, FfmpegInvocation};
use crate::utils::{ensure_input_exists, resolve_output_path};

use std::path::Path;

/// Plans `ffmpeg -i IN -c:v copy -an OUT`.
pub fn plan_remove_audio(
    input: &Path,
    output: Option<&Path>,
    config: &RemoveAudioConfig,
    tools: &ToolConfig,
) -> CoreResult<FfmpegInvocation> {
    ensure_input_exists(input)?;
    let output = resolve_output_path(input, output, &config.suffix)?;

    Ok(FfmpegArgs::new(tools)
        .input(input)
        .opt("-c:v", config.video_codec.as_str())
        .flag("-an")
        .output(&output))
}
