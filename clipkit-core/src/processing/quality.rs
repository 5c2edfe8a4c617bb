//! Quality re-encode with libx264 and AAC.

use crate::config::{QualityConfig, ToolConfig};
use crate::error::CoreResult;
use crate::external::{FfmpegArgs, FfmpegInvocation};
use crate::utils::{ensure_input_exists, resolve_output_path};

use std::path::Path;

/// Plans the re-encode.
///
/// A target video bitrate replaces the CRF; a bitrate of zero counts as
/// unset. Preset, profile and level are handed to ffmpeg unchecked.
pub fn plan_quality(
    input: &Path,
    output: Option<&Path>,
    config: &QualityConfig,
    tools: &ToolConfig,
) -> CoreResult<FfmpegInvocation> {
    ensure_input_exists(input)?;
    let output = resolve_output_path(input, output, &config.suffix)?;

    let args = FfmpegArgs::new(tools)
        .input(input)
        .opt("-c:v", config.video_codec.as_str())
        .opt("-profile:v", config.profile.as_str())
        .opt("-level:v", config.level.as_str())
        .opt("-preset", config.preset.as_str());

    let args = match config.video_bitrate_kbps.filter(|&kbps| kbps > 0) {
        Some(kbps) => args.opt("-b:v", format!("{kbps}k")),
        None => args.opt("-crf", config.crf.to_string()),
    };

    Ok(args
        .opt("-c:a", config.audio_codec.as_str())
        .opt("-b:a", format!("{}k", config.audio_bitrate_kbps))
        .opt("-movflags", "+faststart")
        .output(&output))
}
