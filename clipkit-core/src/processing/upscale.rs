//! Upscale + sharpen, and the plain resize shared with the batch upscaler.

use crate::config::{ResizeConfig, ToolConfig, UpscaleSharpenConfig};
use crate::error::CoreResult;
use crate::external::{FfmpegArgs, FfmpegInvocation, VideoFilterChain};
use crate::utils::{ensure_input_exists, resolve_output_path};

use std::path::Path;

/// Plans `scale=W:H,unsharp=K` followed by an x264/AAC encode.
pub fn plan_upscale_sharpen(
    input: &Path,
    output: Option<&Path>,
    config: &UpscaleSharpenConfig,
    tools: &ToolConfig,
) -> CoreResult<FfmpegInvocation> {
    ensure_input_exists(input)?;
    let output = resolve_output_path(input, output, &config.suffix)?;

    let filters = VideoFilterChain::new()
        .add_scale(config.width, config.height)
        .add_sharpen(&config.sharpen)
        .build();

    Ok(FfmpegArgs::new(tools)
        .input(input)
        .opt_if_some("-vf", filters)
        .opt("-c:v", config.video_codec.as_str())
        .opt("-crf", config.crf.to_string())
        .opt("-preset", config.preset.as_str())
        .opt("-c:a", config.audio_codec.as_str())
        .opt("-b:a", config.audio_bitrate.as_str())
        .opt("-movflags", "+faststart")
        .output(&output))
}

/// Plans a plain resize of `input` into `output`.
pub fn plan_resize(
    input: &Path,
    output: &Path,
    config: &ResizeConfig,
    tools: &ToolConfig,
) -> CoreResult<FfmpegInvocation> {
    ensure_input_exists(input)?;

    let filters = VideoFilterChain::new().add_scale(config.width, config.height).build();

    Ok(FfmpegArgs::new(tools)
        .input(input)
        .opt_if_some("-vf", filters)
        .opt("-c:v", config.video_codec.as_str())
        .opt("-preset", config.preset.as_str())
        .opt("-threads", config.threads.to_string())
        .opt("-c:a", config.audio_codec.as_str())
        .output(output))
}
