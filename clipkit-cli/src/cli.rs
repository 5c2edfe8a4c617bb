// clipkit-cli/src/cli.rs
//
// Defines the command-line argument structures using clap. Every binary has
// its own top-level `Parser` struct; the flags shared by all of them live in
// `CommonArgs` and are flattened in.

use clap::{Args, Parser};
use clipkit_core::ToolConfig;
use clipkit_core::config::{
    DEFAULT_PRESET, DEFAULT_QUALITY_AUDIO_BITRATE_KBPS, DEFAULT_QUALITY_CRF,
    DEFAULT_QUALITY_LEVEL, DEFAULT_QUALITY_PROFILE,
};
use clipkit_core::error::EXIT_VALIDATION;
use std::path::PathBuf;

/// Parses the process arguments into `T`.
///
/// Usage errors exit with the validation exit code; `--help` and
/// `--version` print to stdout and exit with 0.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_VALIDATION } else { 0 };
            // Nothing sensible is left to do if the terminal is gone
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

// --- Shared Flags ---

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable debug logging (shows probe results and fallbacks)
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite existing output files instead of failing
    #[arg(short = 'y', long)]
    pub overwrite: bool,
}

impl CommonArgs {
    /// Tool settings from `CLIPKIT_*` variables, with `--overwrite` applied on top.
    #[must_use]
    pub fn tool_config(&self) -> ToolConfig {
        let mut tools = ToolConfig::from_env();
        if self.overwrite {
            tools.overwrite = true;
        }
        tools
    }
}

// --- Per-Binary Arguments ---

#[derive(Parser, Debug)]
#[command(version, about = "Remove the audio from a video, keeping the video stream untouched")]
pub struct NoAudioArgs {
    /// Input video file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to <input>_noaudio.<ext>)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Concatenate videos end to end",
    long_about = "Concatenate videos end to end with ffmpeg's concat filter.\n\n\
                  The last argument is used as the output when it ends in .mp4, .mov, .mkv or .avi \
                  and at least two inputs precede it; otherwise the output is named after the first \
                  input with a _concat suffix. Audio is kept only when every input has an audio stream."
)]
pub struct ConcatArgs {
    /// Input videos followed by an optional output file
    #[arg(value_name = "VIDEO")]
    pub videos: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(version, about = "Re-encode a video at higher quality with libx264 and AAC")]
pub struct QualityArgs {
    /// Input video file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to <input>_highq.<ext>)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Constant Rate Factor for x264 (lower is better quality)
    #[arg(long, default_value_t = DEFAULT_QUALITY_CRF)]
    pub crf: u8,

    /// x264 preset (ultrafast .. veryslow)
    #[arg(long, default_value = DEFAULT_PRESET)]
    pub preset: String,

    /// Video bitrate in kbps (overrides CRF if set)
    #[arg(long = "v_bitrate", value_name = "KBPS")]
    pub v_bitrate: Option<u32>,

    /// Audio bitrate in kbps
    #[arg(long = "a_bitrate", value_name = "KBPS", default_value_t = DEFAULT_QUALITY_AUDIO_BITRATE_KBPS)]
    pub a_bitrate: u32,

    /// H.264 profile
    #[arg(long, default_value = DEFAULT_QUALITY_PROFILE)]
    pub profile: String,

    /// H.264 level
    #[arg(long, default_value = DEFAULT_QUALITY_LEVEL)]
    pub level: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(version, about = "Reverse video and audio, matching the input's encoding parameters")]
pub struct ReverseArgs {
    /// Input video file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to <input>_reverse.<ext>)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Upscale a video and apply a sharpening filter",
    long_about = "Upscale a video and apply a sharpening filter.\n\n\
                  Target size, CRF, preset and unsharp coefficients can be changed through \
                  CLIPKIT_UPSCALE_WIDTH, CLIPKIT_UPSCALE_HEIGHT, CLIPKIT_UPSCALE_CRF, \
                  CLIPKIT_UPSCALE_PRESET and CLIPKIT_UPSCALE_SHARPEN."
)]
pub struct UpsharpenArgs {
    /// Input video file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to <input>_upscaled.<ext>)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(version, about = "Resize every video in a folder to 1920x1080")]
pub struct BatchUpscaleArgs {
    /// Folder to scan for videos [default: videos, env: CLIPKIT_BATCH_INPUT_DIR]
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Folder for the resized videos [default: output_videos, env: CLIPKIT_BATCH_OUTPUT_DIR]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(version, about = "Resize one video to an explicit size")]
pub struct UpscaleArgs {
    /// Input video file
    #[arg(long, default_value = "vide1.mp4")]
    pub input: PathBuf,

    /// Output video file
    #[arg(long, default_value = "output_upscaled.mp4")]
    pub output: PathBuf,

    /// Target width in pixels
    #[arg(long, default_value_t = 1080)]
    pub width: u32,

    /// Target height in pixels
    #[arg(long, default_value_t = 1920)]
    pub height: u32,

    #[command(flatten)]
    pub common: CommonArgs,
}
