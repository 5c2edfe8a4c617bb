//! Configuration structures and constants for the clipkit utilities.
//!
//! Every transformation has its own configuration struct with named fields
//! and documented defaults. The CLI fills them from flags where the utility
//! exposes flags; the rest can be overridden through `CLIPKIT_*` environment
//! variables via the `from_env` constructors.

pub mod utils;

use std::path::PathBuf;

use utils::{get_env_bool, get_env_path, get_env_string, get_env_u8, get_env_u32};

// Default constants

/// Name (or path) of the transcoding executable.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Name (or path) of the stream-inspection executable.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// H.264 encoder used by every re-encoding transformation.
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";

/// Audio encoder used by every re-encoding transformation.
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// x264 preset shared by the re-encoding transformations.
pub const DEFAULT_PRESET: &str = "slow";

/// Extensions that mark the last concatenation argument as the output path.
pub const CONCAT_OUTPUT_EXTENSIONS: [&str; 4] = ["mp4", "mov", "mkv", "avi"];

/// Extensions picked up by the batch upscaler, in scan order.
pub const BATCH_VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// Constant Rate Factor for the quality re-encode (lower is better).
pub const DEFAULT_QUALITY_CRF: u8 = 17;

/// Audio bitrate in kbps for the quality re-encode.
pub const DEFAULT_QUALITY_AUDIO_BITRATE_KBPS: u32 = 192;

/// H.264 profile for the quality re-encode.
pub const DEFAULT_QUALITY_PROFILE: &str = "high";

/// H.264 level for the quality re-encode.
pub const DEFAULT_QUALITY_LEVEL: &str = "4.2";

/// Fallback video bitrate when the probe reports none.
pub const DEFAULT_REVERSE_VIDEO_BITRATE: &str = "6000k";

/// Fallback audio bitrate when the probe reports none.
pub const DEFAULT_REVERSE_AUDIO_BITRATE: &str = "160k";

/// Fallback H.264 profile when the probe reports none.
pub const DEFAULT_REVERSE_PROFILE: &str = "main";

/// Fallback pixel format when the probe reports none.
pub const DEFAULT_REVERSE_PIX_FMT: &str = "yuv420p";

/// Fallback audio sample rate in Hz.
pub const DEFAULT_REVERSE_SAMPLE_RATE: u32 = 48_000;

/// Fallback audio channel count.
pub const DEFAULT_REVERSE_CHANNELS: u32 = 2;

/// Upscale + sharpen target size (4K UHD).
pub const DEFAULT_UPSCALE_WIDTH: u32 = 3840;
pub const DEFAULT_UPSCALE_HEIGHT: u32 = 2160;

/// Constant Rate Factor for upscale + sharpen.
pub const DEFAULT_UPSCALE_CRF: u8 = 18;

/// `unsharp` filter coefficients: luma_x:luma_y:luma_amount:chroma_x:chroma_y:chroma_amount.
pub const DEFAULT_SHARPEN: &str = "5:5:1.0:5:5:0.0";

/// Audio bitrate for upscale + sharpen.
pub const DEFAULT_UPSCALE_AUDIO_BITRATE: &str = "192k";

/// Encoder threads used by the resize operation.
pub const DEFAULT_RESIZE_THREADS: u32 = 4;

/// Batch upscaler target size (1080p).
pub const BATCH_TARGET_WIDTH: u32 = 1920;
pub const BATCH_TARGET_HEIGHT: u32 = 1080;

/// Resolutions the batch upscaler leaves untouched, with a label for reporting.
pub const BATCH_SKIP_RESOLUTIONS: [(u32, u32, &str); 2] = [
    (1920, 1080, "Already 1080p"),
    (3840, 2160, "Already 2160p (4K)"),
];

/// Settings for locating and invoking the external tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Transcoder executable
    pub ffmpeg_path: String,

    /// Stream-inspection executable
    pub ffprobe_path: String,

    /// Pass `-y` instead of `-n`; ffmpeg never gets to prompt either way
    pub overwrite: bool,

    /// Pass `-hide_banner`
    pub hide_banner: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: DEFAULT_FFMPEG.to_string(),
            ffprobe_path: DEFAULT_FFPROBE.to_string(),
            overwrite: false,
            hide_banner: true,
        }
    }
}

impl ToolConfig {
    /// Defaults overridden by `CLIPKIT_FFMPEG`, `CLIPKIT_FFPROBE` and `CLIPKIT_OVERWRITE`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ffmpeg_path: get_env_string("CLIPKIT_FFMPEG", defaults.ffmpeg_path),
            ffprobe_path: get_env_string("CLIPKIT_FFPROBE", defaults.ffprobe_path),
            overwrite: get_env_bool("CLIPKIT_OVERWRITE", defaults.overwrite),
            hide_banner: defaults.hide_banner,
        }
    }
}

/// Audio removal: copy the video stream, drop every audio stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveAudioConfig {
    pub suffix: String,
    pub video_codec: String,
}

impl Default for RemoveAudioConfig {
    fn default() -> Self {
        Self {
            suffix: "noaudio".to_string(),
            video_codec: "copy".to_string(),
        }
    }
}

/// Concatenation through the `concat` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatConfig {
    pub suffix: String,
    pub video_codec: String,
    pub audio_codec: String,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            suffix: "concat".to_string(),
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
        }
    }
}

/// Quality re-encode with libx264.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityConfig {
    pub suffix: String,
    pub video_codec: String,
    pub audio_codec: String,

    /// Constant Rate Factor, ignored when `video_bitrate_kbps` is set
    pub crf: u8,

    /// x264 preset (ultrafast .. veryslow)
    pub preset: String,

    /// Target video bitrate in kbps; overrides CRF
    pub video_bitrate_kbps: Option<u32>,

    pub audio_bitrate_kbps: u32,
    pub profile: String,
    pub level: String,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            suffix: "highq".to_string(),
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            crf: DEFAULT_QUALITY_CRF,
            preset: DEFAULT_PRESET.to_string(),
            video_bitrate_kbps: None,
            audio_bitrate_kbps: DEFAULT_QUALITY_AUDIO_BITRATE_KBPS,
            profile: DEFAULT_QUALITY_PROFILE.to_string(),
            level: DEFAULT_QUALITY_LEVEL.to_string(),
        }
    }
}

/// Reversal. Encoding parameters come from the probed input; these are the
/// values used when the probe does not report a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseConfig {
    pub suffix: String,
    pub fallback_video_codec: String,
    pub fallback_profile: String,
    pub fallback_pix_fmt: String,
    pub fallback_video_bitrate: String,
    pub fallback_audio_codec: String,
    pub fallback_sample_rate: u32,
    pub fallback_channels: u32,
    pub fallback_audio_bitrate: String,
}

impl Default for ReverseConfig {
    fn default() -> Self {
        Self {
            suffix: "reverse".to_string(),
            fallback_video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            fallback_profile: DEFAULT_REVERSE_PROFILE.to_string(),
            fallback_pix_fmt: DEFAULT_REVERSE_PIX_FMT.to_string(),
            fallback_video_bitrate: DEFAULT_REVERSE_VIDEO_BITRATE.to_string(),
            fallback_audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            fallback_sample_rate: DEFAULT_REVERSE_SAMPLE_RATE,
            fallback_channels: DEFAULT_REVERSE_CHANNELS,
            fallback_audio_bitrate: DEFAULT_REVERSE_AUDIO_BITRATE.to_string(),
        }
    }
}

/// Upscale followed by an `unsharp` pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpscaleSharpenConfig {
    pub suffix: String,
    pub width: u32,
    pub height: u32,
    pub crf: u8,
    pub preset: String,
    pub sharpen: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for UpscaleSharpenConfig {
    fn default() -> Self {
        Self {
            suffix: "upscaled".to_string(),
            width: DEFAULT_UPSCALE_WIDTH,
            height: DEFAULT_UPSCALE_HEIGHT,
            crf: DEFAULT_UPSCALE_CRF,
            preset: DEFAULT_PRESET.to_string(),
            sharpen: DEFAULT_SHARPEN.to_string(),
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            audio_bitrate: DEFAULT_UPSCALE_AUDIO_BITRATE.to_string(),
        }
    }
}

impl UpscaleSharpenConfig {
    /// Defaults overridden by the `CLIPKIT_UPSCALE_*` variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            width: get_env_u32("CLIPKIT_UPSCALE_WIDTH", defaults.width),
            height: get_env_u32("CLIPKIT_UPSCALE_HEIGHT", defaults.height),
            crf: get_env_u8("CLIPKIT_UPSCALE_CRF", defaults.crf),
            preset: get_env_string("CLIPKIT_UPSCALE_PRESET", defaults.preset.clone()),
            sharpen: get_env_string("CLIPKIT_UPSCALE_SHARPEN", defaults.sharpen.clone()),
            ..defaults
        }
    }
}

/// Plain resize to an explicit size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeConfig {
    pub width: u32,
    pub height: u32,
    pub video_codec: String,
    pub audio_codec: String,
    pub preset: String,
    pub threads: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: BATCH_TARGET_WIDTH,
            height: BATCH_TARGET_HEIGHT,
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            preset: DEFAULT_PRESET.to_string(),
            threads: DEFAULT_RESIZE_THREADS,
        }
    }
}

/// Folder-wide resize to 1080p.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchUpscaleConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,

    /// Lowercase extensions without the dot, in scan order
    pub extensions: Vec<String>,

    /// Appended to the source stem, e.g. `clip` -> `clip_1080p.mp4`
    pub output_suffix: String,
    pub output_extension: String,

    /// Resolutions that are reported as already satisfied
    pub skip_resolutions: Vec<(u32, u32, String)>,

    /// Target size and encoder settings
    pub resize: ResizeConfig,
}

impl Default for BatchUpscaleConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("videos"),
            output_dir: PathBuf::from("output_videos"),
            extensions: BATCH_VIDEO_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            output_suffix: "1080p".to_string(),
            output_extension: "mp4".to_string(),
            skip_resolutions: BATCH_SKIP_RESOLUTIONS
                .iter()
                .map(|(w, h, label)| (*w, *h, (*label).to_string()))
                .collect(),
            resize: ResizeConfig::default(),
        }
    }
}

impl BatchUpscaleConfig {
    /// Defaults overridden by `CLIPKIT_BATCH_INPUT_DIR` and `CLIPKIT_BATCH_OUTPUT_DIR`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            input_dir: get_env_path("CLIPKIT_BATCH_INPUT_DIR", defaults.input_dir.clone()),
            output_dir: get_env_path("CLIPKIT_BATCH_OUTPUT_DIR", defaults.output_dir.clone()),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_defaults() {
        let config = QualityConfig::default();
        assert_eq!(config.crf, 17);
        assert_eq!(config.preset, "slow");
        assert_eq!(config.video_bitrate_kbps, None);
        assert_eq!(config.audio_bitrate_kbps, 192);
        assert_eq!(config.profile, "high");
        assert_eq!(config.level, "4.2");
    }

    #[test]
    fn test_reverse_fallbacks() {
        let config = ReverseConfig::default();
        assert_eq!(config.fallback_video_bitrate, "6000k");
        assert_eq!(config.fallback_audio_bitrate, "160k");
        assert_eq!(config.fallback_profile, "main");
    }

    #[test]
    fn test_batch_defaults() {
        let config = BatchUpscaleConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("videos"));
        assert_eq!(config.output_dir, PathBuf::from("output_videos"));
        assert_eq!(config.extensions, vec!["mp4", "mov", "avi", "mkv", "webm"]);
        assert_eq!((config.resize.width, config.resize.height), (1920, 1080));
        assert_eq!(config.skip_resolutions.len(), 2);
    }

    #[test]
    fn test_tool_defaults_never_overwrite() {
        let config = ToolConfig::default();
        assert_eq!(config.ffmpeg_path, "ffmpeg");
        assert_eq!(config.ffprobe_path, "ffprobe");
        assert!(!config.overwrite);
        assert!(config.hide_banner);
    }
}
