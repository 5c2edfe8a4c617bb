//! Reversal of video and audio, re-encoded with the input's own parameters.
//!
//! The input is probed once. Each field the probe leaves out is replaced
//! by the matching `ReverseConfig` fallback, and the substitution is logged
//! at `warn` level. Inputs without an audio stream get `-an` instead of an
//! `areverse` filter.

use crate::config::{ReverseConfig, ToolConfig};
use crate::error::CoreResult;
use crate::external::{
    AudioParams, FfmpegArgs, FfmpegInvocation, StreamParams, ToolRunner, VideoParams, get_stream_params,
};
use crate::utils::{ensure_input_exists, resolve_output_path};

use std::path::Path;

/// Probes `input` and plans its reversal.
pub fn plan_reverse<R: ToolRunner + ?Sized>(
    runner: &R,
    input: &Path,
    output: Option<&Path>,
    config: &ReverseConfig,
    tools: &ToolConfig,
) -> CoreResult<FfmpegInvocation> {
    ensure_input_exists(input)?;
    let output = resolve_output_path(input, output, &config.suffix)?;
    let params = get_stream_params(runner, input)?;
    Ok(reverse_invocation(input, &output, &params, config, tools))
}

/// Builds the reversal invocation from already probed parameters.
#[must_use]
pub fn reverse_invocation(
    input: &Path,
    output: &Path,
    params: &StreamParams,
    config: &ReverseConfig,
    tools: &ToolConfig,
) -> FfmpegInvocation {
    let missing = VideoParams::default();
    let video = params.video.as_ref().unwrap_or(&missing);

    let args = FfmpegArgs::new(tools).input(input).opt("-vf", "reverse");
    let args = if params.audio.is_some() {
        args.opt("-af", "areverse")
    } else {
        args
    };

    let args = args
        .opt("-c:v", video_codec(video, config))
        .opt("-profile:v", or_fallback("profile", video.profile.as_deref().map(str::to_lowercase), &config.fallback_profile))
        .opt("-pix_fmt", or_fallback("pix_fmt", video.pix_fmt.clone(), &config.fallback_pix_fmt))
        .opt_if_some("-r", video.frame_rate.map(|fps| fps.to_string()))
        .opt("-b:v", or_fallback("video bit_rate", video.bit_rate.map(kbps), &config.fallback_video_bitrate));

    let args = match &params.audio {
        Some(audio) => audio_args(args, audio, config),
        None => {
            log::debug!("{} has no audio stream, dropping audio", input.display());
            args.flag("-an")
        }
    };

    args.output(output)
}

fn audio_args(args: FfmpegArgs, audio: &AudioParams, config: &ReverseConfig) -> FfmpegArgs {
    let codec = match audio.codec.as_deref() {
        Some("aac") => "aac".to_string(),
        Some(name) => name.to_string(),
        None => or_fallback("audio codec", None, &config.fallback_audio_codec),
    };
    let sample_rate = audio.sample_rate.unwrap_or_else(|| {
        log::warn!("Probe reported no sample_rate, using {}", config.fallback_sample_rate);
        config.fallback_sample_rate
    });
    let channels = audio.channels.unwrap_or_else(|| {
        log::warn!("Probe reported no channels, using {}", config.fallback_channels);
        config.fallback_channels
    });

    args.opt("-c:a", codec)
        .opt("-ar", sample_rate.to_string())
        .opt("-ac", channels.to_string())
        .opt("-b:a", or_fallback("audio bit_rate", audio.bit_rate.map(kbps), &config.fallback_audio_bitrate))
}

/// `h264` maps to its encoder `libx264`; other codec names are passed through.
fn video_codec(video: &VideoParams, config: &ReverseConfig) -> String {
    match video.codec.as_deref() {
        Some("h264") => "libx264".to_string(),
        Some(name) => name.to_string(),
        None => or_fallback("video codec", None, &config.fallback_video_codec),
    }
}

fn kbps(bits_per_second: u64) -> String {
    format!("{}k", bits_per_second / 1000)
}

fn or_fallback(field: &str, probed: Option<String>, fallback: &str) -> String {
    probed.unwrap_or_else(|| {
        log::warn!("Probe reported no {field}, using {fallback}");
        fallback.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::ToolOutput;
    use crate::external::mocks::MockRunner;
    use std::path::PathBuf;

    const FULL_REPORT: &str = r#"{"streams":[
        {"codec_type":"video","codec_name":"h264","profile":"High","pix_fmt":"yuv420p",
         "width":1920,"height":1080,"avg_frame_rate":"25/1","bit_rate":"8000000"},
        {"codec_type":"audio","codec_name":"aac","sample_rate":"44100","channels":2,"bit_rate":"128000"}
    ]}"#;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_plan_reverse_matches_probed_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let input = touch(dir.path(), "skate.mp4");
        let runner = MockRunner::new();
        runner.add_stream_report("skate.mp4", FULL_REPORT);

        let plan = plan_reverse(&runner, &input, None, &ReverseConfig::default(), &ToolConfig::default())
            .unwrap();

        assert_eq!(plan.output_path, dir.path().join("skate_reverse.mp4"));
        assert_eq!(plan.arg_value("-vf"), Some("reverse"));
        assert_eq!(plan.arg_value("-af"), Some("areverse"));
        assert_eq!(plan.arg_value("-c:v"), Some("libx264"));
        assert_eq!(plan.arg_value("-profile:v"), Some("high"));
        assert_eq!(plan.arg_value("-pix_fmt"), Some("yuv420p"));
        assert_eq!(plan.arg_value("-r"), Some("25"));
        assert_eq!(plan.arg_value("-b:v"), Some("8000k"));
        assert_eq!(plan.arg_value("-c:a"), Some("aac"));
        assert_eq!(plan.arg_value("-ar"), Some("44100"));
        assert_eq!(plan.arg_value("-ac"), Some("2"));
        assert_eq!(plan.arg_value("-b:a"), Some("128k"));
        assert!(!plan.has_arg("-an"));
    }

    #[test]
    fn test_reverse_fallbacks_for_missing_fields() {
        let params = StreamParams {
            video: Some(VideoParams::default()),
            audio: Some(AudioParams::default()),
        };
        let plan = reverse_invocation(
            Path::new("in.mp4"),
            Path::new("out.mp4"),
            &params,
            &ReverseConfig::default(),
            &ToolConfig::default(),
        );

        assert_eq!(plan.arg_value("-c:v"), Some("libx264"));
        assert_eq!(plan.arg_value("-profile:v"), Some("main"));
        assert_eq!(plan.arg_value("-pix_fmt"), Some("yuv420p"));
        assert!(!plan.has_arg("-r"));
        assert_eq!(plan.arg_value("-b:v"), Some("6000k"));
        assert_eq!(plan.arg_value("-c:a"), Some("aac"));
        assert_eq!(plan.arg_value("-ar"), Some("48000"));
        assert_eq!(plan.arg_value("-ac"), Some("2"));
        assert_eq!(plan.arg_value("-b:a"), Some("160k"));
    }

    #[test]
    fn test_reverse_without_audio_stream() {
        let params = StreamParams {
            video: Some(VideoParams {
                codec: Some("hevc".to_string()),
                frame_rate: Some(30_000.0 / 1001.0),
                ..VideoParams::default()
            }),
            audio: None,
        };
        let plan = reverse_invocation(
            Path::new("in.mkv"),
            Path::new("out.mkv"),
            &params,
            &ReverseConfig::default(),
            &ToolConfig::default(),
        );

        assert!(plan.has_arg("-an"));
        assert!(!plan.has_arg("-af"));
        assert!(!plan.has_arg("-c:a"));
        assert_eq!(plan.arg_value("-c:v"), Some("hevc"));
        let fps: f64 = plan.arg_value("-r").unwrap().parse().unwrap();
        assert!((fps - 29.97).abs() < 0.001);
    }

    #[test]
    fn test_reverse_passes_through_other_audio_codecs() {
        let params = StreamParams {
            video: Some(VideoParams::default()),
            audio: Some(AudioParams {
                codec: Some("opus".to_string()),
                bit_rate: Some(96_500),
                ..AudioParams::default()
            }),
        };
        let plan = reverse_invocation(
            Path::new("in.webm"),
            Path::new("out.webm"),
            &params,
            &ReverseConfig::default(),
            &ToolConfig::default(),
        );
        assert_eq!(plan.arg_value("-c:a"), Some("opus"));
        assert_eq!(plan.arg_value("-b:a"), Some("96k"));
    }

    #[test]
    fn test_plan_reverse_probe_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = touch(dir.path(), "corrupt.mp4");
        let runner = MockRunner::new();
        runner.add_probe_response(
            "-show_streams",
            "corrupt.mp4",
            ToolOutput::failure(1, "moov atom not found"),
        );

        let err = plan_reverse(&runner, &input, None, &ReverseConfig::default(), &ToolConfig::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalTool { .. }));
        assert!(runner.ffmpeg_calls().is_empty());
    }
}
