//! FFprobe integration for stream inspection
//!
//! Two kinds of queries are made:
//! - a full JSON report (`-show_streams -show_format -of json`) that is
//!   parsed into `ProbeReport` and reduced to `StreamParams` or a resolution;
//! - a restricted audio query (`-select_streams a -show_entries stream=index`)
//!   whose output is just one stream index per line.
//!
//! Every stream field is optional. Nothing here substitutes defaults; the
//! callers decide on fallbacks.

use super::ToolRunner;
use crate::error::{CoreError, CoreResult};

use serde::Deserialize;
use std::path::Path;

/// Top level of an ffprobe JSON report. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeReport {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

/// One entry of the `streams` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    pub index: Option<u32>,
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub avg_frame_rate: Option<String>,
    pub r_frame_rate: Option<String>,
    pub bit_rate: Option<String>,
    pub sample_rate: Option<String>,
    pub channels: Option<u32>,
}

impl ProbeStream {
    fn is_type(&self, kind: &str) -> bool {
        self.codec_type.as_deref() == Some(kind)
    }
}

impl ProbeReport {
    /// Parses the JSON printed by `ffprobe -of json`.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::ProbeParse(e.to_string()))
    }

    /// First video stream, if any.
    #[must_use]
    pub fn video_stream(&self) -> Option<&ProbeStream> {
        self.streams.iter().find(|s| s.is_type("video"))
    }

    /// First audio stream, if any.
    #[must_use]
    pub fn audio_stream(&self) -> Option<&ProbeStream> {
        self.streams.iter().find(|s| s.is_type("audio"))
    }
}

/// Encoding parameters of a video stream as reported by ffprobe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoParams {
    pub codec: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Decimal frame rate parsed from `avg_frame_rate`, else `r_frame_rate`
    pub frame_rate: Option<f64>,
    /// Bits per second
    pub bit_rate: Option<u64>,
}

/// Encoding parameters of an audio stream as reported by ffprobe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioParams {
    pub codec: Option<String>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u32>,
    /// Bits per second
    pub bit_rate: Option<u64>,
}

/// The probed parameter set of one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamParams {
    pub video: Option<VideoParams>,
    pub audio: Option<AudioParams>,
}

impl StreamParams {
    /// Reduces a report to the first video and first audio stream.
    #[must_use]
    pub fn from_report(report: &ProbeReport) -> Self {
        let video = report.video_stream().map(|s| VideoParams {
            codec: s.codec_name.clone(),
            profile: s.profile.clone(),
            pix_fmt: s.pix_fmt.clone(),
            width: s.width,
            height: s.height,
            frame_rate: s
                .avg_frame_rate
                .as_deref()
                .and_then(parse_frame_rate)
                .or_else(|| s.r_frame_rate.as_deref().and_then(parse_frame_rate)),
            bit_rate: parse_number(s.bit_rate.as_deref()),
        });

        let audio = report.audio_stream().map(|s| AudioParams {
            codec: s.codec_name.clone(),
            sample_rate: parse_number(s.sample_rate.as_deref()),
            channels: s.channels,
            bit_rate: parse_number(s.bit_rate.as_deref()),
        });

        Self { video, audio }
    }
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Parses a frame rate such as `30000/1001` or `25` into a decimal value.
///
/// Returns `None` for a zero denominator, for non-positive or non-finite
/// results (ffprobe reports `0/0` when it does not know the rate) and for
/// anything unparsable.
#[must_use]
pub fn parse_frame_rate(rate: &str) -> Option<f64> {
    let value = match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => rate.trim().parse().ok()?,
    };

    (value.is_finite() && value > 0.0).then_some(value)
}

/// Runs the full JSON probe of `input`.
pub fn probe_streams<R: ToolRunner + ?Sized>(runner: &R, input: &Path) -> CoreResult<ProbeReport> {
    let args = vec![
        "-v".to_string(),
        "error".to_string(),
        "-show_streams".to_string(),
        "-show_format".to_string(),
        "-of".to_string(),
        "json".to_string(),
        input.to_string_lossy().into_owned(),
    ];
    let output = runner.run_ffprobe(&args)?.into_result("ffprobe")?;
    ProbeReport::from_json(&output.stdout)
}

/// Probes `input` and reduces the report to its stream parameters.
pub fn get_stream_params<R: ToolRunner + ?Sized>(runner: &R, input: &Path) -> CoreResult<StreamParams> {
    let params = StreamParams::from_report(&probe_streams(runner, input)?);
    log::debug!("Probed parameters for {}: {:?}", input.display(), params);
    Ok(params)
}

/// Width and height of the first video stream of `input`.
pub fn get_resolution<R: ToolRunner + ?Sized>(runner: &R, input: &Path) -> CoreResult<(u32, u32)> {
    let report = probe_streams(runner, input)?;
    report
        .video_stream()
        .and_then(|s| Some((s.width?, s.height?)))
        .ok_or_else(|| CoreError::NoVideoStream(input.to_path_buf()))
}

/// Whether `input` carries at least one audio stream.
///
/// Runs the restricted audio query every time it is called; results are
/// not cached.
pub fn has_audio_stream<R: ToolRunner + ?Sized>(runner: &R, input: &Path) -> CoreResult<bool> {
    let args = vec![
        "-v".to_string(),
        "error".to_string(),
        "-select_streams".to_string(),
        "a".to_string(),
        "-show_entries".to_string(),
        "stream=index".to_string(),
        "-of".to_string(),
        "csv=p=0".to_string(),
        input.to_string_lossy().into_owned(),
    ];
    let output = runner.run_ffprobe(&args)?.into_result("ffprobe")?;
    let has_audio = output.stdout.lines().any(|line| !line.trim().is_empty());
    log::debug!("{} has audio: {}", input.display(), has_audio);
    Ok(has_audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::ToolOutput;
    use crate::external::mocks::MockRunner;

    const H264_AAC: &str = r#"{
        "streams": [
            {
                "index": 0, "codec_type": "video", "codec_name": "h264",
                "profile": "High", "pix_fmt": "yuv420p", "width": 1280, "height": 720,
                "avg_frame_rate": "30000/1001", "r_frame_rate": "30000/1001",
                "bit_rate": "4500000"
            },
            {
                "index": 1, "codec_type": "audio", "codec_name": "aac",
                "sample_rate": "44100", "channels": 2, "bit_rate": "128000"
            }
        ],
        "format": { "format_name": "mov,mp4,m4a,3gp,3g2,mj2", "duration": "12.5" }
    }"#;

    #[test]
    fn test_parse_frame_rate() {
        assert_eq!(parse_frame_rate("25/1"), Some(25.0));
        assert_eq!(parse_frame_rate("30"), Some(30.0));
        let ntsc = parse_frame_rate("30000/1001").unwrap();
        assert!((ntsc - 29.97).abs() < 0.001);
        assert_eq!(parse_frame_rate("0/0"), None);
        assert_eq!(parse_frame_rate("24/0"), None);
        assert_eq!(parse_frame_rate("0/1"), None);
        assert_eq!(parse_frame_rate("abc"), None);
        assert_eq!(parse_frame_rate(""), None);
    }

    #[test]
    fn test_stream_params_from_report() {
        let report = ProbeReport::from_json(H264_AAC).unwrap();
        let params = StreamParams::from_report(&report);

        let video = params.video.unwrap();
        assert_eq!(video.codec.as_deref(), Some("h264"));
        assert_eq!(video.profile.as_deref(), Some("High"));
        assert_eq!((video.width, video.height), (Some(1280), Some(720)));
        assert_eq!(video.bit_rate, Some(4_500_000));

        let audio = params.audio.unwrap();
        assert_eq!(audio.sample_rate, Some(44_100));
        assert_eq!(audio.channels, Some(2));
        assert_eq!(audio.bit_rate, Some(128_000));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let report = ProbeReport::from_json(
            r#"{"streams":[{"codec_type":"video","avg_frame_rate":"0/0","r_frame_rate":"24/1"}]}"#,
        )
        .unwrap();
        let params = StreamParams::from_report(&report);
        let video = params.video.unwrap();
        assert_eq!(video.codec, None);
        assert_eq!(video.bit_rate, None);
        assert_eq!(video.frame_rate, Some(24.0));
        assert!(params.audio.is_none());
    }

    #[test]
    fn test_malformed_report() {
        assert!(matches!(
            ProbeReport::from_json("not json"),
            Err(CoreError::ProbeParse(_))
        ));
        // An empty object is a valid report without streams
        assert!(ProbeReport::from_json("{}").unwrap().streams.is_empty());
    }

    #[test]
    fn test_has_audio_stream() {
        let runner = MockRunner::new();
        runner.add_probe_response("-select_streams a", "with_audio.mp4", ToolOutput::success("1\n"));
        runner.add_probe_response("-select_streams a", "silent.mp4", ToolOutput::success("\n"));

        assert!(has_audio_stream(&runner, Path::new("with_audio.mp4")).unwrap());
        assert!(!has_audio_stream(&runner, Path::new("silent.mp4")).unwrap());

        // Not cached: every query reaches the tool
        assert!(has_audio_stream(&runner, Path::new("with_audio.mp4")).unwrap());
        assert_eq!(runner.probe_calls().len(), 3);
    }

    #[test]
    fn test_probe_failure_is_external_error() {
        let runner = MockRunner::new();
        runner.add_probe_response("-show_streams", "broken.mp4", ToolOutput::failure(1, "Invalid data"));
        let err = get_resolution(&runner, Path::new("broken.mp4")).unwrap_err();
        assert!(matches!(err, CoreError::ExternalTool { .. }));
    }

    #[test]
    fn test_get_resolution() {
        let runner = MockRunner::new();
        runner.add_probe_response("-show_streams", "clip.mp4", ToolOutput::success(H264_AAC));
        runner.add_probe_response(
            "-show_streams",
            "audio_only.m4a",
            ToolOutput::success(r#"{"streams":[{"codec_type":"audio"}]}"#),
        );

        assert_eq!(get_resolution(&runner, Path::new("clip.mp4")).unwrap(), (1280, 720));
        assert!(matches!(
            get_resolution(&runner, Path::new("audio_only.m4a")),
            Err(CoreError::NoVideoStream(_))
        ));
    }
}
