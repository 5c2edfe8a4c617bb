//! Audio-aware concatenation.
//!
//! Every input is probed for an audio stream. Only when all of them carry
//! audio is audio concatenated and mapped; otherwise the output is video
//! only. Inputs are joined in argument order.

use crate::config::{CONCAT_OUTPUT_EXTENSIONS, ConcatConfig, ToolConfig};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegArgs, FfmpegInvocation, ToolRunner, concat_filter_graph, has_audio_stream};
use crate::utils::{ensure_inputs_exist, has_extension, resolve_output_path};

use std::path::{Path, PathBuf};

/// Inputs and optional output of a concatenation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatRequest {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConcatRequest {
    /// Splits positional arguments into inputs and an optional output.
    ///
    /// The last argument is the output only if it has a recognised video
    /// extension and at least two inputs come before it.
    #[must_use]
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let paths: Vec<PathBuf> = args.iter().map(|a| PathBuf::from(a.as_ref())).collect();

        if let Some((last, rest)) = paths.split_last() {
            if rest.len() >= 2 && has_extension(last, &CONCAT_OUTPUT_EXTENSIONS) {
                return Self {
                    inputs: rest.to_vec(),
                    output: Some(last.clone()),
                };
            }
        }

        Self {
            inputs: paths,
            output: None,
        }
    }
}

/// Builds the concatenation invocation for already validated inputs.
#[must_use]
pub fn concat_invocation(
    inputs: &[PathBuf],
    output: &Path,
    with_audio: bool,
    config: &ConcatConfig,
    tools: &ToolConfig,
) -> FfmpegInvocation {
    let args = inputs
        .iter()
        .fold(FfmpegArgs::new(tools), |args, input| args.input(input))
        .opt("-filter_complex", concat_filter_graph(inputs.len(), with_audio))
        .opt("-map", "[outv]");

    let args = if with_audio {
        args.opt("-map", "[outa]")
            .opt("-c:v", config.video_codec.as_str())
            .opt("-c:a", config.audio_codec.as_str())
    } else {
        args.opt("-c:v", config.video_codec.as_str())
    };

    args.output(output)
}

/// Validates, probes every input for audio and plans the concatenation.
///
/// Missing inputs are reported before any probe runs.
pub fn plan_concat<R: ToolRunner + ?Sized>(
    runner: &R,
    request: &ConcatRequest,
    config: &ConcatConfig,
    tools: &ToolConfig,
) -> CoreResult<FfmpegInvocation> {
    if request.inputs.len() < 2 {
        return Err(CoreError::NotEnoughInputs(request.inputs.len()));
    }
    ensure_inputs_exist(&request.inputs)?;

    let first = &request.inputs[0];
    let output = resolve_output_path(first, request.output.as_deref(), &config.suffix)?;

    let mut all_have_audio = true;
    for input in &request.inputs {
        if !has_audio_stream(runner, input)? {
            log::info!("{} has no audio stream; output will be video only", input.display());
            all_have_audio = false;
        }
    }

    Ok(concat_invocation(&request.inputs, &output, all_have_audio, config, tools))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::MockRunner;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_request_with_explicit_output() {
        let request = ConcatRequest::from_args(&["v1.mp4", "v2.mp4", "out.mkv"]);
        assert_eq!(request.inputs, vec![PathBuf::from("v1.mp4"), PathBuf::from("v2.mp4")]);
        assert_eq!(request.output, Some(PathBuf::from("out.mkv")));
    }

    #[test]
    fn test_request_without_output() {
        let request = ConcatRequest::from_args(&["v1.mp4", "v2.mp4"]);
        assert_eq!(request.inputs.len(), 2);
        assert_eq!(request.output, None);

        // Unrecognised extension on the last argument keeps it as an input
        let request = ConcatRequest::from_args(&["a.mp4", "b.mp4", "c.webm"]);
        assert_eq!(request.inputs.len(), 3);
        assert_eq!(request.output, None);
    }

    #[test]
    fn test_request_output_extension_is_case_insensitive() {
        let request = ConcatRequest::from_args(&["a.mp4", "b.mp4", "OUT.MOV"]);
        assert_eq!(request.output, Some(PathBuf::from("OUT.MOV")));
    }

    #[test]
    fn test_plan_all_inputs_have_audio() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "intro.mp4");
        let b = touch(dir.path(), "main.mp4");
        let runner = MockRunner::new();
        runner.add_audio_presence("intro.mp4", true);
        runner.add_audio_presence("main.mp4", true);

        let request = ConcatRequest { inputs: vec![a.clone(), b.clone()], output: None };
        let plan = plan_concat(&runner, &request, &ConcatConfig::default(), &ToolConfig::default()).unwrap();

        assert_eq!(plan.output_path, dir.path().join("intro_concat.mp4"));
        assert_eq!(
            plan.arg_value("-filter_complex"),
            Some("[0:v][0:a][1:v][1:a]concat=n=2:v=1:a=1[outv][outa]")
        );
        assert_eq!(plan.arg_values("-map"), vec!["[outv]", "[outa]"]);
        assert_eq!(plan.arg_value("-c:a"), Some("aac"));
        let expected_inputs = vec![a.to_string_lossy().into_owned(), b.to_string_lossy().into_owned()];
        assert_eq!(plan.arg_values("-i"), expected_inputs);
        assert_eq!(runner.probe_calls().len(), 2);
    }

    #[test]
    fn test_plan_one_input_without_audio() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "intro.mp4");
        let b = touch(dir.path(), "screen.mp4");
        let c = touch(dir.path(), "outro.mp4");
        let runner = MockRunner::new();
        runner.add_audio_presence("intro.mp4", true);
        runner.add_audio_presence("screen.mp4", false);
        runner.add_audio_presence("outro.mp4", true);

        let out = dir.path().join("joined.mkv");
        let request = ConcatRequest { inputs: vec![a, b, c], output: Some(out.clone()) };
        let plan = plan_concat(&runner, &request, &ConcatConfig::default(), &ToolConfig::default()).unwrap();

        assert_eq!(plan.output_path, out);
        assert_eq!(
            plan.arg_value("-filter_complex"),
            Some("[0:v][1:v][2:v]concat=n=3:v=1:a=0[outv]")
        );
        assert_eq!(plan.arg_values("-map"), vec!["[outv]"]);
        assert!(!plan.has_arg("-c:a"));
    }

    #[test]
    fn test_plan_missing_input_aborts_before_probing() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "intro.mp4");
        let runner = MockRunner::new();

        let request = ConcatRequest {
            inputs: vec![a, dir.path().join("missing.mp4")],
            output: None,
        };
        let err = plan_concat(&runner, &request, &ConcatConfig::default(), &ToolConfig::default())
            .unwrap_err();

        assert!(matches!(err, CoreError::InputNotFound(_)));
        assert!(runner.probe_calls().is_empty());
        assert!(runner.ffmpeg_calls().is_empty());
    }

    #[test]
    fn test_plan_requires_two_inputs() {
        let runner = MockRunner::new();
        let request = ConcatRequest { inputs: vec![PathBuf::from("only.mp4")], output: None };
        let err = plan_concat(&runner, &request, &ConcatConfig::default(), &ToolConfig::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::NotEnoughInputs(1)));
    }
}
