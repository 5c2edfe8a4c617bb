// clipkit-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests and for dependents enabling the
// "test-mocks" feature.

use super::{ToolOutput, ToolRunner};
use crate::error::CoreResult;

use std::cell::{Cell, RefCell};
use std::path::Path;

/// A canned response, selected when the joined arguments contain
/// `arg_pattern` and the last argument ends with `input`.
struct MockResponse {
    arg_pattern: String,
    input: String,
    output: ToolOutput,
}

impl MockResponse {
    fn matches(&self, args: &[String]) -> bool {
        let joined = args.join(" ");
        joined.contains(&self.arg_pattern)
            && args.last().is_some_and(|last| last.ends_with(&self.input))
    }
}

/// Recording `ToolRunner`.
///
/// ffprobe calls without a matching response fail with exit code 1.
/// ffmpeg calls without a matching response succeed; with
/// `create_dummy_output` enabled a successful ffmpeg call also writes an
/// empty file at its last argument.
#[derive(Default)]
pub struct MockRunner {
    probe_responses: RefCell<Vec<MockResponse>>,
    ffmpeg_responses: RefCell<Vec<MockResponse>>,
    probe_calls: RefCell<Vec<Vec<String>>>,
    ffmpeg_calls: RefCell<Vec<Vec<String>>>,
    create_dummy_output: Cell<bool>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_probe_response(&self, arg_pattern: &str, input: &str, output: ToolOutput) {
        self.probe_responses.borrow_mut().push(MockResponse {
            arg_pattern: arg_pattern.to_string(),
            input: input.to_string(),
            output,
        });
    }

    /// Registers the JSON report returned by the full stream probe of `input`.
    pub fn add_stream_report(&self, input: &str, json: &str) {
        self.add_probe_response("-show_streams", input, ToolOutput::success(json));
    }

    /// Registers the answer of the audio-presence query for `input`.
    pub fn add_audio_presence(&self, input: &str, has_audio: bool) {
        let stdout = if has_audio { "1\n" } else { "" };
        self.add_probe_response("-select_streams a", input, ToolOutput::success(stdout));
    }

    pub fn add_ffmpeg_response(&self, arg_pattern: &str, output: ToolOutput) {
        self.ffmpeg_responses.borrow_mut().push(MockResponse {
            arg_pattern: arg_pattern.to_string(),
            input: String::new(),
            output,
        });
    }

    pub fn set_create_dummy_output(&self, enabled: bool) {
        self.create_dummy_output.set(enabled);
    }

    pub fn probe_calls(&self) -> Vec<Vec<String>> {
        self.probe_calls.borrow().clone()
    }

    pub fn ffmpeg_calls(&self) -> Vec<Vec<String>> {
        self.ffmpeg_calls.borrow().clone()
    }
}

impl ToolRunner for MockRunner {
    fn run_ffmpeg(&self, args: &[String]) -> CoreResult<ToolOutput> {
        self.ffmpeg_calls.borrow_mut().push(args.to_vec());
        log::debug!("Mock ffmpeg called with: {:?}", args);

        let output = self
            .ffmpeg_responses
            .borrow()
            .iter()
            .find(|r| r.matches(args))
            .map(|r| r.output.clone())
            .unwrap_or_else(|| ToolOutput::success(""));

        if output.is_success() && self.create_dummy_output.get() {
            if let Some(path) = args.last() {
                std::fs::write(Path::new(path), b"")?;
            }
        }
        Ok(output)
    }

    fn run_ffprobe(&self, args: &[String]) -> CoreResult<ToolOutput> {
        self.probe_calls.borrow_mut().push(args.to_vec());
        log::debug!("Mock ffprobe called with: {:?}", args);

        Ok(self
            .probe_responses
            .borrow()
            .iter()
            .find(|r| r.matches(args))
            .map(|r| r.output.clone())
            .unwrap_or_else(|| ToolOutput::failure(1, "no mock response registered")))
    }
}
