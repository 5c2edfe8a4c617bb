// ============================================================================
// clipkit-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// TOOL EXECUTOR: Running ffmpeg and ffprobe
//
// ffmpeg is spawned through ffmpeg-sidecar, whose event iterator parses the
// tool's stderr. Error and fatal log lines are kept as the diagnostic text
// returned to the caller; everything else is forwarded to the debug log.
// ffprobe writes its report to stdout, so it runs as a plain child process
// with both streams captured.

use super::{ToolOutput, ToolRunner};
use crate::config::ToolConfig;
use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::collections::VecDeque;
use std::process::Command;

/// Number of trailing log lines kept when ffmpeg reports no explicit error lines.
const LOG_TAIL_LINES: usize = 20;

/// Production `ToolRunner`.
#[derive(Debug, Clone)]
pub struct SidecarRunner {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl Default for SidecarRunner {
    fn default() -> Self {
        Self::new(&ToolConfig::default())
    }
}

impl SidecarRunner {
    #[must_use]
    pub fn new(tools: &ToolConfig) -> Self {
        Self {
            ffmpeg_path: tools.ffmpeg_path.clone(),
            ffprobe_path: tools.ffprobe_path.clone(),
        }
    }
}

impl ToolRunner for SidecarRunner {
    fn run_ffmpeg(&self, args: &[String]) -> CoreResult<ToolOutput> {
        let mut cmd = FfmpegCommand::new_with_path(&self.ffmpeg_path);
        cmd.args(args);
        log::debug!("Spawning {} {}", self.ffmpeg_path, args.join(" "));

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error(self.ffmpeg_path.as_str(), e))?;

        let mut errors: Vec<String> = Vec::new();
        let mut tail: VecDeque<String> = VecDeque::with_capacity(LOG_TAIL_LINES);

        let iterator = child.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_failed_error("ffmpeg (event iterator)", None, e.to_string())
        })?;

        for event in iterator {
            match event {
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                    log::debug!("ffmpeg error: {}", line);
                    errors.push(line);
                }
                FfmpegEvent::Error(line) => {
                    log::debug!("ffmpeg error: {}", line);
                    errors.push(line);
                }
                FfmpegEvent::Log(_, line) => {
                    log::trace!("ffmpeg: {}", line);
                    if tail.len() == LOG_TAIL_LINES {
                        tail.pop_front();
                    }
                    tail.push_back(line);
                }
                _ => {}
            }
        }

        let status = child
            .wait()
            .map_err(|e| command_wait_error(self.ffmpeg_path.as_str(), e))?;
        log::debug!("ffmpeg finished with {}", status);

        let stderr = if errors.is_empty() {
            tail.into_iter().collect::<Vec<_>>().join("\n")
        } else {
            errors.join("\n")
        };

        Ok(ToolOutput {
            exit_code: status.code(),
            stdout: String::new(),
            stderr,
        })
    }

    fn run_ffprobe(&self, args: &[String]) -> CoreResult<ToolOutput> {
        log::debug!("Running {} {}", self.ffprobe_path, args.join(" "));

        let output = Command::new(&self.ffprobe_path)
            .args(args)
            .output()
            .map_err(|e| command_start_error(self.ffprobe_path.as_str(), e))?;

        Ok(ToolOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
