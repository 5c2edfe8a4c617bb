//! Folder-wide resize to 1080p.
//!
//! Files are handled one at a time. Each one ends up as a `BatchItem`:
//! converted, skipped because it already has a target resolution, or failed.
//! A failure is recorded and the loop moves on to the next file.

use crate::config::{BatchUpscaleConfig, ToolConfig};
use crate::discovery::find_video_files;
use crate::error::{CoreError, CoreResult};
use crate::external::{ToolRunner, get_resolution};
use crate::processing::execute;
use crate::processing::upscale::plan_resize;
use crate::utils::get_filename_safe;

use std::path::{Path, PathBuf};

/// What to do with a file of a given resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeDecision {
    Skip(String),
    Resize,
}

/// Skips the configured resolutions and resizes everything else, including
/// sources larger than the target that are not on the skip list.
#[must_use]
pub fn decide_resize(resolution: (u32, u32), config: &BatchUpscaleConfig) -> ResizeDecision {
    config
        .skip_resolutions
        .iter()
        .find(|(w, h, _)| (*w, *h) == resolution)
        .map_or(ResizeDecision::Resize, |(_, _, label)| ResizeDecision::Skip(label.clone()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Converted { output: PathBuf },
    Skipped { width: u32, height: u32, reason: String },
    Failed { error: String },
}

/// Result for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub input: PathBuf,
    pub outcome: BatchOutcome,
}

/// Per-file results of one folder run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub items: Vec<BatchItem>,
}

impl BatchSummary {
    #[must_use]
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Converted { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Skipped { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, BatchOutcome::Failed { .. }))
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, pred: impl Fn(&BatchOutcome) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.outcome)).count()
    }
}

/// Resizes every video in `config.input_dir` into `config.output_dir`.
///
/// The destination folder is created when absent. A missing source folder
/// is an error; any error on an individual file is not.
pub fn process_folder<R: ToolRunner + ?Sized>(
    runner: &R,
    config: &BatchUpscaleConfig,
    tools: &ToolConfig,
) -> CoreResult<BatchSummary> {
    if !config.input_dir.is_dir() {
        return Err(CoreError::PathError(format!(
            "Input folder '{}' does not exist.",
            config.input_dir.display()
        )));
    }
    std::fs::create_dir_all(&config.output_dir)?;

    let files = find_video_files(&config.input_dir, &config.extensions)?;
    log::info!("Found {} video files.", files.len());

    let mut summary = BatchSummary::default();
    for path in files {
        log::info!("Checking {}...", path.display());
        let outcome = match process_file(runner, &path, config, tools) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Failed to process {}: {}", path.display(), e);
                BatchOutcome::Failed { error: e.to_string() }
            }
        };
        summary.items.push(BatchItem { input: path, outcome });
    }

    log::info!(
        "Batch finished: {} converted, {} skipped, {} failed",
        summary.converted(),
        summary.skipped(),
        summary.failed()
    );
    Ok(summary)
}

fn process_file<R: ToolRunner + ?Sized>(
    runner: &R,
    path: &Path,
    config: &BatchUpscaleConfig,
    tools: &ToolConfig,
) -> CoreResult<BatchOutcome> {
    let (width, height) = get_resolution(runner, path)?;

    if let ResizeDecision::Skip(reason) = decide_resize((width, height), config) {
        log::info!("{}: {}", reason, path.display());
        return Ok(BatchOutcome::Skipped { width, height, reason });
    }

    let output = batch_output_path(path, config)?;
    log::info!(
        "Upscaling {} ({}x{}) to {} ...",
        path.display(),
        width,
        height,
        output.display()
    );

    let invocation = plan_resize(path, &output, &config.resize, tools)?;
    log::debug!("{}", invocation.command_line(&tools.ffmpeg_path));
    let output = execute(runner, &invocation)?;
    log::info!("Done.");
    Ok(BatchOutcome::Converted { output })
}

/// `<output_dir>/<stem>_<suffix>.<output_extension>`
fn batch_output_path(path: &Path, config: &BatchUpscaleConfig) -> CoreResult<PathBuf> {
    let name = get_filename_safe(path)?;
    let stem = Path::new(&name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(name);
    Ok(config.output_dir.join(format!(
        "{}_{}.{}",
        stem, config.output_suffix, config.output_extension
    )))
}
