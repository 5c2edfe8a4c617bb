//! Core library for single-shot video transformations with ffmpeg and ffprobe.
//!
//! Each transformation is split into planning, which validates inputs and
//! builds an ffmpeg argument list (probing with ffprobe where the result
//! depends on the input's streams), and execution of that plan through a
//! `ToolRunner`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clipkit_core::{QualityConfig, SidecarRunner, ToolConfig, execute, plan_quality};
//! use std::path::Path;
//!
//! let tools = ToolConfig::from_env();
//! let runner = SidecarRunner::new(&tools);
//!
//! let config = QualityConfig { crf: 20, ..QualityConfig::default() };
//! let plan = plan_quality(Path::new("holiday.mov"), None, &config, &tools).unwrap();
//! println!("Running command: {}", plan.command_line(&tools.ffmpeg_path));
//!
//! let output = execute(&runner, &plan).unwrap();
//! println!("Output saved to '{}'.", output.display());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::{
    BatchUpscaleConfig, ConcatConfig, QualityConfig, RemoveAudioConfig, ResizeConfig, ReverseConfig,
    ToolConfig, UpscaleSharpenConfig,
};
pub use discovery::find_video_files;
pub use error::{CoreError, CoreResult, EXIT_EXTERNAL, EXIT_VALIDATION};
pub use external::{
    FfmpegInvocation, SidecarRunner, StreamParams, ToolOutput, ToolRunner, get_resolution,
    get_stream_params, has_audio_stream,
};
pub use processing::{
    BatchItem, BatchOutcome, BatchSummary, ConcatRequest, execute, plan_concat, plan_quality,
    plan_remove_audio, plan_resize, plan_reverse, plan_upscale_sharpen, process_folder,
};
pub use utils::{derive_output_path, resolve_output_path};
