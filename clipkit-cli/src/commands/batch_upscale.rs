use clipkit_core::error::EXIT_EXTERNAL;
use clipkit_core::{BatchUpscaleConfig, SidecarRunner, process_folder};

use crate::cli::BatchUpscaleArgs;
use crate::output::{print_batch_summary, print_error};

/// Resizes a folder of videos; exits nonzero when any file failed.
pub fn run_batch_upscale(args: BatchUpscaleArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);
    let config = batch_config(&args);

    match process_folder(&runner, &config, &tools) {
        Ok(summary) => {
            print_batch_summary(&summary);
            if summary.has_failures() { EXIT_EXTERNAL } else { 0 }
        }
        Err(e) => {
            print_error("Error processing folder", &e);
            e.exit_code()
        }
    }
}

fn batch_config(args: &BatchUpscaleArgs) -> BatchUpscaleConfig {
    let mut config = BatchUpscaleConfig::from_env();
    if let Some(dir) = &args.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    config
}
