use clipkit_core::{SidecarRunner, UpscaleSharpenConfig, plan_upscale_sharpen};

use super::{Messages, run_planned};
use crate::cli::UpsharpenArgs;

const MESSAGES: Messages = Messages {
    success: "Video upscaled and sharpened successfully.",
    failure: "Error upscaling video",
};

pub fn run_upsharpen(args: UpsharpenArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);
    let config = UpscaleSharpenConfig::from_env();
    log::debug!("Upscale settings: {:?}", config);

    let plan = plan_upscale_sharpen(&args.input, args.output.as_deref(), &config, &tools);
    run_planned(&runner, plan, &tools, &MESSAGES)
}
