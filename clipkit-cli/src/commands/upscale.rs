use clipkit_core::{ResizeConfig, SidecarRunner, plan_resize};

use super::{Messages, run_planned};
use crate::cli::UpscaleArgs;

const MESSAGES: Messages = Messages {
    success: "Video resized successfully.",
    failure: "Error resizing video",
};

pub fn run_upscale(args: UpscaleArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);
    let config = ResizeConfig {
        width: args.width,
        height: args.height,
        ..ResizeConfig::default()
    };

    let plan = plan_resize(&args.input, &args.output, &config, &tools);
    run_planned(&runner, plan, &tools, &MESSAGES)
}
