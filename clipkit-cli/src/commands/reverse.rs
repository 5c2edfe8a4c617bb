use clipkit_core::{ReverseConfig, SidecarRunner, plan_reverse};

use super::{Messages, run_planned};
use crate::cli::ReverseArgs;

const MESSAGES: Messages = Messages {
    success: "Video reversed successfully.",
    failure: "Error reversing video",
};

pub fn run_reverse(args: ReverseArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);
    let plan = plan_reverse(&runner, &args.input, args.output.as_deref(), &ReverseConfig::default(), &tools);
    run_planned(&runner, plan, &tools, &MESSAGES)
}
