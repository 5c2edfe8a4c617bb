use clipkit_core::{ConcatConfig, ConcatRequest, SidecarRunner, plan_concat};

use super::{Messages, run_planned};
use crate::cli::ConcatArgs;

const MESSAGES: Messages = Messages {
    success: "Videos concatenated successfully.",
    failure: "Error concatenating videos",
};

pub fn run_concat(args: ConcatArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);

    let request = ConcatRequest::from_args(&args.videos);
    log::debug!("Concatenation request: {:?}", request);

    let plan = plan_concat(&runner, &request, &ConcatConfig::default(), &tools);
    run_planned(&runner, plan, &tools, &MESSAGES)
}
