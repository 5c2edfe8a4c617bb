use clipkit_core::{RemoveAudioConfig, SidecarRunner, plan_remove_audio};

use super::{Messages, run_planned};
use crate::cli::NoAudioArgs;

const MESSAGES: Messages = Messages {
    success: "Audio removed successfully.",
    failure: "Error removing audio",
};

pub fn run_noaudio(args: NoAudioArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);
    let plan = plan_remove_audio(&args.input, args.output.as_deref(), &RemoveAudioConfig::default(), &tools);
    run_planned(&runner, plan, &tools, &MESSAGES)
}
