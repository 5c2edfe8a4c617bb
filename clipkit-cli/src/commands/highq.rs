use clipkit_core::{QualityConfig, SidecarRunner, plan_quality};

use super::{Messages, run_planned};
use crate::cli::QualityArgs;

const MESSAGES: Messages = Messages {
    success: "Video processed successfully.",
    failure: "Error improving video quality",
};

pub fn run_highq(args: QualityArgs) -> i32 {
    let tools = args.common.tool_config();
    let runner = SidecarRunner::new(&tools);
    let config = quality_config(&args);
    let plan = plan_quality(&args.input, args.output.as_deref(), &config, &tools);
    run_planned(&runner, plan, &tools, &MESSAGES)
}

fn quality_config(args: &QualityArgs) -> QualityConfig {
    QualityConfig {
        crf: args.crf,
        preset: args.preset.clone(),
        video_bitrate_kbps: args.v_bitrate,
        audio_bitrate_kbps: args.a_bitrate,
        profile: args.profile.clone(),
        level: args.level.clone(),
        ..QualityConfig::default()
    }
}
