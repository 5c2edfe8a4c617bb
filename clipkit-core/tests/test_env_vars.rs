use clipkit_core::config::{BatchUpscaleConfig, ToolConfig, UpscaleSharpenConfig};
use std::env;
use std::path::PathBuf;

// Environment variables are process-wide, so every override is exercised
// in this single test.
#[test]
fn test_env_var_overrides() {
    let keys = [
        "CLIPKIT_FFMPEG",
        "CLIPKIT_OVERWRITE",
        "CLIPKIT_UPSCALE_WIDTH",
        "CLIPKIT_UPSCALE_CRF",
        "CLIPKIT_UPSCALE_SHARPEN",
        "CLIPKIT_BATCH_INPUT_DIR",
    ];

    unsafe {
        for key in keys {
            env::remove_var(key);
        }
        env::set_var("CLIPKIT_FFMPEG", "/opt/ffmpeg/bin/ffmpeg");
        env::set_var("CLIPKIT_OVERWRITE", "true");
        env::set_var("CLIPKIT_UPSCALE_WIDTH", "2560");
        env::set_var("CLIPKIT_UPSCALE_CRF", "not-a-number");
        env::set_var("CLIPKIT_UPSCALE_SHARPEN", "3:3:0.5:3:3:0.0");
        env::set_var("CLIPKIT_BATCH_INPUT_DIR", "incoming");
    }

    let tools = ToolConfig::from_env();
    assert_eq!(tools.ffmpeg_path, "/opt/ffmpeg/bin/ffmpeg");
    assert_eq!(tools.ffprobe_path, "ffprobe");
    assert!(tools.overwrite);

    let upscale = UpscaleSharpenConfig::from_env();
    assert_eq!(upscale.width, 2560);
    assert_eq!(upscale.height, 2160);
    assert_eq!(upscale.crf, 18); // Unparsable value keeps the default
    assert_eq!(upscale.sharpen, "3:3:0.5:3:3:0.0");

    let batch = BatchUpscaleConfig::from_env();
    assert_eq!(batch.input_dir, PathBuf::from("incoming"));
    assert_eq!(batch.output_dir, PathBuf::from("output_videos"));

    unsafe {
        for key in keys {
            env::remove_var(key);
        }
    }
}
