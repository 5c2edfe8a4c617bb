// clipkit-cli/src/bin/batch_upscale.rs
//
// Entry point of clipkit-batch-upscale: resize a folder of clips to 1080p.

use clipkit_cli::commands::batch_upscale::run_batch_upscale;
use clipkit_cli::{BatchUpscaleArgs, logging, parse_args};

fn main() {
    let args: BatchUpscaleArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_batch_upscale(args));
}
