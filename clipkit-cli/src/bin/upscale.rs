// clipkit-cli/src/bin/upscale.rs
//
// Entry point of clipkit-upscale: resize one clip to an explicit size.

use clipkit_cli::commands::upscale::run_upscale;
use clipkit_cli::{UpscaleArgs, logging, parse_args};

fn main() {
    let args: UpscaleArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_upscale(args));
}
