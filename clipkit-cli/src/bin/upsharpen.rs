// clipkit-cli/src/bin/upsharpen.rs
//
// Entry point of clipkit-upsharpen: upscale and apply an unsharp pass.

use clipkit_cli::commands::upsharpen::run_upsharpen;
use clipkit_cli::{UpsharpenArgs, logging, parse_args};

fn main() {
    let args: UpsharpenArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_upsharpen(args));
}
