// clipkit-cli/src/bin/highq.rs
//
// Entry point of clipkit-highq: re-encode with libx264 at a chosen CRF or bitrate.

use clipkit_cli::commands::highq::run_highq;
use clipkit_cli::{QualityArgs, logging, parse_args};

fn main() {
    let args: QualityArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_highq(args));
}
