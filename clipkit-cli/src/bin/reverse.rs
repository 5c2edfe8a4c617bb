// clipkit-cli/src/bin/reverse.rs
//
// Entry point of clipkit-reverse: play a clip backwards with its own encoding parameters.

use clipkit_cli::commands::reverse::run_reverse;
use clipkit_cli::{ReverseArgs, logging, parse_args};

fn main() {
    let args: ReverseArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_reverse(args));
}
