// clipkit-cli/src/bin/concat.rs
//
// Entry point of clipkit-concat: join clips end to end, keeping audio when every clip has it.

use clipkit_cli::commands::concat::run_concat;
use clipkit_cli::{ConcatArgs, logging, parse_args};

fn main() {
    let args: ConcatArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_concat(args));
}
