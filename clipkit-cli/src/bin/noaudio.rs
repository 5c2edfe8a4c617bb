// clipkit-cli/src/bin/noaudio.rs
//
// Entry point of clipkit-noaudio: copy the video stream and drop the audio.

use clipkit_cli::commands::noaudio::run_noaudio;
use clipkit_cli::{NoAudioArgs, logging, parse_args};

fn main() {
    let args: NoAudioArgs = parse_args();
    logging::init(args.common.verbose);
    std::process::exit(run_noaudio(args));
}
