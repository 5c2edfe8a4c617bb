// clipkit-cli/src/lib.rs
//
// Library portion of the clipkit binaries.
// Contains argument definitions, logging setup, terminal output helpers and
// the per-utility command logic. Each binary under src/bin/ only parses its
// arguments, initialises logging and hands over to its command.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;

// Re-export items needed by the binaries or integration tests
pub use cli::{
    BatchUpscaleArgs, CommonArgs, ConcatArgs, NoAudioArgs, QualityArgs, ReverseArgs, UpscaleArgs,
    UpsharpenArgs, parse_args,
};
