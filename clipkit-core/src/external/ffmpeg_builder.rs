//! FFmpeg argument builder utilities
//!
//! Command construction is kept separate from execution: builders here only
//! produce argument lists, so every transformation can be planned and
//! inspected without running anything.

use crate::config::ToolConfig;

use std::path::{Path, PathBuf};

/// A fully planned ffmpeg run: its arguments and the file it will write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegInvocation {
    /// Arguments, program name excluded
    pub args: Vec<String>,
    pub output_path: PathBuf,
}

impl FfmpegInvocation {
    /// Renders `program` and the arguments as one space-separated line.
    #[must_use]
    pub fn command_line(&self, program: &str) -> String {
        std::iter::once(program)
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when `flag` appears as a standalone argument.
    #[must_use]
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Value following the first occurrence of `flag`.
    #[must_use]
    pub fn arg_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }

    /// Values following every occurrence of `flag`.
    #[must_use]
    pub fn arg_values(&self, flag: &str) -> Vec<&str> {
        self.args
            .windows(2)
            .filter(|pair| pair[0] == flag)
            .map(|pair| pair[1].as_str())
            .collect()
    }
}

/// Builder for ffmpeg argument lists with the common global options applied.
#[derive(Debug, Clone)]
pub struct FfmpegArgs {
    args: Vec<String>,
}

impl FfmpegArgs {
    /// Starts an argument list with `-hide_banner` (when configured) and the
    /// overwrite policy (`-y` or `-n`).
    #[must_use]
    pub fn new(tools: &ToolConfig) -> Self {
        let mut args = Vec::new();
        if tools.hide_banner {
            args.push("-hide_banner".to_string());
        }
        args.push(if tools.overwrite { "-y" } else { "-n" }.to_string());
        Self { args }
    }

    /// Adds `-i <path>`.
    #[must_use]
    pub fn input(self, path: &Path) -> Self {
        self.opt("-i", path.to_string_lossy())
    }

    /// Adds a flag followed by its value.
    #[must_use]
    pub fn opt(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.into());
        self
    }

    /// Adds `flag value` only when `value` is present.
    #[must_use]
    pub fn opt_if_some(self, flag: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.opt(flag, value),
            None => self,
        }
    }

    /// Adds a standalone flag.
    #[must_use]
    pub fn flag(mut self, flag: &str) -> Self {
        self.args.push(flag.to_string());
        self
    }

    /// Finishes the list with the output path.
    #[must_use]
    pub fn output(mut self, path: &Path) -> FfmpegInvocation {
        self.args.push(path.to_string_lossy().into_owned());
        FfmpegInvocation {
            args: self.args,
            output_path: path.to_path_buf(),
        }
    }
}

/// Builder for constructing video filter chains
#[derive(Default)]
pub struct VideoFilterChain {
    filters: Vec<String>,
}

impl VideoFilterChain {
    /// Creates a new empty filter chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `scale=W:H` filter
    #[must_use]
    pub fn add_scale(self, width: u32, height: u32) -> Self {
        self.add_filter(format!("scale={width}:{height}"))
    }

    /// Adds an `unsharp` filter; empty coefficients are skipped
    #[must_use]
    pub fn add_sharpen(self, coefficients: &str) -> Self {
        if coefficients.is_empty() {
            self
        } else {
            self.add_filter(format!("unsharp={coefficients}"))
        }
    }

    /// Adds a custom filter to the chain
    #[must_use]
    pub fn add_filter(mut self, filter: String) -> Self {
        if !filter.is_empty() {
            self.filters.push(filter);
        }
        self
    }

    /// Builds the filter chain into a single filter string
    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(","))
        }
    }
}

/// Builds a `concat` filter graph over `inputs` inputs, in input order.
///
/// With audio every input contributes a `[i:v][i:a]` pair and the graph
/// produces `[outv][outa]`; without audio only `[i:v]` pads are referenced
/// and the graph produces `[outv]`.
#[must_use]
pub fn concat_filter_graph(inputs: usize, with_audio: bool) -> String {
    let pads: String = (0..inputs)
        .map(|i| {
            if with_audio {
                format!("[{i}:v][{i}:a]")
            } else {
                format!("[{i}:v]")
            }
        })
        .collect();

    if with_audio {
        format!("{pads}concat=n={inputs}:v=1:a=1[outv][outa]")
    } else {
        format!("{pads}concat=n={inputs}:v=1:a=0[outv]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_filter_chain_empty() {
        assert_eq!(VideoFilterChain::new().build(), None);
    }

    #[test]
    fn test_video_filter_chain_scale_and_sharpen() {
        let chain = VideoFilterChain::new()
            .add_scale(3840, 2160)
            .add_sharpen("5:5:1.0:5:5:0.0");
        assert_eq!(
            chain.build(),
            Some("scale=3840:2160,unsharp=5:5:1.0:5:5:0.0".to_string())
        );
    }

    #[test]
    fn test_video_filter_chain_empty_filters_ignored() {
        let chain = VideoFilterChain::new()
            .add_sharpen("")
            .add_filter(String::new())
            .add_filter("reverse".to_string());
        assert_eq!(chain.build(), Some("reverse".to_string()));
    }

    #[test]
    fn test_concat_filter_graph_with_audio() {
        assert_eq!(
            concat_filter_graph(3, true),
            "[0:v][0:a][1:v][1:a][2:v][2:a]concat=n=3:v=1:a=1[outv][outa]"
        );
    }

    #[test]
    fn test_concat_filter_graph_video_only() {
        assert_eq!(
            concat_filter_graph(2, false),
            "[0:v][1:v]concat=n=2:v=1:a=0[outv]"
        );
    }

    #[test]
    fn test_ffmpeg_args_global_options() {
        let tools = ToolConfig::default();
        let invocation = FfmpegArgs::new(&tools)
            .input(Path::new("in.mp4"))
            .flag("-an")
            .output(Path::new("out.mp4"));
        assert_eq!(
            invocation.args,
            vec!["-hide_banner", "-n", "-i", "in.mp4", "-an", "out.mp4"]
        );
        assert_eq!(invocation.output_path, PathBuf::from("out.mp4"));

        let tools = ToolConfig {
            overwrite: true,
            hide_banner: false,
            ..ToolConfig::default()
        };
        let invocation = FfmpegArgs::new(&tools).output(Path::new("o.mp4"));
        assert_eq!(invocation.args, vec!["-y", "o.mp4"]);
    }

    #[test]
    fn test_invocation_inspection() {
        let invocation = FfmpegArgs::new(&ToolConfig::default())
            .input(Path::new("a.mp4"))
            .input(Path::new("b.mp4"))
            .opt_if_some("-r", None::<String>)
            .opt_if_some("-b:v", Some("6000k"))
            .output(Path::new("c.mp4"));

        assert_eq!(invocation.arg_values("-i"), vec!["a.mp4", "b.mp4"]);
        assert_eq!(invocation.arg_value("-b:v"), Some("6000k"));
        assert!(!invocation.has_arg("-r"));
        assert_eq!(
            invocation.command_line("ffmpeg"),
            "ffmpeg -hide_banner -n -i a.mp4 -i b.mp4 -b:v 6000k c.mp4"
        );
    }
}
