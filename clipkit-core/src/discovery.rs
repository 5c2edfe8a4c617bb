//! File discovery for the batch upscaler.
//!
//! Scans the top level of a directory for files with one of the configured
//! video extensions. Subdirectories are not searched.

use crate::error::CoreResult;

use std::path::{Path, PathBuf};

/// Finds video files in the top level of `input_dir`.
///
/// Results are grouped by extension in the order of `extensions`, and sorted
/// by file name inside each group. Matching is case-insensitive. An empty
/// result is not an error.
///
/// # Examples
///
/// ```rust,no_run
/// use clipkit_core::find_video_files;
/// use std::path::Path;
///
/// let files = find_video_files(Path::new("videos"), &["mp4", "mkv"]).unwrap();
/// println!("Found {} video files.", files.len());
/// ```
pub fn find_video_files<S: AsRef<str>>(input_dir: &Path, extensions: &[S]) -> CoreResult<Vec<PathBuf>> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.is_file().then_some(path)
        })
        .collect();
    candidates.sort();

    let files = extensions
        .iter()
        .flat_map(|ext| {
            candidates.iter().filter(move |path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(ext.as_ref()))
            })
        })
        .cloned()
        .collect();

    Ok(files)
}
