//! Utility functions for input validation and output path derivation.
//!
//! Every utility validates its inputs before building an external
//! invocation and, when the user gives no output path, places the output
//! next to the input with an operation-specific suffix.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Fails with `InputNotFound` unless `path` is an existing regular file.
pub fn ensure_input_exists(path: &Path) -> CoreResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CoreError::InputNotFound(path.to_path_buf()))
    }
}

/// Validates every path, stopping at the first missing one.
pub fn ensure_inputs_exist<P: AsRef<Path>>(paths: &[P]) -> CoreResult<()> {
    paths.iter().try_for_each(|p| ensure_input_exists(p.as_ref()))
}

/// Derives `<dir>/<stem>_<suffix><.ext>` from `input`.
///
/// The extension is kept as written, so `clip.MOV` becomes `clip_highq.MOV`.
/// An input without an extension gives an output without one.
pub fn derive_output_path(input: &Path, suffix: &str) -> CoreResult<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get file stem for {}", input.display()))
        })?
        .to_string_lossy();

    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    Ok(input.with_file_name(file_name))
}

/// Uses the explicit output path when given, otherwise derives one from `input`.
pub fn resolve_output_path(
    input: &Path,
    explicit: Option<&Path>,
    suffix: &str,
) -> CoreResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => derive_output_path(input, suffix),
    }
}

/// Checks whether `path` ends with one of `extensions` (case-insensitive, no dot).
#[must_use]
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e.as_ref())))
        .unwrap_or(false)
}

/// Safely extracts filename from a path with consistent error handling.
pub fn get_filename_safe(path: &Path) -> CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}
