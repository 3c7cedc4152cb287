use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::utils::{ImageFormat, OptimizerError, OptimizerResult};

/// Get file size in bytes
pub fn file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    let path = path.as_ref();
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(path, e))
}

/// Returns `path` with its `from` suffix replaced by the `to` suffix.
///
/// Works on the file name, so `.png` becomes `.webp` even though `Path`
/// sees no extension there. Directory names are left alone.
pub fn sibling_with_format(path: impl AsRef<Path>, from: ImageFormat, to: ImageFormat) -> PathBuf {
    let path = path.as_ref();
    let stem = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(from.suffix().as_str()));

    match stem {
        Some(stem) => path.with_file_name(format!("{stem}{}", to.suffix())),
        // Non UTF-8 names always have a real stem before the dot
        None => path.with_extension(to.primary_extension()),
    }
}

/// Lists the file names in `dir` that carry `format`'s extension, in byte order.
pub fn sorted_file_names(dir: impl AsRef<Path>, format: ImageFormat) -> OptimizerResult<Vec<OsString>> {
    let dir = dir.as_ref();
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| OptimizerError::io(dir, e))? {
        let entry = entry.map_err(|e| OptimizerError::io(dir, e))?;
        let name = entry.file_name();
        if format.matches_file_name(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Deletes a file, reporting the path on failure.
pub fn remove_file(path: impl AsRef<Path>) -> OptimizerResult<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| OptimizerError::io(path, e))?;
    debug!("Removed {}", path.display());
    Ok(())
}
