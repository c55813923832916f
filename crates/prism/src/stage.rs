//! The three pipeline stages.
//!
//! Each stage is a single pass: it fully reads its input, fully writes its
//! output, and regenerates everything on every run (overwrite semantics).
//! Stages are designed to be invoked sequentially; concurrent invocation
//! against the same output directory is unsupported.

mod combine;
mod convert;
mod split;

pub use combine::{CombineReport, Combiner};
pub use convert::{ConvertReport, Converter};
pub use split::{SplitReport, Splitter};

use std::{ffi::OsStr, fs, path::{Path, PathBuf}};

use crate::error::PrismError;

/// List the files in `dir` with the given extension, sorted by file name
/// for deterministic, stable ordering.
///
/// # Errors
///
/// Returns [`PrismError::MissingInput`] if `dir` does not exist or is not
/// a directory.
fn sorted_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, PrismError> {
    if !dir.is_dir() {
        return Err(PrismError::MissingInput(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(OsStr::to_str) == Some(extension)
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_reported() {
        let err = sorted_files_with_extension(Path::new("no/such/directory"), "svg").unwrap_err();
        assert!(matches!(err, PrismError::MissingInput(_)));
    }

    #[test]
    fn test_listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("color_7b00ff.svg"), "b").unwrap();
        fs::write(dir.path().join("color_001645.svg"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let files = sorted_files_with_extension(dir.path(), "svg").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["color_001645.svg", "color_7b00ff.svg"]);
    }
}
