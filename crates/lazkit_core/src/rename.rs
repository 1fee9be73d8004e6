//! Batch renaming of UTC-stamped captures to epoch-stamped names.
//!
//! One linear pass over a target directory: discover candidates with a
//! shell-style glob, validate each name strictly, convert the stamp to epoch
//! seconds, and rename in place. Files are processed in lexicographic name
//! order and in isolation from each other; a failure is recorded in the
//! report and the batch moves on.

use std::fs;
use std::path::Path;

use glob::Pattern;
use log::debug;
use thiserror::Error;

use crate::capture::{self, CaptureName};

/// Shell-style pattern selecting candidate captures before strict parsing.
pub const CAPTURE_GLOB: &str = "do-lidar_*_UTC.laz";

/// One successful rename, recorded for the confirmation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedCapture {
    /// Original UTC-stamped filename.
    pub from: String,
    /// New epoch-stamped filename.
    pub to: String,
}

/// Outcome of one batch over a directory.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Successful renames, in processing order.
    pub renamed: Vec<RenamedCapture>,
    /// Glob-matching entries skipped silently (non-regular files, names
    /// that fail strict validation).
    pub skipped: usize,
    /// Per-file failures, each with the filename and reason.
    pub errors: Vec<String>,
}

impl RenameReport {
    /// True when every matched file was renamed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The batch itself could not run.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The candidate glob did not compile.
    #[error("invalid capture pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// The target directory could not be listed.
    #[error("failed to read directory {dir}: {source}")]
    ReadDir {
        /// Directory that was being listed.
        dir: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Rename every UTC-stamped capture in `dir` to its epoch-stamped name.
///
/// The directory is listed once; entries whose names match [`CAPTURE_GLOB`]
/// are processed in lexicographic byte order of the filename. Everything
/// else is left untouched. Per-file failures (impossible calendar fields,
/// destination collision, filesystem errors) land in
/// [`RenameReport::errors`] and never abort the remaining files.
///
/// A destination that already exists is refused, not overwritten; the
/// source file stays as it was.
pub fn rename_captures(dir: &Path) -> Result<RenameReport, RenameError> {
    let pattern = Pattern::new(CAPTURE_GLOB)?;

    let entries = fs::read_dir(dir).map_err(|source| RenameError::ReadDir {
        dir: dir.display().to_string(),
        source,
    })?;

    let mut candidates: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| pattern.matches(name))
        .collect();
    candidates.sort();

    let mut report = RenameReport::default();
    for name in candidates {
        let source = dir.join(&name);

        // Directories and dangling symlinks that happen to match the glob
        // are not captures.
        if !source.is_file() {
            report.skipped += 1;
            continue;
        }

        let Some(stamp) = CaptureName::parse(&name) else {
            report.skipped += 1;
            continue;
        };

        let epoch = match stamp.to_epoch() {
            Ok(epoch) => epoch,
            Err(e) => {
                report.errors.push(format!("{name}: {e}"));
                continue;
            }
        };

        let new_name = capture::epoch_filename(epoch);
        let dest = dir.join(&new_name);
        if dest.exists() {
            report
                .errors
                .push(format!("{name}: destination {new_name} already exists"));
            continue;
        }

        if let Err(e) = fs::rename(&source, &dest) {
            report.errors.push(format!("{name}: rename failed: {e}"));
            continue;
        }

        debug!("renamed {name} -> {new_name}");
        report.renamed.push(RenamedCapture {
            from: name,
            to: new_name,
        });
    }

    Ok(report)
}
