//! CLI handler for `lazkit rename`.

use std::path::Path;

use lazkit_core::rename::rename_captures;

/// Run the batch rename over `dir`.
///
/// Successes go to stdout as `Renamed: <original> -> <new>`, one line per
/// file; failures go to stderr. Returns true only when every matched file
/// was renamed (a run with zero matches is a success).
pub fn handle_rename(dir: &Path) -> bool {
    let report = match rename_captures(dir) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return false;
        }
    };

    for capture in &report.renamed {
        println!("Renamed: {} -> {}", capture.from, capture.to);
    }
    for error in &report.errors {
        eprintln!("Error: {error}");
    }

    report.is_clean()
}
