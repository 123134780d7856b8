//! core/library.rs
//! Find the audio files to process in one directory (non-recursive).

use std::path::{Path, PathBuf};

use tracing::trace;

use super::error::ScanError;

/// Name suffixes we pick up. Matched case-sensitively, like the rest of
/// the batch (`b.MP3` is left alone).
pub const AUDIO_SUFFIXES: [&str; 2] = [".mp3", ".ogg"];

/// List files directly inside `dir` whose name ends in one of [`AUDIO_SUFFIXES`].
///
/// - Subdirectories are ignored, even if named like `x.mp3/`
/// - Non-UTF-8 names are ignored
/// - Sorted, so the processing order is deterministic
/// - Empty result is not an error
pub fn list_audio_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let scan_err = |source| ScanError {
        dir: dir.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let path = entry.path();

        // `is_file` follows symlinks, so a link to a track counts.
        if path.is_file() && has_audio_suffix(&path) {
            out.push(path);
        } else {
            trace!(path = ?path, "skipping directory entry");
        }
    }

    out.sort();
    Ok(out)
}

fn has_audio_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| AUDIO_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}
