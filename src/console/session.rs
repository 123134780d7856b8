//! console/session.rs
//! Drive one batch: list files -> show tags -> ask -> apply, one file at a time.
//!
//! Per-file failures are printed and the loop moves on; only console I/O
//! errors (including closed stdin) end the batch early.

use std::io;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use super::Operator;
use super::display::show_current_metadata;
use super::editor::prompt_for_new_metadata;
use crate::core;
use crate::core::tags::TagContainer;
use crate::core::types::BatchSummary;
use crate::core::update::{self, UpdateReport};

/// Outcome of one file, for the summary counters.
enum FileOutcome {
    Skipped,
    Updated(UpdateReport),
}

/// List `dir` and process everything found.
pub fn process_directory(console: &mut impl Operator, dir: &Path) -> anyhow::Result<BatchSummary> {
    let files = core::list_audio_files(dir)?;
    info!(dir = ?dir, count = files.len(), "found audio files");

    process_all_files(console, files.as_slice()).context("console I/O failed")
}

/// Process every file in `files`, in order.
pub fn process_all_files(
    console: &mut impl Operator,
    files: &[impl AsRef<Path>],
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary {
        found: files.len(),
        ..BatchSummary::default()
    };

    if files.is_empty() {
        console.say("No MP3 or OGG files found in the directory.")?;
        return Ok(summary);
    }

    for path in files {
        match process_file(console, path.as_ref())? {
            FileOutcome::Skipped => summary.skipped += 1,
            FileOutcome::Updated(report) => {
                match report.saved {
                    Ok(()) => summary.retagged += 1,
                    Err(_) => summary.save_failures += 1,
                }
                match report.moved {
                    Ok(()) => summary.moved += 1,
                    Err(_) => summary.move_failures += 1,
                }
            }
        }
    }

    console.say(&format!(
        "Processed {} file(s): {} retagged, {} moved, {} skipped.",
        summary.found, summary.retagged, summary.moved, summary.skipped
    ))?;
    info!(?summary, "batch finished");

    Ok(summary)
}

fn process_file(console: &mut impl Operator, path: &Path) -> io::Result<FileOutcome> {
    let Some(mut tags) = show_current_metadata(console, path)? else {
        return Ok(FileOutcome::Skipped);
    };

    let report = edit_and_apply(console, tags.as_mut(), path)?;
    Ok(FileOutcome::Updated(report))
}

/// Ask for the new values, apply them, and print how it went.
fn edit_and_apply(
    console: &mut impl Operator,
    tags: &mut dyn TagContainer,
    path: &Path,
) -> io::Result<UpdateReport> {
    console.say("Please provide new metadata values.")?;
    let meta = prompt_for_new_metadata(console)?;
    let report = update::apply(tags, path, &meta);

    match &report.saved {
        Ok(()) => console.say("Metadata updated successfully.")?,
        Err(e) => console.say(&format!(
            "Error saving metadata for {}: {e}",
            path.display()
        ))?,
    }
    match &report.moved {
        Ok(()) => console.say(&format!("File renamed to: {}", report.new_file_name()))?,
        Err(e) => console.say(&format!("Error renaming file {}: {e}", path.display()))?,
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::console::testing::{printed, scripted};
    use crate::core::tags::testing::{MemoryTags, SAMPLE_MP3, SAMPLE_OGG, write_sample};
    use crate::core::types::TagKey;
    use crate::core::update::DONE_DIR;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn empty_batch_says_so() {
        let mut console = scripted(&[]);
        let none: [PathBuf; 0] = [];
        let summary = process_all_files(&mut console, &none[..]).unwrap();

        assert_eq!(summary, BatchSummary::default());
        assert_eq!(printed(console), "No MP3 or OGG files found in the directory.\n");
    }

    #[test]
    fn unreadable_files_are_skipped_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![dir.path().join("a.mp3"), dir.path().join("b.ogg")];
        for f in &files {
            fs::write(f, b"plain text, no audio here").unwrap();
        }

        // No input lines: any prompt would hit EOF and fail the test.
        let mut console = Console::new(io::empty(), Vec::new());
        let summary = process_all_files(&mut console, files.as_slice()).unwrap();

        assert_eq!(summary.found, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.retagged + summary.moved, 0);
        assert!(files.iter().all(|f| f.exists()));

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches("Unsupported file type").count(), 2);
        assert!(out.ends_with("Processed 2 file(s): 0 retagged, 0 moved, 2 skipped.\n"));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = scripted(&[]);

        assert!(process_directory(&mut console, &dir.path().join("nope")).is_err());
    }

    #[test]
    fn edit_and_apply_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.OGG");
        fs::write(&path, b"x").unwrap();

        let mut tags = MemoryTags::new(&path);
        let mut console = scripted(&["X", "Y", "Z", "Bob"]);
        let report = edit_and_apply(&mut console, &mut tags, &path).unwrap();

        assert_eq!(report.destination, dir.path().join(DONE_DIR).join("X - Y.OGG"));
        assert_eq!(tags.get(TagKey::Artist), Some(vec!["X ft. Bob".to_string()]));

        let out = printed(console);
        assert!(out.starts_with("Please provide new metadata values.\n"));
        assert!(out.contains("Metadata updated successfully.\n"));
        assert!(out.ends_with("File renamed to: X - Y.OGG\n"));
    }

    #[test]
    fn edit_and_apply_reports_both_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.mp3");

        let mut tags = MemoryTags::new(&path);
        tags.fail_save = true;
        let mut console = scripted(&["X", "Y", "", ""]);
        let report = edit_and_apply(&mut console, &mut tags, &path).unwrap();

        assert!(report.saved.is_err());
        assert!(report.moved.is_err());

        let out = printed(console);
        assert!(out.contains(&format!(
            "Error saving metadata for {}: disk full",
            path.display()
        )));
        assert!(out.contains(&format!("Error renaming file {}: ", path.display())));
    }

    /// Run one real file through the whole batch and check tags and location.
    fn retags_and_files_away(name: &str, bytes: &[u8], ext: &str) {
        let dir = tempfile::tempdir().unwrap();
        let original = write_sample(dir.path(), name, bytes);

        let mut console = scripted(&["Jane", "Song", "Demos", "Bob, Amy"]);
        let summary = process_directory(&mut console, dir.path()).unwrap();

        assert_eq!(summary.found, 1);
        assert_eq!(summary.retagged, 1);
        assert_eq!(summary.moved, 1);
        assert_eq!(summary.save_failures + summary.move_failures, 0);

        let done = dir.path().join(DONE_DIR).join(format!("Jane - Song.{ext}"));
        assert!(done.is_file(), "{done:?} missing");
        assert!(!original.exists());

        let tags = crate::core::tags::open(&done).unwrap();
        let one = |s: &str| Some(vec![s.to_string()]);
        assert_eq!(tags.get(TagKey::Artist), one("Jane ft. Bob ft. Amy"));
        assert_eq!(tags.get(TagKey::Title), one("Jane - Song"));
        assert_eq!(tags.get(TagKey::Album), one("Demos"));
        assert_eq!(tags.get(TagKey::AlbumArtist), one("Jane"));

        let out = printed(console);
        assert!(out.contains("Metadata updated successfully.\n"));
        assert!(out.contains(&format!("File renamed to: Jane - Song.{ext}\n")));
        assert!(out.ends_with("Processed 1 file(s): 1 retagged, 1 moved, 0 skipped.\n"));
    }

    #[test]
    fn mp3_is_retagged_and_moved_to_done() {
        retags_and_files_away("track.mp3", SAMPLE_MP3, "mp3");
    }

    #[test]
    fn ogg_is_retagged_and_moved_to_done() {
        retags_and_files_away("track.ogg", SAMPLE_OGG, "ogg");
    }
}
