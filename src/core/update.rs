//! core/update.rs
//!
//! Apply a [`NewMetadata`] to one file:
//! 1. write artist/title/album/albumartist into the open container
//! 2. save it (best-effort)
//! 3. move the file to `DONE/{artist} - {title}{ext}` (best-effort)
//!
//! Neither failure stops the other step: a file may end up re-tagged but
//! not moved, or moved with its old tags. Both are final for this run.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::{MoveError, TagError};
use super::tags::TagContainer;
use super::types::{NewMetadata, TagKey};

/// Finished files land here, next to where they started.
pub const DONE_DIR: &str = "DONE";

/// Outcome of [`apply`] for one file.
#[derive(Debug)]
pub struct UpdateReport {
    /// Where the file was (or would have been) moved to.
    pub destination: PathBuf,
    pub saved: Result<(), TagError>,
    pub moved: Result<(), MoveError>,
}

impl UpdateReport {
    pub fn new_file_name(&self) -> String {
        self.destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// "{artist} - {title}", used for both the title tag and the file name.
pub fn combined_title(artist: &str, title: &str) -> String {
    format!("{artist} - {title}")
}

/// Primary artist plus " ft. {name}" for every featured artist, in order.
pub fn contributing_artists(artist: &str, featured: &[String]) -> String {
    featured
        .iter()
        .fold(artist.to_string(), |acc, name| format!("{acc} ft. {name}"))
}

/// New file name, keeping the original extension byte-for-byte
/// (`track.OGG` -> `X - Y.OGG`, no extension -> none).
pub fn done_file_name(artist: &str, title: &str, original: &Path) -> OsString {
    let mut name = OsString::from(combined_title(artist, title));
    if let Some(ext) = original.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Write the new values into `tags`, save, then move `path` into `DONE/`.
///
/// Always returns the computed destination, even if the move failed.
pub fn apply(tags: &mut dyn TagContainer, path: &Path, meta: &NewMetadata) -> UpdateReport {
    tags.set(TagKey::AlbumArtist, vec![meta.artist.clone()]);
    tags.set(
        TagKey::Title,
        vec![combined_title(&meta.artist, &meta.title)],
    );
    tags.set(TagKey::Album, vec![meta.album.clone()]);
    tags.set(
        TagKey::Artist,
        vec![contributing_artists(&meta.artist, &meta.featured_artists)],
    );

    let saved = tags.save();
    match &saved {
        Ok(()) => debug!(path = ?path, "tags saved"),
        Err(e) => warn!(path = ?path, error = %e, "tag save failed"),
    }

    let parent = path.parent().unwrap_or(Path::new(""));
    let done_dir = parent.join(DONE_DIR);
    let destination = done_dir.join(done_file_name(&meta.artist, &meta.title, path));

    let moved = ensure_dir(&done_dir).and_then(|()| {
        fs::rename(path, &destination).map_err(|source| MoveError::Rename {
            to: destination.clone(),
            source,
        })
    });
    match &moved {
        Ok(()) => debug!(from = ?path, to = ?destination, "file moved"),
        Err(e) => warn!(path = ?path, error = %e, "file move failed"),
    }

    UpdateReport {
        destination,
        saved,
        moved,
    }
}

/// Check-then-create; an existing directory is fine.
fn ensure_dir(dir: &Path) -> Result<(), MoveError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| MoveError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })
}
