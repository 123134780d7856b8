//! core/tags/mod.rs
//!
//! Tag read/write behind one small interface.
//! Public API:
//! - [`TagContainer`]: an open file's tags as `key -> list of strings`.
//! - [`open`] probes the file, then picks a backend by extension:
//!   - `.mp3` -> ID3v2 via the `id3` crate
//!   - `.ogg` -> Vorbis comments via `lofty`
//!
//! The rest of the app only ever sees `Box<dyn TagContainer>`, so the
//! backends can change without touching the editing workflow.

mod mp3;
mod ogg;
mod probe;
mod util;

use std::path::Path;

use tracing::debug;

use super::error::TagError;
use super::types::TagKey;

/// An open handle to one audio file's embedded metadata.
///
/// Mutations stay in memory until [`TagContainer::save`].
pub trait TagContainer {
    /// File the container was opened from (and saves back to).
    fn path(&self) -> &Path;

    /// Current values for `key`, or `None` if the key is absent.
    fn get(&self, key: TagKey) -> Option<Vec<String>>;

    /// Replace every value stored under `key`.
    fn set(&mut self, key: TagKey, values: Vec<String>);

    /// Write the container back to [`TagContainer::path`].
    fn save(&mut self) -> Result<(), TagError>;
}

/// Open `path` as a tagged audio container.
///
/// Fails with [`TagError::Unsupported`] if the bytes aren't a playable
/// MP3/Ogg stream, or the extension has no backend.
pub fn open(path: &Path) -> Result<Box<dyn TagContainer>, TagError> {
    let unsupported = |reason: String| TagError::Unsupported {
        path: path.to_path_buf(),
        reason,
    };

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !matches!(ext.as_str(), "mp3" | "ogg") {
        return Err(unsupported(format!("no tag backend for extension {ext:?}")));
    }

    probe::ensure_audio(path).map_err(unsupported)?;
    debug!(path = ?path, backend = %ext, "opening tags");

    match ext.as_str() {
        "mp3" => Ok(Box::new(mp3::Id3Container::open(path)?)),
        _ => Ok(Box::new(ogg::VorbisContainer::open(path)?)),
    }
}
