//! Core data types shared between core logic and the console layer.
//!
//! Rule of thumb:
//! - These are “boring bags of data”
//! - No console code
//! - No filesystem code
//! - No tag parsing code

use std::fmt;

/// The small common vocabulary we read/write on every tag backend.
///
/// Each backend maps these onto its own frame ids / item keys
/// (ID3: TPE1/TIT2/TALB/TPE2, Vorbis: ARTIST/TITLE/ALBUM/ALBUMARTIST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    Artist,
    Title,
    Album,
    AlbumArtist,
}

impl TagKey {
    /// Simplified key name (lowercase, no separators).
    pub fn as_str(self) -> &'static str {
        match self {
            TagKey::Artist => "artist",
            TagKey::Title => "title",
            TagKey::Album => "album",
            TagKey::AlbumArtist => "albumartist",
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field the operator fills in, in the fixed order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Artist,
    Title,
    Album,
    FeaturedArtists,
}

impl Field {
    /// Prompt order. The editor walks this array front to back.
    pub const ALL: [Field; 4] = [
        Field::Artist,
        Field::Title,
        Field::Album,
        Field::FeaturedArtists,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            Field::Artist => "Enter new artist name: ",
            Field::Title => "Enter new song title: ",
            Field::Album => "Enter new album: ",
            Field::FeaturedArtists => {
                "Enter featured artists (comma separated, leave blank if none): "
            }
        }
    }
}

/// The four values collected by the field editor.
///
/// Empty strings are allowed (nothing is validated); an empty
/// `featured_artists` just means "no features".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMetadata {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub featured_artists: Vec<String>,
}

/// Counters for one batch run, printed at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files the enumerator returned.
    pub found: usize,
    /// Unreadable/unsupported, never prompted.
    pub skipped: usize,
    /// Tags saved successfully.
    pub retagged: usize,
    /// Moved into `DONE/`.
    pub moved: usize,
    pub save_failures: usize,
    pub move_failures: usize,
}
