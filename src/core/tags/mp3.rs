//! core/tags/mp3.rs
//! ID3v2 backend for `.mp3` files.
//!
//! Key mapping:
//! - artist      -> TPE1
//! - title       -> TIT2
//! - album       -> TALB
//! - albumartist -> TPE2

use std::path::{Path, PathBuf};

use id3::frame::Content;
use id3::{ErrorKind, Tag, TagLike, Version};

use super::TagContainer;
use super::util::{join_values, non_empty, split_values};
use crate::core::error::TagError;
use crate::core::types::TagKey;

pub(crate) struct Id3Container {
    path: PathBuf,
    tag: Tag,
}

impl Id3Container {
    /// Load the existing tag. An MP3 with no ID3 tag at all starts from an
    /// empty one; anything else that fails to decode is an error.
    pub(crate) fn open(path: &Path) -> Result<Self, TagError> {
        let tag = match Tag::read_from_path(path) {
            Ok(tag) => tag,
            Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
            Err(e) => {
                return Err(TagError::Read {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            tag,
        })
    }
}

fn frame_id(key: TagKey) -> &'static str {
    match key {
        TagKey::Artist => "TPE1",
        TagKey::Title => "TIT2",
        TagKey::Album => "TALB",
        TagKey::AlbumArtist => "TPE2",
    }
}

impl TagContainer for Id3Container {
    fn path(&self) -> &Path {
        &self.path
    }

    fn get(&self, key: TagKey) -> Option<Vec<String>> {
        let frame = self.tag.get(frame_id(key))?;
        match frame.content() {
            Content::Text(s) => non_empty(split_values(s)),
            _ => None,
        }
    }

    fn set(&mut self, key: TagKey, values: Vec<String>) {
        let id = frame_id(key);
        if values.is_empty() {
            self.tag.remove(id);
        } else {
            self.tag.set_text(id, join_values(&values));
        }
    }

    fn save(&mut self) -> Result<(), TagError> {
        self.tag
            .write_to_path(&self.path, Version::Id3v24)
            .map_err(|e| TagError::Save {
                reason: e.to_string(),
            })
    }
}
