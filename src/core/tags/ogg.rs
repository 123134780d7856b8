//! core/tags/ogg.rs
//! Vorbis comment backend for `.ogg` files (via `lofty`).

use std::path::{Path, PathBuf};

use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{ItemKey, ItemValue, Tag, TagItem};

use super::TagContainer;
use super::util::non_empty;
use crate::core::error::TagError;
use crate::core::types::TagKey;

pub(crate) struct VorbisContainer {
    path: PathBuf,
    file: TaggedFile,
}

impl VorbisContainer {
    pub(crate) fn open(path: &Path) -> Result<Self, TagError> {
        let read_err = |reason: String| TagError::Read {
            path: path.to_path_buf(),
            reason,
        };

        let file = Probe::open(path)
            .map_err(|e| read_err(e.to_string()))?
            .read()
            .map_err(|e| read_err(e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// The comment block we edit. Created on first write if the file has none.
    fn tag_for_write(&mut self) -> Option<&mut Tag> {
        let tag_type = self.file.primary_tag_type();
        if self.file.tag(tag_type).is_none() {
            self.file.insert_tag(Tag::new(tag_type));
        }
        self.file.tag_mut(tag_type)
    }
}

fn item_key(key: TagKey) -> ItemKey {
    match key {
        TagKey::Artist => ItemKey::TrackArtist,
        TagKey::Title => ItemKey::TrackTitle,
        TagKey::Album => ItemKey::AlbumTitle,
        TagKey::AlbumArtist => ItemKey::AlbumArtist,
    }
}

impl TagContainer for VorbisContainer {
    fn path(&self) -> &Path {
        &self.path
    }

    fn get(&self, key: TagKey) -> Option<Vec<String>> {
        let tag = self.file.primary_tag()?;
        non_empty(
            tag.get_strings(&item_key(key))
                .map(str::to_owned)
                .collect(),
        )
    }

    fn set(&mut self, key: TagKey, values: Vec<String>) {
        let item_key = item_key(key);
        let Some(tag) = self.tag_for_write() else {
            return;
        };

        tag.retain(|item| item.key() != &item_key);
        for value in values {
            tag.push(TagItem::new(item_key.clone(), ItemValue::Text(value)));
        }
    }

    fn save(&mut self) -> Result<(), TagError> {
        self.file
            .save_to_path(&self.path, WriteOptions::default())
            .map_err(|e| TagError::Save {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tags::testing::{SAMPLE_OGG, write_sample};

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_comment_block_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "track.ogg", SAMPLE_OGG);

        let tags = VorbisContainer::open(&path).unwrap();
        for key in [TagKey::Artist, TagKey::Title, TagKey::Album, TagKey::AlbumArtist] {
            assert_eq!(tags.get(key), None, "{key}");
        }
    }

    #[test]
    fn all_keys_survive_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "track.ogg", SAMPLE_OGG);

        let mut tags = VorbisContainer::open(&path).unwrap();
        tags.set(TagKey::Artist, values(&["Jane ft. Bob ft. Amy"]));
        tags.set(TagKey::Title, values(&["Jane - Song"]));
        tags.set(TagKey::Album, values(&["Demos"]));
        tags.set(TagKey::AlbumArtist, values(&["Jane"]));
        tags.save().unwrap();

        let reopened = VorbisContainer::open(&path).unwrap();
        assert_eq!(reopened.get(TagKey::Artist), Some(values(&["Jane ft. Bob ft. Amy"])));
        assert_eq!(reopened.get(TagKey::Title), Some(values(&["Jane - Song"])));
        assert_eq!(reopened.get(TagKey::Album), Some(values(&["Demos"])));
        assert_eq!(reopened.get(TagKey::AlbumArtist), Some(values(&["Jane"])));
    }

    #[test]
    fn set_replaces_existing_values_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample(dir.path(), "track.ogg", SAMPLE_OGG);

        let mut tags = VorbisContainer::open(&path).unwrap();
        tags.set(TagKey::Artist, values(&["Jane", "Bob"]));
        tags.set(TagKey::Album, values(&["Demos"]));
        tags.save().unwrap();

        let mut tags = VorbisContainer::open(&path).unwrap();
        assert_eq!(tags.get(TagKey::Artist), Some(values(&["Jane", "Bob"])));
        tags.set(TagKey::Artist, values(&["Amy"]));
        tags.save().unwrap();

        let reopened = VorbisContainer::open(&path).unwrap();
        assert_eq!(reopened.get(TagKey::Artist), Some(values(&["Amy"])));
        assert_eq!(reopened.get(TagKey::Album), Some(values(&["Demos"])));
    }
}
