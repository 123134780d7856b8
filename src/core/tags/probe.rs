//! core/tags/probe.rs
//! Container sanity check (Symphonia) before we touch any tags.
//!
//! The tag crates will happily "open" any file with the right name
//! (`id3` just reports "no tag" for random bytes). Requiring a playable
//! track first is what turns "not actually audio" into a skip.

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Ok if `path` demuxes as MP3/Ogg with at least one audio track.
pub(crate) fn ensure_audio(path: &Path) -> Result<(), String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, stream, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| format!("not a recognized audio stream: {e}"))?;

    match probed.format.default_track() {
        Some(_) => Ok(()),
        None => Err("container has no audio track".to_string()),
    }
}
