//! console/display.rs
//! Print a file's current artist/title/album before asking for new ones.

use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::core::tags::{self, TagContainer};
use crate::core::types::TagKey;

/// Shown for keys the file doesn't have.
pub const NOT_FOUND: &str = "[Not Found]";

/// Keys shown to the operator, in order, with their labels.
const SHOWN: [(TagKey, &str); 3] = [
    (TagKey::Artist, "Artist"),
    (TagKey::Title, "Title"),
    (TagKey::Album, "Album"),
];

/// Open `path` and print its current metadata.
///
/// Returns `Ok(None)` when the file can't be opened as tagged audio; the
/// caller should skip it. The `Err` case is only for console I/O.
pub fn show_current_metadata(
    console: &mut impl super::Operator,
    path: &Path,
) -> io::Result<Option<Box<dyn TagContainer>>> {
    let tags = match tags::open(path) {
        Ok(tags) => tags,
        Err(e) => {
            debug!(path = ?path, error = %e, "skipping unreadable file");
            console.say(&format!(
                "Unsupported file type or unable to read metadata: {}",
                path.display()
            ))?;
            return Ok(None);
        }
    };

    print_metadata(console, tags.as_ref())?;
    Ok(Some(tags))
}

/// The printing half of [`show_current_metadata`].
pub(crate) fn print_metadata(
    console: &mut impl super::Operator,
    tags: &dyn TagContainer,
) -> io::Result<()> {
    console.say(&format!("Current metadata for: {}", tags.path().display()))?;
    for (key, label) in SHOWN {
        let value = tags
            .get(key)
            .map(|values| values.join("; "))
            .unwrap_or_else(|| NOT_FOUND.to_string());
        trace!(%key, %value, "current value");
        console.say(&format!("    {label}: {value}"))?;
    }
    Ok(())
}
