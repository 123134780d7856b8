//! console/editor.rs
//!
//! Collect the four new metadata fields, with "back" to fix a mistake.
//!
//! State machine:
//! - `index` points at the field being asked (0..=3), `values` holds the raw answers
//! - typing `back` (any case) moves one field up; at the first field it just re-asks
//! - any other answer is stored and we move on
//! - done when `index == 4`
//!
//! There is no cancel: the only way out is to answer all four (or close stdin).

use std::io;

use tracing::debug;

use super::Operator;
use crate::core::types::{Field, NewMetadata};

const BACK: &str = "back";

/// Names for the fields `back` can land on (never the last one).
const BACK_TARGETS: [&str; 3] = ["Artist", "Title", "Album"];

/// Ask for artist, title, album and featured artists, in that order.
pub fn prompt_for_new_metadata(console: &mut impl Operator) -> io::Result<NewMetadata> {
    let mut values: [String; 4] = Default::default();
    let mut index = 0;

    while index < Field::ALL.len() {
        let field = Field::ALL[index];
        let input = console.ask(field.prompt())?;
        let input = input.trim();

        if input.eq_ignore_ascii_case(BACK) {
            if index > 0 {
                index -= 1;
                debug!(field = ?Field::ALL[index], "going back");
                console.say(&format!(
                    "Returning to previous field: {}",
                    BACK_TARGETS[index]
                ))?;
            } else {
                console.say("Already at the first field; cannot go back further.")?;
            }
            continue;
        }

        values[index] = input.to_string();
        index += 1;
    }

    let [artist, title, album, featured] = values;
    Ok(NewMetadata {
        artist,
        title,
        album,
        featured_artists: parse_featured_artists(&featured),
    })
}

/// "Bob, Amy" -> ["Bob", "Amy"]; blanks and stray commas are dropped.
pub fn parse_featured_artists(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
