//! core/error.rs
//!
//! Typed errors for the core pipeline.
//! None of these abort a batch on their own: the console layer reports
//! them per file. Only [`ScanError`] is fatal (no directory, no batch).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Opening or saving a tag container failed.
#[derive(Error, Debug)]
pub enum TagError {
    /// Not an audio container we know how to tag.
    #[error("unsupported file type {path:?}: {reason}")]
    Unsupported { path: PathBuf, reason: String },

    /// Recognized container, but the tag itself could not be decoded.
    #[error("failed to read tags from {path:?}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// Encoding or writing the tag failed. The caller already knows the path.
    #[error("{reason}")]
    Save { reason: String },
}

/// Creating `DONE/` or moving the file into it failed.
#[derive(Error, Debug)]
pub enum MoveError {
    #[error("cannot create {dir:?}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot move to {to:?}: {source}")]
    Rename {
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The input directory could not be listed.
#[derive(Error, Debug)]
#[error("cannot read directory {dir:?}: {source}")]
pub struct ScanError {
    pub dir: PathBuf,
    #[source]
    pub source: io::Error,
}
