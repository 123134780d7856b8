//! core/mod.rs
//!
//! The non-interactive half of the app:
//! - Discover candidate audio file paths (one directory, no recursion)
//! - Open/read/write tags behind [`tags::TagContainer`]
//! - Apply new metadata and move finished files into `DONE/`
//!
//! Nothing in here prints or reads from the terminal; the console layer
//! turns the returned data and errors into messages.

pub mod error;
pub mod library;
pub mod tags;
pub mod types;
pub mod update;

pub use library::list_audio_files;
