//! retag
//!
//! # What this program is
//! A small terminal tool that walks one folder of `.mp3` / `.ogg` files and,
//! for each file:
//! - shows the current artist/title/album
//! - asks for new artist, title, album and featured artists
//! - writes the tags, then moves the file to `DONE/{artist} - {title}.{ext}`
//!
//! Typing `back` at any prompt returns to the previous field.
//!
//! # Layout
//! - `core` does the work (list files, read/write tags, rename/move) and never
//!   touches the terminal.
//! - `console` talks to the operator and turns core results into messages.
//!
//! # Output streams
//! - stdout: prompts and per-file messages (what the operator reads)
//! - stderr: `tracing` logs (quiet by default; `-v`, `-vv` or `RUST_LOG`)

mod console;
mod core;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console::Console;

/// Retag audio files interactively and file them under DONE/
#[derive(Parser, Debug)]
#[command(name = "retag", version, about)]
struct Args {
    /// Folder holding the .mp3/.ogg files (not searched recursively)
    #[arg(env = "RETAG_DIR", default_value = ".")]
    directory: PathBuf,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    info!(
        "Starting retag v{} in {}",
        env!("CARGO_PKG_VERSION"),
        args.directory.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console::session::process_directory(&mut console, &args.directory)?;
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
