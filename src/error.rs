//! Error type shared by every stage of a run.
//!
//! Nothing below `main` exits the process: fatal conditions come back as
//! `Err` and `main` decides the exit status.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to ascertain working directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read directory {}: not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to open audio file {}: {source}", path.display())]
    OpenAudio {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read tags from {}: {source}", path.display())]
    ReadTags {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read answer: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to read answer: standard input closed")]
    PromptEof,

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
