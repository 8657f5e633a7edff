use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::classify::{extension_of, is_audio_file};

/// A directory entry that passed classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Extension as found on disk, dot included.
    pub extension: String,
}

/// List the audio files directly inside `dir`.
///
/// Only the top level is read. Entries keep the order the file system returns
/// them in unless `settings.sort_entries` is set.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Candidate>> {
    // A missing path is left to the walker, which reports it as unreadable.
    if fs::metadata(dir).is_ok_and(|m| !m.is_dir()) {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if settings.sort_entries {
        walker = walker.sort_by_file_name();
    }

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // Symlinks count when they point at a regular file.
        if !entry.path().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping entry with non UTF-8 name");
            continue;
        };

        let ext = extension_of(name);
        let audio = is_audio_file(ext, &settings.extensions);
        debug!(name, audio, "classified entry");
        if audio {
            candidates.push(Candidate {
                name: name.to_string(),
                extension: ext.to_string(),
            });
        }
    }

    Ok(candidates)
}
