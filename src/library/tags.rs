use std::fs::File;
use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};
use tracing::debug;

use crate::error::{Error, Result};

/// Title and artist as stored in a file's tag, unformatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    pub artist: String,
}

/// Source of embedded metadata.
pub trait TagReader {
    fn read(&self, path: &Path) -> Result<TrackTags>;
}

/// Reads tags with `lofty`. The format is detected from the file contents.
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read(&self, path: &Path) -> Result<TrackTags> {
        let mut file = File::open(path).map_err(|source| Error::OpenAudio {
            path: path.to_path_buf(),
            source,
        })?;
        let tagged = lofty::read_from(&mut file).map_err(|source| Error::ReadTags {
            path: path.to_path_buf(),
            source,
        })?;

        // A parsable file without any tag reads as empty metadata.
        let tags = match tagged.primary_tag().or_else(|| tagged.first_tag()) {
            Some(tag) => TrackTags {
                title: tag.title().map(|v| v.into_owned()).unwrap_or_default(),
                artist: tag.artist().map(|v| v.into_owned()).unwrap_or_default(),
            },
            None => TrackTags::default(),
        };

        debug!(path = %path.display(), title = %tags.title, artist = %tags.artist, "read tags");
        Ok(tags)
    }
}

/// In-memory reader keyed by file name, for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MapTagReader {
    tags: std::collections::HashMap<String, TrackTags>,
}

#[cfg(test)]
impl MapTagReader {
    pub(crate) fn with(mut self, name: &str, title: &str, artist: &str) -> Self {
        self.tags.insert(
            name.to_string(),
            TrackTags {
                title: title.to_string(),
                artist: artist.to_string(),
            },
        );
        self
    }
}

#[cfg(test)]
impl TagReader for MapTagReader {
    fn read(&self, path: &Path) -> Result<TrackTags> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        self.tags.get(name).cloned().ok_or_else(|| Error::OpenAudio {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "no tags registered"),
        })
    }
}
