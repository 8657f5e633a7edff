use crate::naming::target_name;

/// A file selected for renaming.
///
/// Only built when both `title` and `artist` are non-empty after formatting
/// and the new name differs from `original_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub title: String,
    pub artist: String,
    pub original_name: String,
    /// Lowercased, dot included.
    pub extension: String,
}

impl AudioFile {
    pub fn new_name(&self, separator: &str) -> String {
        target_name(&self.title, &self.artist, &self.extension, separator)
    }
}
