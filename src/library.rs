//! Library module: finds the audio files in a directory and reads their tags.

mod classify;
mod scan;
mod tags;

pub use classify::DEFAULT_AUDIO_EXTENSIONS;
pub use scan::{Candidate, scan};
pub use tags::{LoftyTagReader, TagReader, TrackTags};

#[cfg(test)]
pub(crate) use classify::extension_of;
#[cfg(test)]
pub(crate) use tags::MapTagReader;
