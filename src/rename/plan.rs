use std::path::Path;

use tracing::info;

use crate::config::NamingSettings;
use crate::error::Result;
use crate::library::{Candidate, TagReader, TrackTags};
use crate::naming::format_tag;
use crate::ui::{Color, Painter};

use super::model::AudioFile;

/// What the planner does with one classified file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Title or artist is empty after formatting.
    MissingMetadata,
    /// The file already carries its target name.
    AlreadyNamed,
    Rename(AudioFile),
}

/// Decide the fate of `candidate` from its raw tags.
pub fn decide(candidate: &Candidate, tags: &TrackTags, separator: &str) -> Decision {
    let file = AudioFile {
        title: format_tag(&tags.title),
        artist: format_tag(&tags.artist),
        original_name: candidate.name.clone(),
        extension: candidate.extension.to_lowercase(),
    };

    if file.title.is_empty() || file.artist.is_empty() {
        return Decision::MissingMetadata;
    }
    if file.new_name(separator) == file.original_name {
        return Decision::AlreadyNamed;
    }
    Decision::Rename(file)
}

/// Read tags for every candidate in order, preview each decision and return
/// the files to rename.
///
/// The first tag read failure aborts planning.
pub fn plan<R: TagReader, P: Painter>(
    dir: &Path,
    candidates: &[Candidate],
    reader: &R,
    naming: &NamingSettings,
    out: &mut P,
) -> Result<Vec<AudioFile>> {
    let mut pending = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let tags = reader.read(&dir.join(&candidate.name))?;

        match decide(candidate, &tags, &naming.separator) {
            Decision::MissingMetadata => {
                skipped(out, &candidate.name, "does not have enough meta data")?;
            }
            Decision::AlreadyNamed => {
                skipped(out, &candidate.name, "has already a good name")?;
            }
            Decision::Rename(file) => {
                out.plain("[")?;
                out.paint("+", Color::Green)?;
                out.plain("] ")?;
                out.paint(&file.original_name, Color::Magenta)?;
                out.plain(" will be renamed to ")?;
                out.paint(&file.new_name(&naming.separator), Color::Green)?;
                out.plain("\n")?;
                pending.push(file);
            }
        }
    }

    info!(candidates = candidates.len(), pending = pending.len(), "planned renames");
    Ok(pending)
}

fn skipped<P: Painter>(out: &mut P, name: &str, reason: &str) -> Result<()> {
    out.plain("[")?;
    out.paint("-", Color::Red)?;
    out.plain("] ")?;
    out.paint(name, Color::Magenta)?;
    out.plain(" ")?;
    out.plain(reason)?;
    out.plain("\n")?;
    Ok(())
}
