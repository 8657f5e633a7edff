use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::ui::{Color, Painter};

use super::model::AudioFile;

/// Rename every pending file to its new name.
///
/// Files that vanished since planning are reported and skipped. A failed
/// rename aborts the rest of the batch; earlier renames stay in place.
/// Returns how many files were renamed.
pub fn rename_all<P: Painter>(
    dir: &Path,
    files: &[AudioFile],
    separator: &str,
    out: &mut P,
) -> Result<usize> {
    let moves = files
        .iter()
        .map(|f| (f.original_name.clone(), f.new_name(separator), f.original_name.as_str()));
    let renamed = move_batch(dir, moves, out)?;
    info!(renamed, total = files.len(), "rename pass done");
    Ok(renamed)
}

/// Reverse [`rename_all`], moving each new name back to its original name.
pub fn undo_all<P: Painter>(
    dir: &Path,
    files: &[AudioFile],
    separator: &str,
    out: &mut P,
) -> Result<usize> {
    let moves = files
        .iter()
        .map(|f| (f.new_name(separator), f.original_name.clone(), f.original_name.as_str()));
    let restored = move_batch(dir, moves, out)?;
    info!(restored, total = files.len(), "undo pass done");
    Ok(restored)
}

/// Each move is `(from, to, label)`; `label` names the file in the
/// "does not exist" notice, which is always the original name.
fn move_batch<'a, P: Painter>(
    dir: &Path,
    moves: impl Iterator<Item = (String, String, &'a str)>,
    out: &mut P,
) -> Result<usize> {
    let mut moved = 0;
    for (from_name, to_name, label) in moves {
        let from = dir.join(&from_name);
        if !file_exists(&from) {
            out.plain(label)?;
            out.plain(" does not exist\n")?;
            continue;
        }

        let to = dir.join(&to_name);
        fs::rename(&from, &to).map_err(|source| Error::Rename {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        debug!(from = %from.display(), to = %to.display(), "renamed");

        out.plain(&from_name)?;
        out.paint(" => ", Color::Yellow)?;
        out.plain(&to_name)?;
        out.plain("\n")?;
        moved += 1;
    }
    Ok(moved)
}

fn file_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}
