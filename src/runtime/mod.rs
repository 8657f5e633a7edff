use std::env;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::library::{LoftyTagReader, TagReader, scan};
use crate::prompt::confirm;
use crate::rename::{plan, rename_all, undo_all};
use crate::ui::{Console, Painter};

mod resolve;
mod settings;

pub use resolve::resolve_dir;

/// Where a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No file needed renaming; nothing was asked.
    NothingToRename,
    /// The first confirmation was declined.
    Declined,
    /// Files were renamed and the undo was declined.
    Renamed,
    /// Files were renamed, then restored.
    Restored,
}

pub fn run() -> Result<RunOutcome> {
    let settings = settings::load_settings();

    let arg = env::args_os().nth(1);
    let dir = resolve_dir(arg.as_deref().map(Path::new))?;
    debug!(dir = %dir.display(), "resolved target directory");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut console = Console::stdout(settings.ui.color);

    run_in(&dir, &settings, &LoftyTagReader, &mut input, &mut console)
}

/// Scan `dir`, preview, and drive the two confirmations.
pub fn run_in<R, I, P>(
    dir: &Path,
    settings: &Settings,
    reader: &R,
    input: &mut I,
    out: &mut P,
) -> Result<RunOutcome>
where
    R: TagReader,
    I: BufRead,
    P: Painter,
{
    let candidates = scan(dir, &settings.library)?;
    let pending = plan(dir, &candidates, reader, &settings.naming, out)?;

    if pending.is_empty() {
        out.plain("Not enough files to rename\n")?;
        return Ok(RunOutcome::NothingToRename);
    }

    if !confirm("Do you want to continue? (y/N) ", input, out)? {
        return Ok(RunOutcome::Declined);
    }

    let separator = &settings.naming.separator;
    rename_all(dir, &pending, separator, out)?;

    if !confirm("Do you want to undo all previous changes? (y/N) ", input, out)? {
        return Ok(RunOutcome::Renamed);
    }

    undo_all(dir, &pending, separator, out)?;
    Ok(RunOutcome::Restored)
}
