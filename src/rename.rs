//! Rename planning and execution.
//!
//! The planner decides which files get a new name and previews each decision;
//! the executor applies the plan and can reverse it.

mod execute;
mod model;
mod plan;

pub use execute::{rename_all, undo_all};
pub use model::AudioFile;
pub use plan::plan;
