use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// The directory to work in: the normalized argument, or the current directory.
pub fn resolve_dir(arg: Option<&Path>) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(normalize(path)),
        None => env::current_dir().map_err(Error::WorkingDir),
    }
}

/// Lexical cleanup: drop repeated separators, `.` components and trailing
/// slashes, and fold `..` into a preceding named component. `..` directly
/// under the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    let joined: PathBuf = parts.iter().collect();
    if joined.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        joined
    }
}
