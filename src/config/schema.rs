use serde::Deserialize;

use crate::library::DEFAULT_AUDIO_EXTENSIONS;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/retitle/config.toml` or `~/.config/retitle/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RETITLE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub naming: NamingSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions treated as audio, leading dot included. Matched case-sensitively.
    pub extensions: Vec<String>,
    /// Sort directory entries by file name instead of keeping listing order.
    pub sort_entries: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_AUDIO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            sort_entries: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Placed between title and artist in the new file name.
    pub separator: String,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Color the progress lines.
    pub color: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { color: true }
    }
}
