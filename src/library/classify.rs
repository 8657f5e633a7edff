/// Extensions treated as audio when no configuration overrides them.
///
/// `.acc` is kept as found even though `.aac` is the real AAC extension.
pub const DEFAULT_AUDIO_EXTENSIONS: [&str; 7] =
    [".flac", ".mp3", ".wav", ".m4a", ".ogg", ".acc", ".alac"];

/// The extension of a file name: everything from the last `.`, dot included.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}

/// Case-sensitive membership test against the allow-list.
pub fn is_audio_file(ext: &str, allowed: &[String]) -> bool {
    !ext.is_empty() && allowed.iter().any(|e| e == ext)
}
