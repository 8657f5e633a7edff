use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_retitle_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("RETITLE_CONFIG_PATH", "/tmp/retitle-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/retitle-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("retitle")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("retitle")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_stock_behavior() {
    let s = Settings::default();
    assert_eq!(
        s.library.extensions,
        vec![".flac", ".mp3", ".wav", ".m4a", ".ogg", ".acc", ".alac"]
    );
    assert!(!s.library.sort_entries);
    assert_eq!(s.naming.separator, " - ");
    assert!(s.ui.color);
    assert!(s.validate().is_ok());
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");

    let _g1 = EnvGuard::set("RETITLE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("RETITLE__LIBRARY__SORT_ENTRIES");

    let s = Settings::load().unwrap();
    assert!(!s.library.sort_entries);
    assert_eq!(s.library.extensions.len(), 7);
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
extensions = [".mp3", ".aac"]
sort_entries = true

[naming]
separator = " _ "

[ui]
color = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RETITLE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("RETITLE__LIBRARY__SORT_ENTRIES");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extensions, vec![".mp3".to_string(), ".aac".to_string()]);
    assert!(s.library.sort_entries);
    assert_eq!(s.naming.separator, " _ ");
    assert!(!s.ui.color);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
sort_entries = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RETITLE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("RETITLE__LIBRARY__SORT_ENTRIES", "true");

    let s = Settings::load().unwrap();
    assert!(s.library.sort_entries);
}

#[test]
fn validate_rejects_bad_extensions_and_separator() {
    let mut s = Settings::default();
    s.library.extensions = vec!["mp3".to_string()];
    assert!(s.validate().is_err());

    s.library.extensions.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.naming.separator.clear();
    assert!(s.validate().is_err());
}
