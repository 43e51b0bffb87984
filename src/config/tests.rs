use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
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
fn defaults_match_the_fixed_allow_list_and_validate() {
    let s = Settings::default();
    assert_eq!(s.library.extensions, vec!["mp3", "wav", "flac", "ogg", "m4a"]);
    assert!(s.playback.autoplay_first);
    assert_eq!(s.playback.volume_percent, 70);
    assert_eq!(s.engine.backend, None);
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_volume_and_empty_extensions() {
    let mut s = Settings::default();
    s.playback.volume_percent = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions.clear();
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_quiro_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("QUIRO_CONFIG_PATH", "/tmp/quiro-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/quiro-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("quiro")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("quiro")
            .join("config.toml")
    );
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
extensions = ["flac"]

[playback]
autoplay_first = false
volume_percent = 35

[engine]
backend = "pulse"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("QUIRO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("QUIRO__PLAYBACK__VOLUME_PERCENT");

    let s = Settings::load().unwrap();
    assert_eq!(s.library.extensions, vec!["flac".to_string()]);
    assert!(!s.playback.autoplay_first);
    assert_eq!(s.playback.volume_percent, 35);
    assert_eq!(s.engine.backend.as_deref(), Some("pulse"));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume_percent = 35
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("QUIRO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("QUIRO__PLAYBACK__VOLUME_PERCENT", "90");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume_percent, 90);
}
