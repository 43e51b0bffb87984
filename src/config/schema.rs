use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/quiro/config.toml` or
/// `~/.config/quiro/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `QUIRO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "wav".into(),
                "flac".into(),
                "ogg".into(),
                "m4a".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Start playback automatically when the first tracks arrive in an
    /// empty playlist.
    pub autoplay_first: bool,
    /// Initial output volume (0-100).
    pub volume_percent: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay_first: true,
            volume_percent: 70,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Backend hint handed to the media-engine constructor by the
    /// embedding application. Resolved once at startup; never read from
    /// process-global environment by the core.
    pub backend: Option<String>,
}
