use std::path::PathBuf;

use serde::Deserialize;

use loopstone_types::state::grid::{MAX_BARS, MAX_TEMPO, MIN_BARS, MIN_TEMPO};
use loopstone_types::state::music::Key;

use crate::combo::DEFAULT_COMBO_WINDOW_MS;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    input: InputConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    tempo: Option<u16>,
    key: Option<String>,
    bars: Option<usize>,
}

#[derive(Deserialize, Default)]
struct InputConfig {
    combo_window_ms: Option<f64>,
}

/// Musical defaults applied to a fresh editing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorDefaults {
    pub tempo: u16,
    pub key: Key,
    pub bars: usize,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self {
            tempo: 120,
            key: Key::C,
            bars: 4,
        }
    }
}

pub struct Config {
    defaults: DefaultsConfig,
    input: InputConfig,
}

impl Config {
    /// Load the embedded defaults, merged field-wise with the optional user
    /// config. A malformed or unreadable user file is ignored with a warning.
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => {
                            merge_defaults(&mut base.defaults, user.defaults);
                            merge_input(&mut base.input, user.input);
                        }
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
            input: base.input,
        }
    }

    pub fn defaults(&self) -> EditorDefaults {
        let fallback = EditorDefaults::default();
        EditorDefaults {
            tempo: self
                .defaults
                .tempo
                .unwrap_or(fallback.tempo)
                .clamp(MIN_TEMPO, MAX_TEMPO),
            key: self
                .defaults
                .key
                .as_deref()
                .and_then(parse_key)
                .unwrap_or(fallback.key),
            bars: self
                .defaults
                .bars
                .unwrap_or(fallback.bars)
                .clamp(MIN_BARS, MAX_BARS),
        }
    }

    pub fn combo_window_ms(&self) -> f64 {
        let ms = self
            .input
            .combo_window_ms
            .unwrap_or(DEFAULT_COMBO_WINDOW_MS);
        if ms > 0.0 {
            ms
        } else {
            DEFAULT_COMBO_WINDOW_MS
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("loopstone").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.tempo.is_some() {
        base.tempo = user.tempo;
    }
    if user.key.is_some() {
        base.key = user.key;
    }
    if user.bars.is_some() {
        base.bars = user.bars;
    }
}

fn merge_input(base: &mut InputConfig, user: InputConfig) {
    if user.combo_window_ms.is_some() {
        base.combo_window_ms = user.combo_window_ms;
    }
}

fn parse_key(s: &str) -> Option<Key> {
    Key::ALL.iter().copied().find(|k| k.name() == s)
}
