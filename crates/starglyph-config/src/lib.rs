//! Configuration file support for starglyph.
//!
//! The config is a TOML file, by default at
//! `<platform config dir>/starglyph/config.toml`. Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use starglyph_core::{
    CoreError, DEFAULT_VELOCITY, Settings, VELOCITY_MAX, VELOCITY_MIN, parse_color,
};
use thiserror::Error;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the log file inside the cache directory.
pub const LOG_FILE_NAME: &str = "starglyph.log";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value could not be turned into [`Settings`].
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Type alias for Results from config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Size of the base particle population.
    pub particle_count: usize,
    /// Base velocity in logical pixels per frame.
    pub velocity: f32,
    /// Particle color, hex (`#fff`, `#ffd700`) or a color name.
    pub color: String,
    /// Text drawn by each particle.
    pub text: String,
    /// Target frames per second.
    pub fps: u32,
    /// Logical width of one terminal cell.
    pub cell_width: f32,
    /// Logical height of one terminal cell.
    pub cell_height: f32,
    /// Seed for a reproducible field. Random when unset.
    pub seed: Option<u64>,
    /// Show the key help bar.
    pub show_help: bool,
    /// Log file path. Defaults to the platform cache directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 200,
            velocity: DEFAULT_VELOCITY,
            color: "#ffffff".to_string(),
            text: "★".to_string(),
            fps: 60,
            cell_width: 8.0,
            cell_height: 16.0,
            seed: None,
            show_help: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, path: impl Into<PathBuf>) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })
    }

    /// Load a config from an explicit path. A missing file is an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load the config from `path` if given, otherwise from the default
    /// location. A missing default file yields [`Config::default`].
    ///
    /// Returns the config and the path it was read from, if any.
    pub fn load(path: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = path {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }
        match default_config_path() {
            Some(path) if path.exists() => Ok((Self::load_from_file(&path)?, Some(path))),
            _ => Ok((Self::default(), None)),
        }
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Build the initial control [`Settings`].
    pub fn settings(&self) -> Result<Settings> {
        let color = parse_color(&self.color)?;
        Ok(Settings::new(self.velocity, color, self.text.clone())?)
    }

    /// Log file to use: the configured one or the platform default.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_path)
    }

    /// Frame duration derived from `fps`, clamped to a sane range.
    pub fn frame_interval(&self) -> std::time::Duration {
        let fps = self.fps.clamp(1, 240);
        std::time::Duration::from_secs_f64(1.0 / fps as f64)
    }

    /// Check for values that load fine but behave badly.
    ///
    /// Returns one human readable warning per problem; empty when clean.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.particle_count == 0 {
            w.push("particle_count is 0; only click bursts will be visible".into());
        }
        if self.particle_count > 10_000 {
            w.push(format!(
                "particle_count {} is very large; frames may drop",
                self.particle_count
            ));
        }
        if !(1..=240).contains(&self.fps) {
            w.push(format!("fps {} out of range 1..=240, clamped", self.fps));
        }
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            w.push(format!(
                "cell size {}x{} must be > 0",
                self.cell_width, self.cell_height
            ));
        }
        if !(VELOCITY_MIN..=VELOCITY_MAX).contains(&self.velocity) {
            w.push(format!(
                "velocity {} out of range {VELOCITY_MIN}..={VELOCITY_MAX}, clamped",
                self.velocity
            ));
        }
        if self.text.is_empty() {
            w.push("text is empty; particles will be invisible".into());
        }
        w
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "starglyph", "starglyph")
}

/// Default config file location for this platform.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Default log file location for this platform.
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use starglyph_core::ColorPreset;
    use std::io::Write;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = Config::from_toml("", "empty.toml").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_overrides() {
        let text = r##"
            particle_count = 50
            velocity = 5.0
            color = "#fff"
            text = "A"
            seed = 7
        "##;
        let config = Config::from_toml(text, "partial.toml").unwrap();
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fps, 60);

        let settings = config.settings().unwrap();
        assert_eq!(settings.velocity, 5.0);
        assert_eq!(settings.color, ColorPreset::White.color());
        assert_eq!(settings.text, "A");
    }

    #[test]
    fn test_invalid_color_rejected() {
        let config = Config {
            color: "#nothex".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.settings(),
            Err(ConfigError::Core(CoreError::InvalidColor(_)))
        ));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Config::from_toml("particle_count = \"many\"", "bad.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse bad.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fps = 30\nshow_help = false").unwrap();

        let (config, used) = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.fps, 30);
        assert!(!config.show_help);
        assert_eq!(used.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let config = Config {
            particle_count: 12,
            seed: Some(99),
            log_file: Some(PathBuf::from("/tmp/starglyph.log")),
            ..Default::default()
        };
        let parsed = Config::from_toml(&config.to_toml(), "round.toml").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_detects_warnings() {
        let bad = Config {
            particle_count: 0,
            velocity: 50.0,
            fps: 0,
            cell_width: 0.0,
            text: String::new(),
            ..Default::default()
        };
        let warnings = bad.validate();
        assert_eq!(warnings.len(), 5, "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("fps")));
        assert!(warnings.iter().any(|w| w.contains("velocity")));
    }

    #[test]
    fn test_frame_interval_clamped() {
        let config = Config {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), std::time::Duration::from_secs(1));

        let config = Config {
            fps: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), std::time::Duration::from_millis(20));
    }
}
