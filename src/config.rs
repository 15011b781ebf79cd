//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/hometree/hometree.toml`
//! 3. Explicit config file given on the command line (`--config`)
//! 4. Environment variables: `HOMETREE_*` prefix (`__` separates sections)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::INDENT_MARKER;
use crate::facade::{GameOptions, MovieOptions, MusicOptions};

/// How trees are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// `+ Directory:` / `- File:` lines, indented per level
    #[default]
    Plain,
    /// Box-drawing tree
    Tree,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Plain => write!(f, "plain"),
            RenderStyle::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for RenderStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(RenderStyle::Plain),
            "tree" => Ok(RenderStyle::Tree),
            other => Err(ApplicationError::Config {
                message: format!("unknown render style '{other}' (expected plain or tree)"),
            }),
        }
    }
}

/// Unified configuration for hometree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Indent added per tree level in plain style
    pub indent: String,
    /// Default render style
    pub style: RenderStyle,
    /// Defaults for `theater watch`
    pub movie: MovieOptions,
    /// Defaults for `theater game`
    pub game: GameOptions,
    /// Defaults for `theater music`
    pub music: MusicOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: INDENT_MARKER.to_string(),
            style: RenderStyle::default(),
            movie: MovieOptions::default(),
            game: GameOptions::default(),
            music: MusicOptions::default(),
        }
    }
}

/// Raw settings for intermediate parsing: `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub indent: Option<String>,
    pub style: Option<RenderStyle>,
    pub movie: RawMovieOptions,
    pub game: RawVolumeOptions,
    pub music: RawVolumeOptions,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawMovieOptions {
    pub channel: Option<String>,
    pub volume: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawVolumeOptions {
    pub volume: Option<i32>,
}

/// Get the XDG config directory for hometree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hometree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("hometree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent: overlay
                .indent
                .clone()
                .unwrap_or_else(|| self.indent.clone()),
            style: overlay.style.unwrap_or(self.style),
            movie: MovieOptions {
                channel: overlay
                    .movie
                    .channel
                    .clone()
                    .unwrap_or_else(|| self.movie.channel.clone()),
                volume: overlay.movie.volume.unwrap_or(self.movie.volume),
            },
            game: GameOptions {
                volume: overlay.game.volume.unwrap_or(self.game.volume),
            },
            music: MusicOptions {
                volume: overlay.music.volume.unwrap_or(self.music.volume),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply HOMETREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("HOMETREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("indent") {
            settings.indent = val;
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse()?;
        }
        if let Ok(val) = config.get_string("movie.channel") {
            settings.movie.channel = val;
        }
        if let Ok(val) = config.get::<i32>("movie.volume") {
            settings.movie.volume = val;
        }
        if let Ok(val) = config.get::<i32>("game.volume") {
            settings.game.volume = val;
        }
        if let Ok(val) = config.get::<i32>("music.volume") {
            settings.music.volume = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# hometree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/hometree/hometree.toml
#   File:   hometree --config <FILE>
#   Env:    HOMETREE_* environment variables, e.g. HOMETREE_MOVIE__VOLUME=50

# Indent added per tree level in plain style
# indent = "   "

# Render style for trees: "plain" or "tree"
# style = "plain"

[movie]
# channel = "1"
# volume = 40

[game]
# volume = 30

[music]
# volume = 25
"#
        .to_string()
    }

    /// Write the template to `path`, refusing to overwrite an existing file.
    pub fn write_template(path: &Path) -> ApplicationResult<()> {
        if path.exists() {
            return Err(ApplicationError::Config {
                message: format!("config file already exists: {}", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApplicationError::io(format!("create {}", parent.display()), e))?;
        }
        std::fs::write(path, Self::template())
            .map_err(|e| ApplicationError::io(format!("write {}", path.display()), e))
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_match_facade_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.indent, "   ");
        assert_eq!(settings.style, RenderStyle::Plain);
        assert_eq!(settings.movie.channel, "1");
        assert_eq!(settings.movie.volume, 40);
        assert_eq!(settings.game.volume, 30);
        assert_eq!(settings.music.volume, 25);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_only_specified_fields_change() {
        let overlay = RawSettings {
            style: Some(RenderStyle::Tree),
            movie: RawMovieOptions {
                channel: None,
                volume: Some(55),
            },
            ..Default::default()
        };

        let merged = Settings::default().merge_with(&overlay);

        assert_eq!(merged.style, RenderStyle::Tree);
        assert_eq!(merged.movie.volume, 55);
        assert_eq!(merged.movie.channel, "1");
        assert_eq!(merged.game.volume, 30);
        assert_eq!(merged.indent, "   ");
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.indent.is_none());
        assert!(raw.movie.volume.is_none());
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips_through_raw() {
        let settings = Settings {
            indent: "..".into(),
            ..Default::default()
        };
        let text = settings.to_toml().expect("serialize");
        let raw: RawSettings = toml::from_str(&text).expect("parse");
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }

    #[test]
    fn given_style_names_when_parsing_then_case_insensitive() {
        assert_eq!("Tree".parse::<RenderStyle>().unwrap(), RenderStyle::Tree);
        assert_eq!(" plain ".parse::<RenderStyle>().unwrap(), RenderStyle::Plain);
        assert!("fancy".parse::<RenderStyle>().is_err());
    }
}
