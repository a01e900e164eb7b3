//! Configuration loading for the sticker board annotation.
//!
//! ```toml
//! [annotation]
//! marker = "      "
//! line_break = "\n"
//! short_form_after = 2
//! show_reference = true
//!
//! [annotation.styles.favorable]
//! open = "<green>"
//! close = "</green>"
//! ```
//!
//! Every field is optional. A missing file or section resolves to
//! [`AnnotationSettings::default`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tails_types::settings::{DEFAULT_LINE_BREAK, DEFAULT_MARKER, DEFAULT_SHORT_FORM_AFTER};
use tails_types::{AnnotationSettings, Category, SegmentStyle, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: SettingsError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TailsConfig {
    pub annotation: Option<AnnotationConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnotationConfig {
    pub marker: Option<String>,
    pub line_break: Option<String>,
    pub short_form_after: Option<usize>,
    pub show_reference: Option<bool>,
    #[serde(default)]
    pub styles: HashMap<Category, StyleConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
}

impl TailsConfig {
    /// Load from the default location.
    ///
    /// Returns `None` when there is no config file, or when it cannot be used
    /// (the failure is logged and the caller falls back to defaults).
    #[must_use]
    pub fn load() -> Option<AnnotationSettings> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "{err}");
                None
            }
        }
    }

    /// Read, parse and resolve the file at `path`.
    pub fn load_from(path: &Path) -> Result<AnnotationSettings, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TailsConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.resolve().map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve optional fields into validated settings.
    pub fn resolve(self) -> Result<AnnotationSettings, SettingsError> {
        let annotation = self.annotation.unwrap_or_default();
        let styles = annotation
            .styles
            .into_iter()
            .map(|(category, style)| (category, SegmentStyle::new(style.open, style.close)))
            .collect();
        AnnotationSettings::new(
            annotation.marker.unwrap_or_else(|| DEFAULT_MARKER.to_string()),
            annotation
                .line_break
                .unwrap_or_else(|| DEFAULT_LINE_BREAK.to_string()),
            annotation
                .short_form_after
                .unwrap_or(DEFAULT_SHORT_FORM_AFTER),
            annotation.show_reference.unwrap_or(true),
            styles,
        )
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tails").join("config.toml"))
}

/// Settings from the default config file, or the defaults.
#[must_use]
pub fn load_settings() -> AnnotationSettings {
    TailsConfig::load().unwrap_or_default()
}
