use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tint_core::{Color, ScaleBounds};

use crate::error::{ColorLookupError, ConfigError};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Pinch-zoom limits
    #[serde(default)]
    pub scale: ScaleConfig,

    /// Named colors, e.g. `brand: "#3366CC"`
    #[serde(default)]
    pub colors: HashMap<String, String>,

    /// Navigation bar styling published at startup
    #[serde(default)]
    pub navigation_bar: NavigationBarConfig,
}

/// Scale limits for pinch-to-zoom
#[derive(Debug, Deserialize, Clone)]
pub struct ScaleConfig {
    #[serde(default = "default_min_scale")]
    pub min: f64,

    #[serde(default = "default_max_scale")]
    pub max: f64,
}

fn default_min_scale() -> f64 {
    1.0
}

fn default_max_scale() -> f64 {
    4.0
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min: default_min_scale(),
            max: default_max_scale(),
        }
    }
}

/// Navigation bar colors. Values are color names or hex strings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NavigationBarConfig {
    #[serde(default)]
    pub background: Option<String>,

    /// Title text color (derived from the background when unset)
    #[serde(default)]
    pub title: Option<String>,
}

impl AppConfig {
    /// Parse configuration from YAML, failing on any error
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.scale_bounds()?;
        for name in config.colors.keys() {
            config.resolve_color(name)?;
        }
        config.navigation_bar_colors()?;
        Ok(config)
    }

    /// Read and parse a configuration file, failing on any error
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    colors = config.colors.len(),
                    min_scale = config.scale.min,
                    max_scale = config.scale.max,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Validated scale bounds
    pub fn scale_bounds(&self) -> Result<ScaleBounds, ConfigError> {
        Ok(ScaleBounds::new(self.scale.min, self.scale.max)?)
    }

    /// Resolve a color name from the `colors` table, or parse a hex value
    pub fn resolve_color(&self, input: &str) -> Result<Color, ColorLookupError> {
        let key = input.trim();

        if let Some(value) = self.colors.get(key) {
            return value
                .parse()
                .map_err(|source| ColorLookupError::InvalidNamed {
                    name: key.to_string(),
                    value: value.clone(),
                    source,
                });
        }

        key.parse().map_err(|source| ColorLookupError::Unresolved {
            input: input.to_string(),
            source,
        })
    }

    /// Resolve the configured navigation bar colors
    pub fn navigation_bar_colors(
        &self,
    ) -> Result<(Option<Color>, Option<Color>), ColorLookupError> {
        let background = self
            .navigation_bar
            .background
            .as_deref()
            .map(|c| self.resolve_color(c))
            .transpose()?;
        let title = self
            .navigation_bar
            .title
            .as_deref()
            .map(|c| self.resolve_color(c))
            .transpose()?;
        Ok((background, title))
    }
}
