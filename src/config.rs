//! Display-preference configuration
//!
//! The host hands the grid its stored preferences as a YAML document.
//! Parsing is tolerant: anything missing or malformed falls back to
//! defaults. Persisting the file belongs to the host, not to this crate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::FormatContext;
use crate::theme::ThemeMode;

/// Grid display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Color mode ("light" or "dark")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Font family for header and body cells
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Apply fixed-point beautification to float columns
    #[serde(default)]
    pub beautify: bool,
    /// Fraction digits for beautified floats
    #[serde(default)]
    pub precision: Option<u32>,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_font_family() -> String {
    "Consolas".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_family: default_font_family(),
            beautify: false,
            precision: None,
        }
    }
}

impl GridConfig {
    /// Parse preferences from a YAML document, falling back to defaults
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse grid config: {}", e);
                Self::default()
            }
        }
    }

    /// Load preferences from disk, or return defaults if not found
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_name(&self.theme)
    }

    /// Derive the per-render-pass format context
    pub fn format_context(&self, transpose: bool) -> FormatContext {
        FormatContext {
            beautify: self.beautify,
            precision: self.precision,
            transpose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.theme_mode(), ThemeMode::Light);
        assert_eq!(config.font_family, "Consolas");
        assert!(!config.beautify);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = GridConfig::from_yaml("theme: dark\n");
        assert_eq!(config.theme_mode(), ThemeMode::Dark);
        assert_eq!(config.font_family, "Consolas");
    }

    #[test]
    fn test_malformed_yaml_falls_back() {
        let config = GridConfig::from_yaml(": not yaml :::");
        assert_eq!(config.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unknown_theme_name_is_light() {
        let config = GridConfig::from_yaml("theme: solarized\n");
        assert_eq!(config.theme_mode(), ThemeMode::Light);
    }
}
