//! Plugin configuration, read from an optional `canvasbind.toml`.
//!
//! A missing or unreadable file is not fatal: the plugin falls back to the
//! defaults and logs why.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Where the host docks the plugin window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiPosition {
    #[serde(rename = "top left")]
    TopLeft,
    #[default]
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom right")]
    BottomRight,
    #[serde(rename = "center")]
    Center,
}

/// Placement and size of the plugin's UI container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    #[serde(default)]
    pub position: UiPosition,
    #[serde(default = "default_ui_dimension")]
    pub min_height: u32,
    #[serde(default = "default_ui_dimension")]
    pub width: u32,
}

fn default_ui_dimension() -> u32 {
    240
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            position: UiPosition::TopRight,
            min_height: default_ui_dimension(),
            width: default_ui_dimension(),
        }
    }
}

/// Apply handler to run when the caller does not name one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultMode {
    /// Match nodes by name and frames by background color style name.
    #[default]
    Name,
    /// Write to every selected node by capability alone.
    Kind,
    /// Recolor frames using one color style.
    ColorStyle,
}

/// Top-level plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub ui: UiOptions,
    /// Color style names offered as one-click "set color" actions.
    #[serde(default = "default_color_styles")]
    pub color_styles: Vec<String>,
    #[serde(default)]
    pub mode: DefaultMode,
}

fn default_color_styles() -> Vec<String> {
    vec!["Primary Color".to_string(), "Secondary Color".to_string()]
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            color_styles: default_color_styles(),
            mode: DefaultMode::default(),
        }
    }
}

impl PluginConfig {
    /// Loads configuration from `path`, falling back to defaults with a
    /// warning if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!("Loaded plugin config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// True if `name` is one of the configured color style actions.
    pub fn is_color_style(&self, name: &str) -> bool {
        self.color_styles.iter().any(|s| s == name)
    }
}
