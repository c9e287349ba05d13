//! Layout configuration
//!
//! Stores sizing constants in `~/.config/sidebar-layout/config.yaml`.
//! Every field is optional in the file; missing fields take their defaults.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Sizing constants for the two-pane layout (logical pixels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Initial sidebar width, restored when unfolding
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
    /// Smallest sidebar width; the folded width
    #[serde(default = "default_sidebar_min_width")]
    pub sidebar_min_width: f32,
    /// Max sidebar width as a multiple of `sidebar_width`
    #[serde(default = "default_sidebar_max_ratio")]
    pub sidebar_max_ratio: f32,
    /// Total width shared by sidebar and main content
    #[serde(default = "default_max_content_width")]
    pub max_content_width: f32,
    /// Width of the drag handle strip right of the sidebar
    #[serde(default = "default_handle_width")]
    pub handle_width: f32,
    /// Pixels scrolled per mouse wheel line
    #[serde(default = "default_scroll_line_height")]
    pub scroll_line_height: f32,
    /// Height of the demo page rendered in the main region
    #[serde(default = "default_content_height")]
    pub content_height: f32,
}

fn default_sidebar_width() -> f32 {
    300.0
}

fn default_sidebar_min_width() -> f32 {
    15.0
}

fn default_sidebar_max_ratio() -> f32 {
    1.5
}

fn default_max_content_width() -> f32 {
    3800.0
}

fn default_handle_width() -> f32 {
    6.0
}

fn default_scroll_line_height() -> f32 {
    40.0
}

fn default_content_height() -> f32 {
    4000.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            sidebar_min_width: default_sidebar_min_width(),
            sidebar_max_ratio: default_sidebar_max_ratio(),
            max_content_width: default_max_content_width(),
            handle_width: default_handle_width(),
            scroll_line_height: default_scroll_line_height(),
            content_height: default_content_height(),
        }
    }
}

impl LayoutConfig {
    /// Derived upper bound for the sidebar width
    pub fn sidebar_max_width(&self) -> f32 {
        self.sidebar_width * self.sidebar_max_ratio
    }

    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Read and validate a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Parse and validate YAML config text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check that the sizing constants describe a usable layout
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("sidebar_width", self.sidebar_width),
            ("sidebar_min_width", self.sidebar_min_width),
            ("sidebar_max_ratio", self.sidebar_max_ratio),
            ("max_content_width", self.max_content_width),
            ("handle_width", self.handle_width),
            ("scroll_line_height", self.scroll_line_height),
            ("content_height", self.content_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number, got {}", name, value);
            }
        }

        if self.sidebar_width <= 0.0 {
            bail!("sidebar_width must be positive");
        }
        if self.sidebar_min_width > self.sidebar_width {
            bail!(
                "sidebar_min_width ({}) exceeds sidebar_width ({})",
                self.sidebar_min_width,
                self.sidebar_width
            );
        }
        if self.sidebar_max_ratio < 1.0 {
            bail!(
                "sidebar_max_ratio must be at least 1.0, got {}",
                self.sidebar_max_ratio
            );
        }
        Ok(())
    }
}
