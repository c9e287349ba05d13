//! Command-line argument parsing for the demo host
//!
//! Supports:
//! - Loading layout constants from a YAML file
//! - Overriding the initial sidebar width and total content width
//! - Supplying the outline routes and the initial location

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::LayoutConfig;
use crate::model::OutlineEntry;

const DEFAULT_ROUTES: [&str; 5] = [
    "/overview",
    "/authentication",
    "/endpoints",
    "/models",
    "/changelog",
];

/// Two-pane layout with a resizable sidebar
#[derive(Parser, Debug)]
#[command(name = "sidebar-layout", version, about = "Two-pane layout with a resizable sidebar")]
pub struct CliArgs {
    /// Layout config file (defaults to ~/.config/sidebar-layout/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial sidebar width in logical pixels
    #[arg(long, value_name = "PX")]
    pub sidebar_width: Option<f32>,

    /// Total width shared by sidebar and main content
    #[arg(long, value_name = "PX")]
    pub max_content_width: Option<f32>,

    /// Outline route shown in the sidebar (repeatable)
    #[arg(long = "route", value_name = "PATH")]
    pub routes: Vec<String>,

    /// Initial location (defaults to the first route)
    #[arg(long, value_name = "PATH")]
    pub location: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub layout: LayoutConfig,
    pub outline: Vec<OutlineEntry>,
    pub location: String,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig> {
        let mut layout = match &self.config {
            Some(path) => LayoutConfig::load_from(path)?,
            None => LayoutConfig::load(),
        };
        self.apply_overrides(&mut layout)?;
        self.finish(layout)
    }

    /// Like `into_config`, but starting from a given base config instead of disk
    pub fn into_config_with(self, base: LayoutConfig) -> Result<StartupConfig> {
        let mut layout = base;
        self.apply_overrides(&mut layout)?;
        self.finish(layout)
    }

    fn apply_overrides(&self, layout: &mut LayoutConfig) -> Result<()> {
        if let Some(width) = self.sidebar_width {
            layout.sidebar_width = width;
        }
        if let Some(width) = self.max_content_width {
            layout.max_content_width = width;
        }
        layout.validate()
    }

    fn finish(self, layout: LayoutConfig) -> Result<StartupConfig> {
        let outline = if self.routes.is_empty() {
            OutlineEntry::from_routes(DEFAULT_ROUTES)
        } else {
            OutlineEntry::from_routes(&self.routes)
        };

        let location = self
            .location
            .or_else(|| outline.first().map(|entry| entry.route.clone()))
            .unwrap_or_else(|| "/".to_string());

        Ok(StartupConfig {
            layout,
            outline,
            location,
        })
    }
}
