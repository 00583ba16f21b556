//! Config module - Output target and chart cosmetics, loaded from TOML

use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::visualization::style::parse_hex_color;

pub const DEFAULT_CONFIG_PATH: &str = "config/chart_config.toml";

/// Upper bound for font sizes, line width and marker size, in pixels.
pub const MAX_STYLE_SIZE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Svg,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub line_width: u32,
    pub marker_size: u32,
    pub grid_alpha: f64,
    pub latency_color: String,
    pub throughput_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("node_scaling.png"),
            format: OutputFormat::Png,
            width: 1400,
            height: 600,
            title_font_size: 16,
            label_font_size: 13,
            line_width: 2,
            marker_size: 5,
            grid_alpha: 0.7,
            latency_color: "#1f77b4".to_string(),
            throughput_color: "#ff7f0e".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::Config(format!(
                "figure size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, value, min) in [
            ("title_font_size", self.title_font_size, 1),
            ("label_font_size", self.label_font_size, 1),
            ("line_width", self.line_width, 1),
            ("marker_size", self.marker_size, 0),
        ] {
            if !(min..=MAX_STYLE_SIZE).contains(&value) {
                return Err(ChartError::Config(format!(
                    "{name} must be within [{min}, {MAX_STYLE_SIZE}], got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.grid_alpha) {
            return Err(ChartError::Config(format!(
                "grid_alpha must be within [0, 1], got {}",
                self.grid_alpha
            )));
        }
        parse_hex_color(&self.latency_color)?;
        parse_hex_color(&self.throughput_color)?;
        Ok(())
    }
}

/// Reads the config at `path`. A missing or unparsable file yields the defaults.
pub fn load_config(path: &str) -> ChartConfig {
    match std::fs::read_to_string(path) {
        Ok(s) => toml::from_str::<ChartConfig>(&s).unwrap_or_else(|err| {
            warn!(path, %err, "could not parse chart config, using defaults");
            ChartConfig::default()
        }),
        Err(err) => {
            debug!(path, %err, "no chart config, using defaults");
            ChartConfig::default()
        }
    }
}
