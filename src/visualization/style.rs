//! Style module - Palette, markers and grid styling

use plotters::prelude::*;

use crate::error::{ChartError, Result};

/// Plot-area fill of the "darkgrid" look.
pub const PLOT_BACKGROUND: RGBColor = RGBColor(0xea, 0xea, 0xf2);
pub const GRID_COLOR: RGBColor = WHITE;
/// Upper bound on tick labels (and grid lines) per axis.
pub const GRID_TICKS: usize = 10;
pub const GRID_DASH: u32 = 6;
pub const GRID_GAP: u32 = 4;
pub const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Diamond,
    Square,
}

impl Marker {
    /// Outline of the marker around the origin, in pixels.
    pub fn outline(&self, size: i32) -> Vec<(i32, i32)> {
        match self {
            Marker::Diamond => vec![(0, -size), (size, 0), (0, size), (-size, 0)],
            Marker::Square => vec![(-size, -size), (size, -size), (size, size), (-size, size)],
        }
    }
}

/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<RGBColor> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ChartError::Config(format!("`{s}` is not a #rrggbb colour")));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| ChartError::Config(format!("`{s}`: {e}")))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

pub fn grid_style(alpha: f64) -> ShapeStyle {
    GRID_COLOR.mix(alpha).stroke_width(1)
}
