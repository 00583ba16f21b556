//! Dashboard module - Lays the two panels out side by side and writes the figure

use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use super::panel::{draw_panel, PanelSpec};
use super::style::parse_hex_color;
use crate::config::{ChartConfig, OutputFormat};
use crate::error::Result;
use crate::series::Series;

/// Draws the latency and throughput panels side by side and writes the figure.
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Renders both panels to the configured output and returns the path written.
    ///
    /// Fails before any output is created if the config is invalid or either
    /// series is empty.
    pub fn render(&self, latency: &Series, throughput: &Series) -> Result<PathBuf> {
        self.check_inputs(latency, throughput)?;

        let path = &self.config.output_path;
        let size = (self.config.width, self.config.height);
        info!(path = %path.display(), format = ?self.config.format, "rendering node scaling chart");

        match self.config.format {
            OutputFormat::Png => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                self.draw_figure(&root, latency, throughput)?;
            }
            OutputFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                self.draw_figure(&root, latency, throughput)?;
            }
        }

        info!(path = %path.display(), "chart written");
        Ok(path.clone())
    }

    /// Same figure as `render`, as an in-memory SVG document.
    pub fn render_to_svg_string(&self, latency: &Series, throughput: &Series) -> Result<String> {
        self.check_inputs(latency, throughput)?;

        let mut buf = String::new();
        {
            let size = (self.config.width, self.config.height);
            let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
            self.draw_figure(&root, latency, throughput)?;
        }
        Ok(buf)
    }

    fn check_inputs(&self, latency: &Series, throughput: &Series) -> Result<()> {
        self.config.validate()?;
        latency.ensure_not_empty()?;
        throughput.ensure_not_empty()?;
        Ok(())
    }

    fn draw_figure<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        latency: &Series,
        throughput: &Series,
    ) -> Result<()> {
        let latency_panel = PanelSpec::latency(parse_hex_color(&self.config.latency_color)?);
        let throughput_panel = PanelSpec::throughput(parse_hex_color(&self.config.throughput_color)?);

        root.fill(&WHITE)?;
        let panels = root.split_evenly((1, 2));
        draw_panel(&panels[0], &latency_panel, latency, &self.config)?;
        draw_panel(&panels[1], &throughput_panel, throughput, &self.config)?;
        root.present()?;
        Ok(())
    }
}
