//! Visualization module - Two-panel node scaling figure

pub mod dashboard;
pub mod panel;
pub mod style;

pub use dashboard::ChartRenderer;
pub use panel::PanelSpec;
pub use style::Marker;
