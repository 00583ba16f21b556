pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod series;
pub mod visualization;

pub use config::{load_config, ChartConfig, OutputFormat};
pub use error::ChartError;
pub use series::{NodeAxis, Series, Unit};
pub use visualization::ChartRenderer;
