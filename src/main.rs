use std::process::ExitCode;

use tracing::error;

use node_scaling_charts::config::{load_config, DEFAULT_CONFIG_PATH};
use node_scaling_charts::dataset::{latency_series, throughput_series};
use node_scaling_charts::{logging, ChartRenderer};

fn main() -> ExitCode {
    logging::init();

    let config = load_config(DEFAULT_CONFIG_PATH);
    let renderer = ChartRenderer::new(config);

    let latency = latency_series();
    let throughput = throughput_series();

    match renderer.render(&latency, &throughput) {
        Ok(path) => {
            println!("Latency/throughput chart written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "render failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
