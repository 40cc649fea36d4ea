use std::path::Path;
use std::process::ExitCode;

use graymill::pipeline::{self, PipelineConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// args: $1: file to convert, $2: file to save the result to
fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source, destination] = args.as_slice() else {
        eprintln!("This program takes exactly 2 arguments: <source.ppm> <destination.pgm>");
        return ExitCode::FAILURE;
    };

    match pipeline::run_file(
        Path::new(source),
        Path::new(destination),
        &PipelineConfig::default(),
    ) {
        Ok(()) => {
            println!("File converted successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("conversion failed: {e}");
            ExitCode::FAILURE
        }
    }
}
