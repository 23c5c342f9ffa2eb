use std::process::ExitCode;

use clap::Parser;
use shipdesk_lib::bootstrap::{init_tracing_subscriber, resolve_config, wire_dependencies};
use shipdesk_lib::cli::Cli;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(cli.config.clone(), cli.latency_ms) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let logs_dir = config.file_logging.then(|| config.paths().logs_dir);
    if let Err(err) = init_tracing_subscriber(logs_dir.as_deref()) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let deps = match wire_dependencies(&config) {
        Ok(deps) => deps,
        Err(err) => {
            error!(error = %err, "wiring failed");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match shipdesk_lib::run(cli.command, deps).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
