//! Main application entry point.

use nodeflow_app::{App, AppConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting nodeflow");

    let result = AppConfig::from_args(std::env::args().skip(1)).and_then(|config| App::run(&config));
    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
