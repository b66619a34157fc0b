use std::process::ExitCode;

use clap::Parser;
use recipe_app::cli::{self, Cli};
use recipe_logging::recipe_error;

fn main() -> ExitCode {
    match cli::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            recipe_error!("{:#}", err);
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
