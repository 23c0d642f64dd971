pub mod archive;
mod cli;
pub mod error;
pub mod export_method;
pub mod export_options;
pub mod options;
pub mod profile;
mod utils;

use std::process::ExitCode;

pub use cli::{run_inspect, run_manual};

/// Entry point of `xcarchive-export-options`.
pub fn cli_main() -> ExitCode {
    cli::init_tracing();
    let decoder = profile::default_decoder();
    cli::exit_code(cli::run_inspect(std::env::args_os(), decoder.as_ref()))
}

/// Entry point of `xcarchive-export-options-manual`.
pub fn manual_cli_main() -> ExitCode {
    cli::init_tracing();
    cli::exit_code(cli::run_manual(std::env::args_os()))
}
