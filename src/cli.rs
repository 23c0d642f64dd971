use std::{ffi::OsString, path::Path, process::ExitCode};

use anyhow::Result;
use clap::{Args, Parser};
use console::style;
use tracing_subscriber::EnvFilter;

use crate::archive;
use crate::error::InputError;
use crate::export_method::ExportMethod;
use crate::export_options::ExportOptions;
use crate::options::Inputs;
use crate::profile::{self, ProfileDecoder};

#[derive(Args)]
struct PathArgs {
    /// Export options path
    #[arg(short = 'o', long = "export_options_path", value_name = "path")]
    export_options_path: Option<String>,
    /// Archive path
    #[arg(short = 'a', long = "archive_path", value_name = "path")]
    archive_path: Option<String>,
}

/// Writes an export options plist using the given export method.
#[derive(Parser)]
#[command(name = "xcarchive-export-options-manual", version, args_override_self = true)]
struct ManualCli {
    #[command(flatten)]
    paths: PathArgs,
    /// Export method
    #[arg(short = 'e', long = "export_method", value_name = "method")]
    export_method: Option<String>,
}

/// Writes an export options plist, picking the export method from the
/// provisioning profile embedded in the archived app.
#[derive(Parser)]
#[command(name = "xcarchive-export-options", version, args_override_self = true)]
struct InspectCli {
    #[command(flatten)]
    paths: PathArgs,
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the manual generation with `args` (program name first).
pub fn run_manual<I, T>(args: I) -> Result<ExportOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = ManualCli::try_parse_from(args)?;

    println!();
    let inputs = Inputs::validate(
        cli.paths.export_options_path,
        cli.paths.archive_path,
        cli.export_method,
    )?;

    create_export_options(inputs.export_method, &inputs.export_options_path)
}

/// Runs the profile-driven generation with `args` (program name first).
pub fn run_inspect<I, T>(args: I, decoder: &dyn ProfileDecoder) -> Result<ExportOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = InspectCli::try_parse_from(args)?;

    println!();
    let inputs = Inputs::validate(cli.paths.export_options_path, cli.paths.archive_path, None)?;

    println!();
    println!("==> Inspect provisioning profile");
    let profile_path = archive::find_provisioning_profile(&inputs.archive_path)?;
    println!("(i) provisioning_profile: {}", profile_path.display());

    let profile = profile::read_provisioning_profile(decoder, &profile_path)?;
    let method = ExportMethod::classify(&profile);
    println!("(i) export_method: {}", method);

    create_export_options(Some(method), &inputs.export_options_path)
}

fn create_export_options(method: Option<ExportMethod>, path: &Path) -> Result<ExportOptions> {
    println!();
    println!("==> Create export options");

    let export_options = ExportOptions::new(method);
    export_options.write_to_file(path)?;
    Ok(export_options)
}

fn error_line(err: &InputError) -> String {
    style(err).for_stderr().red().to_string()
}

pub(crate) fn exit_code(result: Result<ExportOptions>) -> ExitCode {
    let err = match result {
        Ok(_) => return ExitCode::SUCCESS,
        Err(err) => err,
    };

    // --help and --version end up here too.
    if let Some(err) = err.downcast_ref::<clap::Error>() {
        let _ = err.print();
        return if err.exit_code() == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match err.downcast_ref::<InputError>() {
        Some(input_error) => eprintln!("{}", error_line(input_error)),
        None => eprintln!("Error: {:?}", err),
    }
    ExitCode::FAILURE
}
