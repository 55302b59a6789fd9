use super::{args, config, logging, repl, run, Config};
use anyhow::Result;
use log::info;
use std::ffi::OsStr;
use std::process::ExitCode;

/// Main entrypoint for ksm.
pub fn main<S: AsRef<OsStr>>(args: &[S]) -> Result<ExitCode> {
    let args = args::parse_args(args);

    logging::setup_logger(
        args.verbose.try_into()?,
        &config::get_log_dir(),
        "ksm",
    )?;

    info!("Parsed arguments:\n{:#?}", &args);

    let config = Config::from_args(&args);

    if !config.color {
        colored::control::set_override(false);
    }

    let exit_code = match &args.file {
        Some(path) => run::run_file(path, &config),
        None => {
            repl::run(&config)?;
            ExitCode::SUCCESS
        }
    };

    info!("Exiting with {:?}", exit_code);

    Ok(exit_code)
}
