use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    ksm::cli::main(&std::env::args_os().collect::<Vec<_>>())
}
