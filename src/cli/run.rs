use super::console::{self, Console};
use super::{Config, Mode};
use crate::ast::Parser;
use crate::error::InterpreterError;
use crate::lexer::Lexer;
use crate::visitors::{Inspector, Interpreter};
use log::{debug, info};
use std::path::Path;
use std::process::ExitCode;

/// Handles `source` according to `mode`.
pub fn execute(
    source: &str,
    interpreter: &mut Interpreter<Console>,
    mode: Mode,
) -> Result<(), InterpreterError> {
    debug!("Executing {:?}: {:?}", mode, source);

    match mode {
        Mode::Run => interpreter.run(source),
        Mode::Tokens => {
            for token in Lexer::new(source) {
                println!("{token}");
            }

            Ok(())
        }
        Mode::Ast => {
            let program = Parser::from_string(source).parse()?;
            print!("{}", Inspector::inspect(&program));

            Ok(())
        }
    }
}

/// Runs the script at `path` once.
pub fn run_file(path: &Path, config: &Config) -> ExitCode {
    info!("Reading {}", path.display());

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            let message = format!("Could not read file: {err}");
            log::error!("{}", message);
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut interpreter = Interpreter::new(Console::new(config.echo));

    match execute(&source, &mut interpreter, config.mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            console::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
