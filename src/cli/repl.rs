use super::console::{self, Console};
use super::run::execute;
use super::Config;
use crate::error::InterpreterError;
use crate::visitors::Interpreter;
use anyhow::Result;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">> ";
const CONTINUATION_PROMPT: &str = ".. ";
const EXIT_COMMAND: &str = "exit";

/// Whether `source` ends inside a string literal. Strings have no escapes,
/// so an odd number of quotes means the last one is unterminated.
fn has_open_string(source: &str) -> bool {
    source.matches('"').count() % 2 == 1
}

/// Reads lines until `exit`, end of input or Ctrl-C, running each against a
/// single interpreter.
pub fn run(config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    if let Err(err) = editor.load_history(&config.history_path) {
        info!(
            "Unable to load history from {}: {}",
            config.history_path.display(),
            err
        );
    }

    println!("Welcome to the KSM REPL!");
    println!("Type '{EXIT_COMMAND}' to quit.");

    let mut interpreter = Interpreter::new(Console::new(config.echo));
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        };

        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        if line.trim() == EXIT_COMMAND {
            break;
        }

        if !line.trim().is_empty() {
            if let Err(err) = editor.add_history_entry(line.as_str()) {
                warn!("Unable to add history entry: {}", err);
            }
        }

        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(&line);

        match execute(&buffer, &mut interpreter, config.mode) {
            Err(InterpreterError::Parser(err))
                if err.is_incomplete() && !has_open_string(&buffer) =>
            {
                continue;
            }
            Err(err) => console::report_error(&err),
            Ok(()) => (),
        }

        buffer.clear();
    }

    // Input ended inside an open construct.
    if !buffer.is_empty() {
        if let Err(err) = execute(&buffer, &mut interpreter, config.mode) {
            console::report_error(&err);
        }
    }

    if let Err(err) = editor.save_history(&config.history_path) {
        warn!(
            "Unable to save history to {}: {}",
            config.history_path.display(),
            err
        );
    }

    info!("Session ended with {} variable(s)", interpreter.environment().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repl_has_open_string_test() {
        assert!(!has_open_string("if 1 < 2 {"));
        assert!(!has_open_string(r#"displayln("a b")"#));
        assert!(has_open_string(r#"if 1 < 2 { declare s = "abc"#));
        assert!(has_open_string("\"a\"\n\"b"));
    }
}
