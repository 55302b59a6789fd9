use crate::error::InterpreterError;
use crate::output::{Echo, Output};
use colored::Colorize;
use log::{error, info};

/// Writes program output to stdout.
pub struct Console {
    echo: bool,
}

impl Console {
    /// Creates a [`Console`] that prints echoes if `echo` is set.
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl Output for Console {
    fn print(&mut self, text: &str) {
        info!("stdout: {}", text);
        println!("{text}");
    }

    fn echo(&mut self, echo: &Echo<'_>) {
        if !self.echo {
            return;
        }

        let line = match echo {
            Echo::Declaration { name, value } => {
                format!("Variable Declaration: {name} = {value}").blue()
            }
            Echo::Condition { text, holds: true } => {
                format!("If Statement (True): {text}").green()
            }
            Echo::Condition { text, holds: false } => {
                format!("If Statement (False): {text}").red()
            }
            Echo::Otherwise => "Otherwise Statement".normal(),
        };

        println!("{line}");
    }
}

/// Describes `error` the way the console reports it.
pub fn describe_error(error: &InterpreterError) -> String {
    match error {
        InterpreterError::Parser(error) => format!("Parsing error: {error}"),
        error => format!("Interpretation error: {error}"),
    }
}

/// Prints `error` to stderr.
pub fn report_error(error: &InterpreterError) {
    let message = describe_error(error);

    error!("{}", message);
    eprintln!("{}", message.red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParserError;

    #[test]
    fn console_describe_error_test() {
        let parser_error =
            InterpreterError::Parser(ParserError::MaxDepth(48));

        assert_eq!(
            describe_error(&parser_error),
            "Parsing error: Maximum nesting depth, 48, exceeded!"
        );

        let declaration_error = InterpreterError::DeclarationFormat {
            clause: "x".to_string(),
            line: 1,
            column: 1,
        };

        assert_eq!(
            describe_error(&declaration_error),
            r#"Interpretation error: Invalid variable declaration at 1:1: "x""#
        );
    }
}
