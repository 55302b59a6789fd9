use super::Args;
use std::path::PathBuf;

/// Name of the REPL history file.
pub const HISTORY_FILENAME: &str = "ksm_history";

/// Directory the log file is written to.
pub fn get_log_dir() -> PathBuf {
    std::env::temp_dir().join("ksm")
}

/// Location of the REPL history, in the user's cache directory when there
/// is one.
pub fn get_history_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(HISTORY_FILENAME)
}

/// What to do with source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Interpret it.
    Run,
    /// Print its tokens.
    Tokens,
    /// Print its Abstract Syntax Tree.
    Ast,
}

/// Runtime settings, gathered from [`Args`].
#[derive(Clone, Debug)]
pub struct Config {
    #[allow(missing_docs)]
    pub echo: bool,
    #[allow(missing_docs)]
    pub color: bool,
    #[allow(missing_docs)]
    pub mode: Mode,
    #[allow(missing_docs)]
    pub history_path: PathBuf,
}

impl Config {
    #[allow(missing_docs)]
    pub fn from_args(args: &Args) -> Self {
        let mode = if args.tokens {
            Mode::Tokens
        } else if args.ast {
            Mode::Ast
        } else {
            Mode::Run
        };

        Config {
            echo: args.echo,
            color: !args.no_color,
            mode,
            history_path: get_history_path(),
        }
    }
}
