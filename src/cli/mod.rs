/// Argument parsing
pub mod args;
/// Runtime settings
pub mod config;
/// Console output
pub mod console;
/// Logging setup
pub mod logging;
/// Interactive session
pub mod repl;
/// File mode and shared execution
pub mod run;

mod main;

pub use args::Args;
pub use config::{Config, Mode};
pub use main::main;
