use clap::Parser;
use std::ffi::OsStr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Holds command line arguments.
pub struct Args {
    /// Script to run. Starts the REPL when omitted.
    #[clap(parse(from_os_str), value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[clap(short, long, parse(from_occurrences))]
    /// Increase log verbosity. May be repeated up to five times.
    pub verbose: u64,

    #[clap(short, long)]
    /// Print variable declarations and evaluated conditions.
    pub echo: bool,

    #[clap(long)]
    /// Disable colored output.
    pub no_color: bool,

    #[clap(long, conflicts_with = "ast")]
    /// Print the token stream instead of running.
    pub tokens: bool,

    #[clap(long)]
    /// Print the Abstract Syntax Tree instead of running.
    pub ast: bool,
}

/// Parses arguments, exiting with a usage message on failure.
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Args {
    Args::parse_from(args.iter().map(|s| s.as_ref().to_os_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults_test() {
        let args = parse_args(&["ksm"]);

        assert_eq!(args.file, None);
        assert_eq!(args.verbose, 0);
        assert!(!args.echo && !args.no_color && !args.tokens && !args.ast);
    }

    #[test]
    fn args_flags_test() {
        let args = parse_args(&["ksm", "-vvv", "--echo", "--ast", "a.ksm"]);

        assert_eq!(args.file, Some(PathBuf::from("a.ksm")));
        assert_eq!(args.verbose, 3);
        assert!(args.echo);
        assert!(args.ast);
    }

    #[test]
    fn args_dump_modes_conflict_test() {
        assert!(Args::try_parse_from(["ksm", "--tokens", "--ast"]).is_err());
    }
}
