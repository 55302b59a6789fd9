use anyhow::{bail, Result};
use log::{info, LevelFilter};
use std::fs;
use std::path::Path;

static LOG_LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Maps the number of `-v` flags to a [`LevelFilter`].
pub fn level_from_verbosity(verbosity: usize) -> Result<LevelFilter> {
    match LOG_LEVELS.get(verbosity) {
        Some(level) => Ok(*level),
        None => bail!(
            "Verbosity must be between 0 and {}, not {}!",
            LOG_LEVELS.len() - 1,
            verbosity
        ),
    }
}

/// Sends log records to `<log_dir>/<name>.log`. Does nothing when
/// `verbosity` is zero.
pub fn setup_logger(
    verbosity: usize,
    log_dir: &Path,
    name: &str,
) -> Result<()> {
    let level = level_from_verbosity(verbosity)?;

    if level == LevelFilter::Off {
        return Ok(());
    }

    fs::create_dir_all(log_dir)?;

    let log_file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(log_dir.join(format!("{name}.log")))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:.1}][{}][{}:{}] {}",
                record.level(),
                chrono::Local::now().format("%H:%M:%S.%6f"),
                record.target().rsplit("::").next().unwrap_or_default(),
                record.line().unwrap_or(0),
                message
            ));
        })
        .level(level)
        .chain(log_file)
        .apply()?;

    info!("Logging at {} to {}", level, log_dir.display());

    Ok(())
}
