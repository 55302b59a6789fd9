use anyhow::Result;
use std::fs;
use std::path::PathBuf;

#[allow(unused_must_use, dead_code)]
pub fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .chain(std::io::stderr())
        .apply();
}

#[allow(dead_code)]
pub fn get_script_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path.push("script");
    path.push(filename);

    path
}

#[allow(dead_code)]
pub fn get_script(filename: &str) -> Result<String> {
    Ok(fs::read_to_string(get_script_path(filename))?)
}
