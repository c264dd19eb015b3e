//! File logging.
//!
//! The terminal belongs to the UI, so log records go to a file instead of
//! stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use color_eyre::eyre::WrapErr;

/// Default filter for a given number of `-v` flags. `RUST_LOG` still wins.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger writing to `path`.
///
/// Without a path logging is switched off.
pub fn init(path: Option<&Path>, verbose: u8) -> color_eyre::Result<()> {
    let Some(path) = path else {
        log::set_max_level(log::LevelFilter::Off);
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbose)),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .write_style(env_logger::WriteStyle::Never)
    .try_init()
    .wrap_err("failed to install logger")?;

    Ok(())
}
