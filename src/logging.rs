use crate::error::Result;
use simplelog::*;
use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Directory holding `spinline.log`: `~/.local/share/spinline/logs`.
pub fn log_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("spinline")
        .join("logs"))
}

/// Sends log records to a file. Standard error is the spinner's canvas, so
/// nothing is logged to the terminal. Later calls are no-ops.
pub fn init_logger() -> Result<()> {
    if LOGGER_INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("spinline.log"))?;

    CombinedLogger::init(vec![WriteLogger::new(
        LevelFilter::Debug,
        Config::default(),
        log_file,
    )])?;

    LOGGER_INITIALIZED.store(true, Ordering::SeqCst);
    Ok(())
}
