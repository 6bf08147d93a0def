use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::store::app_data_dir;

const LOG_FILE_NAME: &str = "grid-snake.log";

/// Default log location next to the persisted store.
#[must_use]
pub fn default_log_path() -> PathBuf {
    app_data_dir().join(LOG_FILE_NAME)
}

/// Routes `log` output to `path`, truncating any previous run's log.
///
/// Output goes to a file because the terminal is in raw mode while playing.
pub fn init_file_logger(path: &Path, level: LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}
