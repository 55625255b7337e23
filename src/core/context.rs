use crate::config::Config;
use crate::core::store::TaskStore;

use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub store: TaskStore,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    /// Context with default paths. A missing config file falls back to
    /// defaults, so this only fails on a malformed one.
    pub fn new() -> Self {
        Self::new_with_paths(PathBuf::from("config.json"), PathBuf::from("logs"))
            .expect("default context should build without a config file")
    }

    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        let store = TaskStore::new();

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            store,
            logger,
            startup_displayed: false,
            config_path,
            logs_dir,
        })
    }
}
