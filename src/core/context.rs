use crate::config::Config;
use crate::logging::{LogTarget, Logger};
use std::path::Path;

/// Default config location, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "calprint.json";

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
}

impl AppContext {
    pub fn new() -> Self {
        Self::new_with_path(CONFIG_FILE_NAME)
    }

    /// Build the context from an optional config file. Never fails: a missing
    /// file means defaults, a broken one is reported and replaced by defaults.
    pub fn new_with_path(config_path: impl AsRef<Path>) -> Self {
        let logger = Logger::new();
        let config = Self::load_config(config_path.as_ref(), &logger);

        logger.set_log_dir(config.log_dir());
        logger.set_file_logging_enabled(config.file_logging_enabled());
        for line in config.summary() {
            logger.info(line, LogTarget::FileOnly);
        }

        Self { config, logger }
    }

    fn load_config(path: &Path, logger: &Logger) -> Config {
        if !path.exists() {
            return Config::default();
        }
        match Config::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                logger.warn(
                    format!("WARN: {err} Using default settings."),
                    LogTarget::ConsoleOnly,
                );
                Config::default()
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
