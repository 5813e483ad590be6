use crate::config::Config;
use crate::core::terminal::TermSize;
use crate::core::types::Platform;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub term: TermSize,
    /// Print sequences in readable form instead of raw bytes.
    pub escaped: bool,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf, escaped: bool) -> Result<Self> {
        let config = Config::load_or_default(&config_path)?;

        let logger = Logger::new(logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let escaped = escaped || config.escaped_output();

        Ok(Self {
            config,
            logger,
            term: TermSize,
            escaped,
        })
    }

    pub fn platform(&self) -> Platform {
        self.config.platform()
    }
}
