use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // ---- Arguments ----------------------------------------------------------
    /// Malformed command-line words (counts, coordinates, directions).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Well-formed input the operation cannot accept (e.g. half a coordinate).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No command matches the first word.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Config -------------------------------------------------------------
    /// Any issue reading or writing the config file.
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing -----------------------------------------------------------
    /// IO passthrough (writing sequences, log files, config).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
