// File: crates/stylegrid-core/src/error.rs
// Summary: Error taxonomy shared by sampling, panel rendering, style lookup and output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed shape, range or seed handed to the sample generator.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Mismatched counts inside a panel (ticks vs labels, legend vs artists, ...).
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("style not found: '{0}'")]
    StyleNotFound(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("display failed: {0}")]
    Display(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub(crate) fn param(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
