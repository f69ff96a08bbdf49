use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the search configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {kind} code `{value}`")]
    InvalidCode { kind: &'static str, value: String },

    #[error("missing configuration value: {0}")]
    Missing(&'static str),
}

/// Errors raised by the browser session
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("could not start a WebDriver session at {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("WebDriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    #[error("timed out waiting for `{0}`")]
    Timeout(String),

    #[error("unexpected script result: {0}")]
    Script(String),
}

/// Errors raised while writing the results file
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while composing or submitting the email digest
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("environment variable {0} is not set")]
    MissingSecret(&'static str),

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
