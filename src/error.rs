// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid proxy `{0}`")]
    Proxy(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{file}: missing required column `{column}`")]
    MissingColumn { file: PathBuf, column: &'static str },

    #[error("{what} not found on {url}")]
    MissingElement { what: &'static str, url: String },

    #[error("Config: {0}")]
    Config(String),

    #[error("GUI failed: {0}")]
    Gui(String),
}
