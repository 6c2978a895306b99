// Errors raised by the file and network side of desktop-file generation
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GendeskError {
    #[error("Could not read {path}: {source}")]
    DescriptorRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not download {url}: {source}")]
    Download { url: String, source: reqwest::Error },
    #[error("No icon found for {0}")]
    NoIconFound(String),
    #[error("Could not read default icon {path}: {source}")]
    DefaultIconRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No pkgname found, nothing to generate")]
    NoPackageName,
}

pub type Result<T> = std::result::Result<T, GendeskError>;
