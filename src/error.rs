//! Error types shared across the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while scanning FASTA input.
#[derive(Error, Debug)]
pub enum FreqError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FreqError>;
