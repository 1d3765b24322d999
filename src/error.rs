// SPDX-License-Identifier: MIT
//! Error types shared by the codec and the file operations

/// Errors that can occur while inflating or restoring a container
#[derive(Debug, thiserror::Error)]
pub enum BigzipError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BigzipError>;
