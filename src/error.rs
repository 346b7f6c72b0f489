//! Error types shared by the simulation, setup and IO layers

use thiserror::Error;

use crate::visualization::picture::PictureError;

/// Result type for simulation setup and rendering
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while building or running a scenario
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid body '{name}': {reason}")]
    InvalidBody { name: String, reason: String },

    #[error("invalid orbital elements for '{name}': {reason}")]
    InvalidElements { name: String, reason: String },

    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Picture(#[from] PictureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
