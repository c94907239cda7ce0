//! Failures of the download pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No games could be transcribed")]
    EmptyResult,
}
