//! Error types for the Sauti synthesis pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid script: {0}")]
    InvalidScript(String),

    #[error("Invalid speed multiplier: {0}")]
    InvalidSpeed(f32),

    #[error("Unknown voice: {0}")]
    InvalidVoice(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Audio assembly error: {0}")]
    Audio(String),

    #[error("Transport closed by client")]
    TransportClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
