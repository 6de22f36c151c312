use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("BadInput: {0}")]
    BadInput(String),
    #[error("UnexpectedEof: expected {0}")]
    UnexpectedEof(String),
    #[error("UnknownProgram: '{0}' (run 'help' for the list)")]
    UnknownProgram(String),
    #[error("Overflow: {0}")]
    Overflow(String),
    #[error("Config: {0}")]
    Config(String),
    #[error("IO: {0}")]
    Io(#[from] io::Error),
}
