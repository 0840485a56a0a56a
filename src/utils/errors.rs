use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Allocation failures while building the tree
    #[error("Out of memory error at line {line}")]
    OutOfMemory { line: usize },

    // Lexical analysis errors
    #[error("Unterminated comment starting at line {line}")]
    UnterminatedComment { line: usize },

    // Tree construction errors
    #[error("Child index {index} out of range for node at line {line}")]
    ChildIndexOutOfRange { index: usize, line: usize },
}

pub type CmResult<T> = Result<T, CmError>;
