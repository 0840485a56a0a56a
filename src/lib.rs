use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod listing;
pub mod utils;

pub use utils::config;
pub use utils::errors;

/// Current source line, shared between the scanner and tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::config::source::SOURCE_EXTENSION;
use crate::errors::{CmError, CmResult};

pub fn read(filename: &Path) -> CmResult<String> {
    match filename.extension() {
        Some(ext) if ext.to_str() == Some(SOURCE_EXTENSION) => {}
        _ => {
            return Err(CmError::FileReadError(format!(
                "File must have a .{} extension",
                SOURCE_EXTENSION
            )));
        }
    }
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
