use crate::utils::errors::{CmError, CmResult};
use crate::LineNumber;
use tracing::error;

/// Makes an independently owned copy of `s` so the tree never aliases
/// scanner or parser buffers. An absent input yields an absent copy.
///
/// The buffer is reserved fallibly; on failure the error carries the
/// current source line.
pub fn copy_string(s: Option<&str>, lineno: &LineNumber) -> CmResult<Option<String>> {
    let Some(s) = s else {
        return Ok(None);
    };
    let mut copy = String::new();
    if copy.try_reserve_exact(s.len()).is_err() {
        error!(line = lineno.line, len = s.len(), "string copy allocation failed");
        return Err(CmError::OutOfMemory { line: lineno.line });
    }
    copy.push_str(s);
    Ok(Some(copy))
}

/// Writes `count` spaces to the sink.
pub fn write_spaces<W: std::io::Write + ?Sized>(out: &mut W, count: usize) -> CmResult<()> {
    write!(out, "{:width$}", "", width = count)?;
    Ok(())
}
