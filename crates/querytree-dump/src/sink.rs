//! Output encoding and destinations for rendered documents.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::DumpError;
use crate::value::Value;

/// Output encoding for a rendered document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Indented, one field per line.
    Pretty,
    /// Single line.
    Compact,
}

impl Format {
    fn is_pretty(self) -> bool {
        matches!(self, Format::Pretty)
    }
}

/// Encode `value` and write it to `out` with a trailing newline.
///
/// Failures of the destination surface as [`DumpError::Sink`].
pub fn write_document<W: Write>(
    out: &mut W,
    value: &Value,
    format: Format,
) -> Result<(), DumpError> {
    let encoded = value.format(format.is_pretty());
    out.write_all(encoded.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Encode `value` and write it to the file at `path`, replacing any
/// previous contents.
pub fn write_document_to_path(
    path: &Path,
    value: &Value,
    format: Format,
) -> Result<(), DumpError> {
    let mut file = fs::File::create(path)?;
    write_document(&mut file, value, format)
}
