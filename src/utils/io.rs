//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file atomically (write to .tmp, then rename).
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = path.with_file_name(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation))))?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (rename)", operation))))?;

    Ok(())
}

/// Read text from a source spec: `@path` reads a file, `-` reads stdin.
pub fn read_source(spec: &str) -> Result<String> {
    if spec.trim() == "-" {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(Error::validation_invalid_argument(
                "source",
                "Cannot read input from stdin when stdin is a TTY",
                None,
            ));
        }
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
        return Ok(buf);
    }

    match spec.strip_prefix('@') {
        Some(path) if path.trim().is_empty() => Err(Error::validation_invalid_argument(
            "source",
            "Invalid source '@' (missing file path)",
            Some(spec.to_string()),
        )),
        Some(path) => read_file(Path::new(path), &format!("read {}", path)),
        None => Err(Error::validation_invalid_argument(
            "source",
            "Source must be '@<path>' or '-'",
            Some(spec.to_string()),
        )),
    }
}
