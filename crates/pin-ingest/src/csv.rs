//! CSV input: every column is read as text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Maximum input file size (200 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 200 * 1024 * 1024;

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check the file exists and is within `max_size` bytes.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject UTF-16 input and empty files. A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Read a CSV file with a single header row into an all-string DataFrame.
///
/// Schema inference is disabled so codes such as `"05"` keep their leading
/// zeros; empty fields load as null.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    check_file_size(path, MAX_INPUT_FILE_SIZE)?;
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv loaded"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_keeps_text() {
        let file = create_temp_csv(b"Size,Actuator Size\n0.5 x 0.5 x 0.5,05\n4 x 3 x 2,\n");
        let df = read_csv(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        let sizes = df.column("Actuator Size").unwrap().str().unwrap();
        assert_eq!(sizes.get(0), Some("05"));
        assert_eq!(sizes.get(1), None);
    }

    #[test]
    fn test_read_csv_with_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n".as_bytes());
        let df = read_csv(file.path()).unwrap();
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0]);
        let result = read_csv(file.path());
        assert!(matches!(result, Err(IngestError::UnsupportedEncoding { .. })));
    }

    #[test]
    fn test_rejects_empty_file() {
        let file = create_temp_csv(b"");
        assert!(matches!(read_csv(file.path()), Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_check_file_size() {
        let file = create_temp_csv(b"A,B\n1,2\n");
        assert!(check_file_size(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size(file.path(), 4),
            Err(IngestError::FileTooLarge { .. })
        ));
    }
}
