//! Document text extraction. Resumes and job postings arrive as PDF or plain
//! text; they leave here as lowercase-normalized strings, produced once per
//! upload and immutable afterwards.
//!
//! Failures surface as explicit errors. The matching engine is never handed
//! partial or garbage text.

#![allow(dead_code)]

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract PDF text: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("file is not valid UTF-8 text")]
    InvalidUtf8,
}

/// Source document format, decided by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    PlainText,
}

impl SourceFormat {
    /// Anything without a `.pdf` extension is treated as plain text.
    pub fn from_file_name(name: &str) -> Self {
        if name.to_lowercase().ends_with(".pdf") {
            SourceFormat::Pdf
        } else {
            SourceFormat::PlainText
        }
    }
}

/// Extracts lowercase-normalized text from a file on disk.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    match SourceFormat::from_file_name(&path.to_string_lossy()) {
        SourceFormat::Pdf => Ok(normalize(&pdf_extract::extract_text(path)?)),
        SourceFormat::PlainText => {
            let raw = std::fs::read_to_string(path).map_err(|source| ExtractionError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Ok(normalize(&raw))
        }
    }
}

/// Extracts lowercase-normalized text from an uploaded payload.
pub fn extract_text_from_bytes(
    data: &[u8],
    format: SourceFormat,
) -> Result<String, ExtractionError> {
    match format {
        SourceFormat::Pdf => Ok(normalize(&pdf_extract::extract_text_from_mem(data)?)),
        SourceFormat::PlainText => {
            let raw = std::str::from_utf8(data).map_err(|_| ExtractionError::InvalidUtf8)?;
            Ok(normalize(raw))
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(SourceFormat::from_file_name("resume.pdf"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_file_name("Resume.PDF"), SourceFormat::Pdf);
        assert_eq!(
            SourceFormat::from_file_name("resume.txt"),
            SourceFormat::PlainText
        );
        assert_eq!(
            SourceFormat::from_file_name("resume"),
            SourceFormat::PlainText
        );
    }

    #[test]
    fn test_plain_text_file_is_lowercased() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .unwrap();
        write!(file, "Senior RUST Engineer").unwrap();

        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "senior rust engineer");
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let err = extract_text(Path::new("/nonexistent/resume.txt")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn test_bytes_plain_text_is_lowercased() {
        let text =
            extract_text_from_bytes(b"Machine Learning Engineer", SourceFormat::PlainText).unwrap();
        assert_eq!(text, "machine learning engineer");
    }

    #[test]
    fn test_bytes_invalid_utf8_is_rejected() {
        let err = extract_text_from_bytes(&[0xff, 0xfe, 0xfd], SourceFormat::PlainText).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidUtf8));
    }
}
