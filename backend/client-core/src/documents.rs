//! Document payloads and local upload validation.

use crate::error::api::ApiError;

use std::ffi::OsStr;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Local ceiling on upload size, checked before any network call.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A document as the backend reports it.
///
/// The backend owns these; the client only holds transient copies fetched
/// on demand. `upload_date` is a naive UTC instant because the backend
/// serializes timestamps without an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub filename: String,
    pub file_path: String,
    pub upload_date: NaiveDateTime,
}

/// A file staged for upload.
///
/// Validation happens here, locally, before the file travels anywhere:
/// the declared content type must be PDF and the size must stay under
/// [`MAX_UPLOAD_BYTES`].
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Stage a file from disk, inferring the content type from its
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the path has no usable file
    /// name or the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, ApiError> {
        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                ApiError::validation(format!("No usable file name in path: {}", path.display()))
            })?;

        let bytes = std::fs::read(path).map_err(|e| {
            ApiError::validation(format!("Cannot read {}: {e}", path.display()))
        })?;

        let content_type = match path.extension().and_then(OsStr::to_str) {
            Some(extension) if extension.eq_ignore_ascii_case("pdf") => PDF_CONTENT_TYPE,
            _ => "application/octet-stream",
        };

        Ok(Self::new(filename, content_type, bytes))
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Reject non-PDF and oversized files before any network call.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.content_type != PDF_CONTENT_TYPE {
            return Err(ApiError::validation(format!(
                "Only PDF files are allowed (got {})",
                self.content_type
            )));
        }

        if self.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::validation(format!(
                "File size must be at most {} MiB ({} bytes given)",
                MAX_UPLOAD_BYTES / (1024 * 1024),
                self.bytes.len()
            )));
        }

        Ok(())
    }
}
