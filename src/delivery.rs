//! Response delivery: attachment headers and temp-file bookkeeping.

use std::fs;
use std::path::{Path, PathBuf};

use actix_web::http::header;
use actix_web::HttpResponse;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Attachment response from in-memory bytes.
pub fn attachment_response(bytes: Vec<u8>, filename: &str, content_type: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                sanitize_filename::sanitize(filename)
            ),
        ))
        .body(bytes)
}

/// A report file persisted to the output directory for the duration of one
/// request. Dropping the guard removes the file exactly once; a deletion
/// failure is logged rather than surfaced, since the response may already be
/// on the wire.
pub struct TempReport {
    path: PathBuf,
    filename: String,
}

impl TempReport {
    /// Write `bytes` under a unique name (`{prefix}_{millis}_{uuid}.{ext}`),
    /// creating the output directory on demand. Uniqueness keeps concurrent
    /// requests from clobbering each other in a shared directory.
    pub fn create(
        dir: &Path,
        prefix: &str,
        extension: &str,
        bytes: &[u8],
    ) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let filename = format!(
            "{}_{}_{}.{}",
            prefix,
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4().simple(),
            extension
        );
        let path = dir.join(&filename);
        fs::write(&path, bytes)?;
        Ok(Self { path, filename })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Read the artifact back and hand it off as a download. Consumes the
    /// guard; the file is removed when it drops.
    pub fn into_download(self, content_type: &str) -> std::io::Result<HttpResponse> {
        let bytes = fs::read(&self.path)?;
        Ok(attachment_response(bytes, &self.filename, content_type))
    }
}

impl Drop for TempReport {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_file(&self.path) {
            log::warn!(
                "falha ao remover arquivo temporário {}: {error}",
                self.path.display()
            );
        }
    }
}
