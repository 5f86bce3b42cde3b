//! Resume delivery.
//!
//! The resume is a PDF on local disk, read fresh on every access. A missing
//! file is not an error: the page shows a notice instead of the download control.

pub mod handlers;

use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;
use url::form_urlencoded;

pub const RESUME_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeStatus {
    Available { size_bytes: u64 },
    Missing,
}

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Checks whether the resume exists without reading it.
pub fn resume_status(path: &Path) -> ResumeStatus {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => ResumeStatus::Available {
            size_bytes: meta.len(),
        },
        _ => ResumeStatus::Missing,
    }
}

/// Reads the whole resume. Returns `None` when the file is absent or unreadable.
pub fn load_resume(path: &Path, filename: &str) -> Option<ResumeFile> {
    match std::fs::read(path) {
        Ok(bytes) => Some(ResumeFile {
            filename: filename.to_string(),
            bytes,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Resume at {} is unreadable: {e}", path.display());
            None
        }
    }
}

/// `Content-Disposition` value suggesting `filename` for the download.
///
/// `filename` carries an ASCII fallback (non-ASCII replaced by `_`, quotes,
/// backslashes and control characters dropped); `filename*` carries the exact
/// name as RFC 5987 UTF-8 percent-encoding.
pub fn attachment_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    // byte_serialize leaves only alphanumerics and `*-._`; `*` and the `+` it
    // uses for spaces are outside RFC 5987 attr-char.
    let encoded = form_urlencoded::byte_serialize(filename.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A");
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
