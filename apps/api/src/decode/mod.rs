//! Document decoding: uploaded bytes of a known media type become one flat
//! UTF-8 text blob. This is the only stage that can fail on a well-formed
//! request; the extraction engine downstream is total.

pub mod docx;
pub mod pdf;

use thiserror::Error;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid file type. Only PDF, DOCX, and TXT files are allowed.")]
    UnsupportedMediaType,

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("The document contains no extractable text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
    PlainText,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Drop parameters such as "; charset=utf-8".
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        match essence {
            MIME_PDF => Some(MediaType::Pdf),
            MIME_DOCX => Some(MediaType::Docx),
            MIME_TEXT => Some(MediaType::PlainText),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(MediaType::Pdf),
            "docx" => Some(MediaType::Docx),
            "txt" => Some(MediaType::PlainText),
            _ => None,
        }
    }

    /// The declared MIME type wins; the filename extension is consulted only
    /// when the client sent nothing useful.
    pub fn resolve(mime: Option<&str>, filename: &str) -> Option<Self> {
        match mime {
            Some(m) if m.trim() != "application/octet-stream" && !m.trim().is_empty() => {
                Self::from_mime(m)
            }
            _ => Self::from_filename(filename),
        }
    }
}

pub fn decode(bytes: &[u8], media_type: MediaType) -> Result<String, DecodeError> {
    let text = match media_type {
        MediaType::Pdf => pdf::extract_text(bytes)?,
        MediaType::Docx => docx::extract_text(bytes)?,
        MediaType::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };
    if text.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(text)
}
