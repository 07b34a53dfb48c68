//! Turns a locked consultation record into a printable document.
//!
//! The rich path emits an XHTML document with the signature image embedded;
//! when that fails the text-only path takes over, so export always produces
//! something readable.

pub mod document;

use thiserror::Error;

use crate::form::signature::SignatureArtifact;
use crate::models::ConsultationRecord;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize print document: {0}")]
    Serialize(#[from] quick_xml::SeError),

    #[error("Signature artifact is not a valid data URL")]
    InvalidSignature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Xhtml,
    PlainText,
}

impl DocumentFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentFormat::Xhtml => "formulir.xhtml",
            DocumentFormat::PlainText => "formulir.txt",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub format: DocumentFormat,
    pub content: String,
}

/// Rich path: full print layout as XHTML.
pub fn render_print_document(record: &ConsultationRecord) -> Result<String, RenderError> {
    // A malformed stored signature fails the rich render up front instead
    // of embedding a broken image.
    if let Some(url) = &record.signature_data {
        if SignatureArtifact::decode_data_url(url).is_none() {
            return Err(RenderError::InvalidSignature);
        }
    }
    document::to_xhtml(record)
}

/// Degraded path: plain-text summary. Cannot fail.
pub fn render_text_summary(record: &ConsultationRecord) -> String {
    document::to_plain_text(record)
}

/// Rich render with automatic fallback. The second element carries the
/// rich-path failure, if any, for the caller to report.
pub fn render_with_fallback(record: &ConsultationRecord) -> (RenderedDocument, Option<RenderError>) {
    match render_print_document(record) {
        Ok(content) => (
            RenderedDocument {
                format: DocumentFormat::Xhtml,
                content,
            },
            None,
        ),
        Err(err) => (
            RenderedDocument {
                format: DocumentFormat::PlainText,
                content: render_text_summary(record),
            },
            Some(err),
        ),
    }
}
