//! Resume document decoding: turns an uploaded file into plain text.

use std::io::{Cursor, Read};

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

/// Main body part of a WordprocessingML package.
const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Text file is not valid UTF-8")]
    NotUtf8,

    #[error("Not a DOCX package: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to read DOCX body: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Invalid text pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match &err {
            DocumentError::NotUtf8 | DocumentError::Archive(_) => {
                AppError::UnprocessableEntity(err.to_string())
            }
            _ => AppError::Extraction(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Picks a decoder from the file extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" | "md" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }

    pub async fn extract_text(self, bytes: Vec<u8>) -> Result<String, AppError> {
        match self {
            DocumentKind::PlainText => {
                String::from_utf8(bytes).map_err(|_| AppError::from(DocumentError::NotUtf8))
            }
            // Both decoders are CPU-bound; keep them off the async workers.
            DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes)
                    .map_err(|e| DocumentError::Pdf(e.to_string()))
            })
            .await
            .map_err(|e| AppError::Internal(e.into()))?
            .map_err(AppError::from),
            DocumentKind::Docx => tokio::task::spawn_blocking(move || extract_docx_text(&bytes))
                .await
                .map_err(|e| AppError::Internal(e.into()))?
                .map_err(AppError::from),
        }
    }
}

/// Reads the visible text runs of a DOCX file, one line per paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY_PART)?.read_to_string(&mut xml)?;

    let runs = Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab/>|<w:br/>")?;
    let mut text = String::with_capacity(xml.len() / 4);
    for caps in runs.captures_iter(&xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&unescape_xml(run.as_str())),
            None if caps[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }

    debug!("Extracted {} chars from DOCX body", text.len());
    Ok(text)
}

fn unescape_xml(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}


#[cfg(test)]
mod tests {
    use super::test_support::docx_bytes;
    use super::*;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("cv.Docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("cv.md"), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_filename("cv.odt"), None);
        assert_eq!(DocumentKind::from_filename("resume"), None);
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let bytes = docx_bytes(&["Jane Doe", "Skills: Docker, Kubernetes"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSkills: Docker, Kubernetes\n");
    }

    #[test]
    fn test_docx_entities_are_unescaped() {
        let bytes = docx_bytes(&["R&amp;D &lt;C++&gt; &quot;lead&quot;"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "R&D <C++> \"lead\"\n");
    }

    #[test]
    fn test_non_zip_bytes_are_rejected() {
        let err = extract_docx_text(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, DocumentError::Archive(_)));
        assert!(matches!(AppError::from(err), AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_zip_without_body_part_is_rejected() {
        let mut zip = zip::write::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        zip.start_file::<_, ()>("notes.txt", zip::write::FileOptions::default())
            .unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(matches!(err, DocumentError::Archive(_)));
    }

    #[tokio::test]
    async fn test_plain_text_must_be_utf8() {
        let err = DocumentKind::PlainText
            .extract_text(vec![0xff, 0xfe, 0xfd])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_docx_kind_extracts_off_thread() {
        let text = DocumentKind::Docx
            .extract_text(docx_bytes(&["Terraform"]))
            .await
            .unwrap();
        assert_eq!(text, "Terraform\n");
    }
}
