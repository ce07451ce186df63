//! DOCX text extraction. A .docx file is a ZIP container; the document body
//! lives in `word/document.xml` as WordprocessingML. Each `w:p` paragraph
//! becomes one output line, built from the concatenated `w:t` text runs.

use std::io::{Cursor, Read};

use super::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_text(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| DecodeError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DecodeError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| DecodeError::Docx(e.to_string()))?;

    let document =
        roxmltree::Document::parse(&xml).map_err(|e| DecodeError::Docx(e.to_string()))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for paragraph in document
        .descendants()
        .filter(|n| n.tag_name().name() == "p")
    {
        let mut line = String::new();
        for run in paragraph
            .descendants()
            .filter(|n| n.tag_name().name() == "t")
        {
            if let Some(text) = run.text() {
                line.push_str(text);
            }
        }
        paragraphs.push(line);
    }

    Ok(paragraphs.join("\n"))
}
