use super::DecodeError;

/// Extracts the text layer from a PDF byte buffer. Image-only (scanned)
/// documents come back empty and are rejected by the caller's emptiness
/// check.
pub fn extract_text(bytes: &[u8]) -> Result<String, DecodeError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| DecodeError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(matches!(
            extract_text(b"definitely not a pdf"),
            Err(DecodeError::Pdf(_))
        ));
    }
}
