use crate::errors::AppError;

/// Extracts concatenated page text from raw PDF bytes.
///
/// An image-only or blank PDF yields an empty string — that is "nothing to
/// extract", not an error at this layer; the handler decides how to surface
/// it. A PDF the parser cannot read at all is a client-side input error.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Input(format!("could not read PDF: {e}")))
}
