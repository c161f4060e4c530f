//! Byte-to-text decoders

use shared_types::DocumentFormat;

use crate::docx::DocxDecoder;
use crate::error::DecodeError;
use crate::pdf::PdfDecoder;
use crate::txt::TxtDecoder;

/// Raw decoder output, before any offset bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedText {
    /// One entry per source page, in page order
    Paged(Vec<String>),
    /// The whole document as a single string
    Whole(String),
}

/// Trait for format decoders
pub trait Decoder {
    /// Decoder identifier
    fn name(&self) -> &'static str;

    /// Format this decoder reads
    fn format(&self) -> DocumentFormat;

    /// Decode raw bytes into text
    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError>;
}

/// Default decoder for a format
pub fn decoder_for(format: DocumentFormat) -> Box<dyn Decoder> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfDecoder::new()),
        DocumentFormat::Docx => Box::new(DocxDecoder::new()),
        DocumentFormat::Txt => Box::new(TxtDecoder::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_for_matches_format() {
        for format in [DocumentFormat::Pdf, DocumentFormat::Docx, DocumentFormat::Txt] {
            assert_eq!(decoder_for(format).format(), format);
        }
    }
}
