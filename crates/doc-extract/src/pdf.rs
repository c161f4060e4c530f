//! PDF decoder using lopdf
//!
//! Text is extracted page by page in page-number order. A page whose content
//! stream cannot be decoded yields an empty string so that later pages keep
//! their position; only an unreadable container fails the whole decode.

use lopdf::Document;
use shared_types::DocumentFormat;
use tracing::{debug, warn};

use crate::decoder::{DecodedText, Decoder};
use crate::error::DecodeError;

/// PDF decoder producing one string per page
pub struct PdfDecoder;

impl PdfDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Extract per-page text from an already parsed document
    pub fn decode_document(&self, doc: &Document) -> Vec<String> {
        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        // BTreeMap keys iterate in page-number order
        for &page_num in pages.keys() {
            match doc.extract_text(&[page_num]) {
                Ok(text) => texts.push(text),
                Err(e) => {
                    warn!("Page {} yielded no text: {}", page_num, e);
                    texts.push(String::new());
                }
            }
        }

        debug!("Decoded {} PDF pages", texts.len());
        texts
    }
}

impl Default for PdfDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for PdfDecoder {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        let doc = Document::load_mem(data).map_err(|e| DecodeError::Parse(e.to_string()))?;
        Ok(DecodedText::Paged(self.decode_document(&doc)))
    }
}
