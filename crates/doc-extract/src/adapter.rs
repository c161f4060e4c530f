//! Offset extractor adapter
//!
//! Wraps a [`Decoder`] and records where each page begins in the extracted
//! text. Pages are joined with a single `\n`, but `page_offsets[i]` is the sum
//! of the char lengths of pages `0..i` without separators. After layout the
//! whole text is trimmed and prefix-truncated to `max_input_chars`; offsets
//! are left as computed.

use shared_types::text::{char_len, truncate_chars};
use shared_types::{Document, DocumentFormat, Limits};
use tracing::{debug, info};

use crate::decoder::{decoder_for, DecodedText, Decoder};
use crate::error::ExtractError;

const PAGE_SEPARATOR: &str = "\n";

/// Join page texts and compute the char offset where each page begins
pub fn page_layout(pages: &[String]) -> (String, Vec<usize>) {
    let mut offsets = Vec::with_capacity(pages.len());
    let mut total = 0;
    for page in pages {
        offsets.push(total);
        total += char_len(page);
    }
    (pages.join(PAGE_SEPARATOR), offsets)
}

/// Resolve the format of an upload from its file name
pub fn resolve_format(filename: &str) -> Result<DocumentFormat, ExtractError> {
    DocumentFormat::from_filename(filename)
        .ok_or_else(|| ExtractError::UnsupportedFormat(filename.to_string()))
}

/// Decoded text before the empty check and truncation
struct Layout {
    text: String,
    page_offsets: Vec<usize>,
    page_count: usize,
}

/// Produces [`Document`]s from raw upload bytes
#[derive(Debug, Clone, Default)]
pub struct OffsetExtractor {
    limits: Limits,
}

impl OffsetExtractor {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Extract an upload whose format is given by its file name
    pub fn extract_file(&self, filename: &str, data: &[u8]) -> Result<Document, ExtractError> {
        let format = resolve_format(filename)?;
        self.extract(data, format)
    }

    /// Extract with the default decoder, failing on empty text
    pub fn extract(&self, data: &[u8], format: DocumentFormat) -> Result<Document, ExtractError> {
        self.extract_with(decoder_for(format).as_ref(), data)
    }

    /// Extract with the default decoder, allowing an empty result
    pub fn extract_lenient(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<Document, ExtractError> {
        self.extract_lenient_with(decoder_for(format).as_ref(), data)
    }

    /// Extract with a caller-supplied decoder, failing on empty text
    pub fn extract_with(
        &self,
        decoder: &dyn Decoder,
        data: &[u8],
    ) -> Result<Document, ExtractError> {
        let layout = self.layout(decoder, data)?;
        if layout.text.is_empty() {
            return Err(ExtractError::EmptyExtraction);
        }
        Ok(self.finish(decoder.format(), layout, data.len()))
    }

    /// Extract with a caller-supplied decoder, allowing an empty result
    pub fn extract_lenient_with(
        &self,
        decoder: &dyn Decoder,
        data: &[u8],
    ) -> Result<Document, ExtractError> {
        let layout = self.layout(decoder, data)?;
        Ok(self.finish(decoder.format(), layout, data.len()))
    }

    fn layout(&self, decoder: &dyn Decoder, data: &[u8]) -> Result<Layout, ExtractError> {
        let format = decoder.format();
        let decoded = decoder
            .decode(data)
            .map_err(|e| ExtractError::wrap(format, e))?;

        let (text, page_offsets, page_count) = match decoded {
            DecodedText::Paged(pages) => {
                let (text, offsets) = page_layout(&pages);
                (text, offsets, pages.len())
            }
            DecodedText::Whole(text) => (text, vec![0], 1),
        };

        debug!(
            "{} decoder produced {} chars over {} pages",
            decoder.name(),
            char_len(&text),
            page_count
        );

        Ok(Layout {
            text: text.trim().to_string(),
            page_offsets,
            page_count,
        })
    }

    fn finish(&self, format: DocumentFormat, layout: Layout, byte_len: usize) -> Document {
        let max = self.limits.max_input_chars;
        let text = if char_len(&layout.text) > max {
            info!("Truncated {} text to {} chars", format, max);
            truncate_chars(&layout.text, max).to_string()
        } else {
            layout.text
        };

        Document {
            format,
            text,
            page_offsets: layout.page_offsets,
            page_count: layout.page_count,
            byte_len,
        }
    }
}
