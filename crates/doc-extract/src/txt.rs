//! Plain-text decoder

use shared_types::DocumentFormat;

use crate::decoder::{DecodedText, Decoder};
use crate::error::DecodeError;

/// UTF-8 decoder that drops invalid byte sequences instead of replacing them
pub struct TxtDecoder;

impl TxtDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TxtDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for TxtDecoder {
    fn name(&self) -> &'static str {
        "txt"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Txt
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        let mut text = String::with_capacity(data.len());
        for chunk in data.utf8_chunks() {
            text.push_str(chunk.valid());
        }
        Ok(DecodedText::Whole(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_utf8() {
        let decoded = TxtDecoder::new().decode("Rent is €1000.".as_bytes()).unwrap();
        assert_eq!(decoded, DecodedText::Whole("Rent is €1000.".to_string()));
    }

    #[test]
    fn test_drops_invalid_sequences() {
        let decoded = TxtDecoder::new().decode(b"Rent\xff\xfe is due").unwrap();
        assert_eq!(decoded, DecodedText::Whole("Rent is due".to_string()));
    }
}
