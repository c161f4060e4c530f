//! Offset-aware text extraction
//!
//! Turns uploaded bytes into a [`Document`]: the extracted text plus the char
//! offset at which every source page begins. Byte decoding is delegated to a
//! [`Decoder`] per format:
//!
//! | Format | Decoder | Output |
//! |--------|---------|--------|
//! | PDF | [`PdfDecoder`] (lopdf) | one string per page |
//! | DOCX | [`DocxDecoder`] (zip + quick-xml) | body paragraphs joined by `\n` |
//! | TXT | [`TxtDecoder`] | UTF-8, invalid sequences dropped |
//!
//! The [`OffsetExtractor`] owns the bookkeeping: page offsets, whole-text trim,
//! the empty-text check and prefix truncation.

pub mod adapter;
pub mod decoder;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod txt;

pub use adapter::{page_layout, OffsetExtractor};
pub use decoder::{decoder_for, DecodedText, Decoder};
pub use docx::DocxDecoder;
pub use error::{DecodeError, ExtractError};
pub use pdf::PdfDecoder;
pub use txt::TxtDecoder;

pub use shared_types::{Document, DocumentFormat};
