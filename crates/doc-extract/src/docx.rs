//! DOCX decoder
//!
//! A DOCX file is a ZIP archive; the body lives in `word/document.xml` as
//! WordprocessingML. Only paragraphs that are direct children of `w:body`
//! are read, so table cells and headers are skipped. A paragraph's text is
//! made of its runs (`w:r` children of the paragraph or of a `w:hyperlink`
//! in it). Runs nested in revision marks or drawings are not read. Within a
//! run:
//!
//! - `w:t` contributes its text
//! - `w:tab` and `w:ptab` become `\t`
//! - `w:cr` and text-wrapping `w:br` become `\n`; page and column breaks
//!   contribute nothing
//! - `w:noBreakHyphen` becomes `-`
//!
//! Paragraphs are joined with a single `\n`.

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use shared_types::DocumentFormat;
use tracing::debug;

use crate::decoder::{DecodedText, Decoder};
use crate::error::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX decoder producing the body text as a single string
pub struct DocxDecoder;

impl DocxDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for DocxDecoder {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| DecodeError::Parse(format!("Failed to read DOCX as ZIP: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| DecodeError::MissingPart(DOCUMENT_PART.to_string()))?
            .read_to_string(&mut xml)
            .map_err(|e| DecodeError::Read(e.to_string()))?;

        let paragraphs = body_paragraphs(&xml)?;
        debug!("Decoded {} DOCX body paragraphs", paragraphs.len());
        Ok(DecodedText::Whole(paragraphs.join("\n")))
    }
}

/// Collect the text of every paragraph directly under `w:body`
pub fn body_paragraphs(xml: &str) -> Result<Vec<String>, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();

    // Stack depth of the body paragraph and of the run being read, if any
    let mut paragraph_depth: Option<usize> = None;
    let mut run_depth: Option<usize> = None;
    let mut in_text = false;
    let mut current = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DecodeError::Parse(format!("Malformed document.xml: {}", e)))?;

        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match paragraph_depth {
                    None if name == b"p" && is_top(&open, b"body") => {
                        paragraph_depth = Some(open.len());
                        current.clear();
                    }
                    Some(p) if name == b"r" && is_paragraph_run(&open, p) => {
                        run_depth = Some(open.len());
                    }
                    _ => {}
                }
                if run_depth.is_some_and(|r| open.len() == r + 1) {
                    if name == b"t" {
                        in_text = true;
                    } else if let Some(s) = run_child_text(&e) {
                        current.push_str(s);
                    }
                }
                open.push(name);
            }
            Event::Empty(e) => {
                if run_depth.is_some_and(|r| open.len() == r + 1) {
                    if let Some(s) = run_child_text(&e) {
                        current.push_str(s);
                    }
                } else if paragraph_depth.is_none()
                    && e.local_name().as_ref() == b"p"
                    && is_top(&open, b"body")
                {
                    paragraphs.push(String::new());
                }
            }
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| DecodeError::Parse(format!("Bad text run: {}", e)))?;
                current.push_str(&text);
            }
            Event::CData(t) if in_text => {
                current.push_str(&String::from_utf8_lossy(&t.into_inner()));
            }
            Event::End(e) => {
                open.pop();
                let depth = Some(open.len());
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"r" if run_depth == depth => run_depth = None,
                    b"p" if paragraph_depth == depth => {
                        paragraphs.push(std::mem::take(&mut current));
                        paragraph_depth = None;
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_top(open: &[Vec<u8>], name: &[u8]) -> bool {
    open.last().map(Vec::as_slice) == Some(name)
}

/// A run directly in the paragraph at `depth`, or in one of its hyperlinks
fn is_paragraph_run(open: &[Vec<u8>], depth: usize) -> bool {
    open.len() == depth + 1 || (open.len() == depth + 2 && is_top(open, b"hyperlink"))
}

/// Text contributed by a non-`w:t` child of a run
fn run_child_text(e: &BytesStart) -> Option<&'static str> {
    match e.local_name().as_ref() {
        b"tab" | b"ptab" => Some("\t"),
        b"cr" => Some("\n"),
        b"br" => {
            let kind = e
                .attributes()
                .flatten()
                .find(|a| a.key.local_name().as_ref() == b"type")
                .map(|a| a.value.into_owned());
            match kind.as_deref() {
                None | Some(b"textWrapping") => Some("\n"),
                Some(_) => None,
            }
        }
        b"noBreakHyphen" => Some("-"),
        _ => None,
    }
}
