//! Snippet locator
//!
//! Finds the first case-insensitive occurrence of each model-identified
//! snippet in the analyzed text and reports it as a char range. Candidates are
//! visited in order (obligations, then risks, then clauses); snippets that are
//! blank or not found are skipped. Overlapping highlights are kept as is.
//!
//! Which field supplies the snippet depends on the candidate kind:
//!
//! | Kind | Snippet | Clause label |
//! |------|---------|--------------|
//! | Obligation | `text` | `clause` |
//! | Risk | `text` | `clause` |
//! | Clause | `description`, else `name` | none |

use shared_types::text::truncate_chars;
use shared_types::{Clause, Highlight, HighlightKind, Limits, Obligation, Risk};
use tracing::debug;

/// Something the model flagged that can be highlighted in the source text
pub trait Annotatable {
    fn kind(&self) -> HighlightKind;

    /// Text to search for, if this candidate has one
    fn snippet(&self) -> Option<&str>;

    /// Clause label carried onto the highlight
    fn clause_label(&self) -> Option<&str>;
}

impl Annotatable for Obligation {
    fn kind(&self) -> HighlightKind {
        HighlightKind::Obligation
    }

    fn snippet(&self) -> Option<&str> {
        non_empty(&self.text)
    }

    fn clause_label(&self) -> Option<&str> {
        Some(&self.clause)
    }
}

impl Annotatable for Risk {
    fn kind(&self) -> HighlightKind {
        HighlightKind::Risk
    }

    fn snippet(&self) -> Option<&str> {
        non_empty(&self.text)
    }

    fn clause_label(&self) -> Option<&str> {
        Some(&self.clause)
    }
}

impl Annotatable for Clause {
    fn kind(&self) -> HighlightKind {
        HighlightKind::Clause
    }

    fn snippet(&self) -> Option<&str> {
        non_empty(&self.description).or_else(|| non_empty(&self.name))
    }

    fn clause_label(&self) -> Option<&str> {
        None
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Lower-case a single char without changing the char count
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Analyzed text folded once for repeated case-insensitive searches
pub struct FoldedText {
    chars: Vec<char>,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().map(fold).collect(),
        }
    }

    /// Char index of the first case-insensitive occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        let needle: Vec<char> = needle.chars().map(fold).collect();
        if needle.is_empty() || needle.len() > self.chars.len() {
            return None;
        }
        self.chars
            .windows(needle.len())
            .position(|window| window == needle.as_slice())
    }
}

/// Maps candidate snippets onto char ranges of the analyzed text
#[derive(Debug, Clone)]
pub struct SnippetLocator {
    max_snippet_chars: usize,
}

impl Default for SnippetLocator {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl SnippetLocator {
    pub fn new(limits: &Limits) -> Self {
        Self {
            max_snippet_chars: limits.max_snippet_chars,
        }
    }

    /// Highlights for obligations, then risks, then clauses
    pub fn locate(
        &self,
        text: &str,
        obligations: &[Obligation],
        risks: &[Risk],
        clauses: &[Clause],
    ) -> Vec<Highlight> {
        let folded = FoldedText::new(text);
        let candidates = obligations
            .iter()
            .map(|o| o as &dyn Annotatable)
            .chain(risks.iter().map(|r| r as &dyn Annotatable))
            .chain(clauses.iter().map(|c| c as &dyn Annotatable));

        let highlights: Vec<Highlight> = candidates
            .filter_map(|candidate| self.locate_one(&folded, candidate))
            .collect();

        debug!(
            "Located {} of {} candidate snippets",
            highlights.len(),
            obligations.len() + risks.len() + clauses.len()
        );
        highlights
    }

    fn locate_one(&self, folded: &FoldedText, candidate: &dyn Annotatable) -> Option<Highlight> {
        let snippet = truncate_chars(candidate.snippet()?.trim(), self.max_snippet_chars);
        let start = folded.find(snippet)?;
        Some(Highlight {
            kind: candidate.kind(),
            clause: candidate.clause_label().map(str::to_string),
            text: snippet.to_string(),
            range_start: start,
            range_end: start + snippet.chars().count(),
        })
    }
}
