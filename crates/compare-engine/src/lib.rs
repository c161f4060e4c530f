//! Section-level comparison of two document versions
//!
//! Pipeline: [`segmenter::segment`] both texts into sections,
//! [`aligner::align`] the section sequences, then
//! [`synthesizer::synthesize`] the opcodes into change records.

pub mod aligner;
pub mod segmenter;
pub mod synthesizer;

pub use aligner::{align, Match, SequenceMatcher};
pub use segmenter::segment;
pub use synthesizer::{synthesize, ADDED_IMPACT, MODIFIED_IMPACT, REMOVED_IMPACT};

use shared_types::{Change, Limits, Side};
use tracing::debug;

/// CompareEngine entry point
#[derive(Debug, Clone, Default)]
pub struct CompareEngine {
    limits: Limits,
}

impl CompareEngine {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Diff two document texts section by section
    pub fn compare_texts(&self, a: &str, b: &str) -> Vec<Change> {
        let sections_a = segment(a, Side::A);
        let sections_b = segment(b, Side::B);
        let ops = align(&sections_a, &sections_b);
        let changes = synthesize(&ops, &sections_a, &sections_b, &self.limits);
        debug!(
            "Compared {} and {} sections: {} changes",
            sections_a.len(),
            sections_b.len(),
            changes.len()
        );
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ChangeType;

    #[test]
    fn test_engine_detects_modification() {
        let engine = CompareEngine::default();
        let changes = engine.compare_texts(
            "Rent is $1000.\n\nDeposit is $500.",
            "Rent is $1200.\n\nDeposit is $500.",
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Modified);
        assert_eq!(changes[0].section, "Sections 1-1");
    }

    #[test]
    fn test_engine_honours_change_cap() {
        let limits = Limits {
            max_changes: 2,
            ..Limits::default()
        };
        let engine = CompareEngine::new(limits);
        let changes = engine.compare_texts("", "One.\n\nTwo.\n\nThree.");
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_engine_on_empty_texts() {
        assert!(CompareEngine::default().compare_texts("", "").is_empty());
    }
}
