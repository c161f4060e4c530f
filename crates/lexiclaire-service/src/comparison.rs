//! Comparison report assembly

use compare_engine::CompareEngine;
use doc_extract::adapter::resolve_format;
use doc_extract::{ExtractError, OffsetExtractor};
use shared_types::{ComparisonReport, VersionContent};
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::upload::Upload;

pub const DEFAULT_TITLE_A: &str = "Version A";
pub const DEFAULT_TITLE_B: &str = "Version B";

#[derive(Debug, Clone)]
pub struct ComparisonService {
    extractor: OffsetExtractor,
    engine: CompareEngine,
}

impl Default for ComparisonService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

impl ComparisonService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            extractor: OffsetExtractor::new(config.limits),
            engine: CompareEngine::new(config.limits),
        }
    }

    /// Compare two uploaded versions of a document
    ///
    /// Either side may extract to empty text, in which case every section of
    /// the other side is reported as added or removed. Only two empty sides
    /// are an error.
    pub fn compare(&self, a: &Upload, b: &Upload) -> Result<ComparisonReport, ServiceError> {
        let text_a = self.extract_text(a)?;
        let text_b = self.extract_text(b)?;
        if text_a.is_empty() && text_b.is_empty() {
            return Err(ExtractError::EmptyExtraction.into());
        }

        let changes = self.engine.compare_texts(&text_a, &text_b);
        info!(
            "Compared {} with {}: {} changes",
            a.filename,
            b.filename,
            changes.len()
        );

        Ok(ComparisonReport {
            version_a: VersionContent {
                title: title_or(&a.filename, DEFAULT_TITLE_A),
                content: text_a,
            },
            version_b: VersionContent {
                title: title_or(&b.filename, DEFAULT_TITLE_B),
                content: text_b,
            },
            changes,
        })
    }

    fn extract_text(&self, upload: &Upload) -> Result<String, ServiceError> {
        let format = resolve_format(&upload.filename)?;
        let document = self.extractor.extract_lenient(&upload.bytes, format)?;
        Ok(document.text)
    }
}

fn title_or(filename: &str, default: &str) -> String {
    if filename.is_empty() {
        default.to_string()
    } else {
        filename.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ChangeType;

    #[test]
    fn test_compare_txt_versions() {
        let a = Upload::new("v1.txt", "Intro\n\nRent is 500\n\nTerm 12 months");
        let b = Upload::new("v2.txt", "Intro\n\nRent is 650\n\nTerm 12 months");
        let report = ComparisonService::default().compare(&a, &b).unwrap();

        assert_eq!(report.version_a.title, "v1.txt");
        assert_eq!(report.version_b.content, "Intro\n\nRent is 650\n\nTerm 12 months");
        assert_eq!(report.changes.len(), 1);
        assert_eq!(report.changes[0].change_type, ChangeType::Modified);
        assert_eq!(report.changes[0].section, "Sections 2-2");
    }

    #[test]
    fn test_identical_versions_have_no_changes() {
        let a = Upload::new("a.txt", "Same\n\nText");
        let report = ComparisonService::default().compare(&a, &a.clone()).unwrap();
        assert!(report.changes.is_empty());
    }

    #[test]
    fn test_one_empty_side_is_allowed() {
        let a = Upload::new("a.txt", "   ");
        let b = Upload::new("b.txt", "First\n\nSecond");
        let report = ComparisonService::default().compare(&a, &b).unwrap();

        assert_eq!(report.version_a.content, "");
        assert_eq!(report.changes.len(), 2);
        assert!(report
            .changes
            .iter()
            .all(|c| c.change_type == ChangeType::Added));
    }

    #[test]
    fn test_both_empty_sides_fail() {
        let a = Upload::new("a.txt", "");
        let b = Upload::new("b.txt", "\n\n");
        let err = ComparisonService::default().compare(&a, &b).unwrap_err();
        assert_eq!(err.code(), "EMPTY_EXTRACTION");
    }

    #[test]
    fn test_unsupported_side_fails() {
        let a = Upload::new("a.txt", "text");
        let b = Upload::new("b.rtf", "text");
        let err = ComparisonService::default().compare(&a, &b).unwrap_err();
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
        assert!(err.to_string().contains("b.rtf"));
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(title_or("", DEFAULT_TITLE_A), "Version A");
        assert_eq!(title_or("lease.pdf", DEFAULT_TITLE_B), "lease.pdf");
    }
}
