//! Analysis report assembly
//!
//! Joins the extracted document with the findings returned by the text
//! model: overall risk, retained tags, size label and highlight ranges.

use annotation_engine::{overall_severity, retain_tags, SnippetLocator};
use doc_extract::OffsetExtractor;
use shared_types::{AnalysisReport, Document, Findings, Limits};
use tracing::{debug, info};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::upload::Upload;

/// Human-readable upload size, `"{kb} KB"` with kb rounded half to even
pub fn format_size(byte_len: usize) -> String {
    let kb = (byte_len as f64 / 1024.0).round_ties_even();
    format!("{} KB", kb as u64)
}

/// Parse the findings JSON returned by the text model
pub fn parse_findings(json: &str) -> Result<Findings, ServiceError> {
    let findings: Findings = serde_json::from_str(json)?;
    Ok(findings)
}

#[derive(Debug, Clone)]
pub struct AnalysisService {
    extractor: OffsetExtractor,
    locator: SnippetLocator,
    limits: Limits,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

impl AnalysisService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            extractor: OffsetExtractor::new(config.limits),
            locator: SnippetLocator::new(&config.limits),
            limits: config.limits,
        }
    }

    /// Extract the text the model will be asked to analyze
    pub fn extract(&self, upload: &Upload) -> Result<Document, ServiceError> {
        let document = self
            .extractor
            .extract_file(&upload.filename, &upload.bytes)?;
        info!(
            "Extracted {} ({} pages, {} bytes)",
            upload.filename, document.page_count, document.byte_len
        );
        Ok(document)
    }

    /// Extract an upload and assemble its report from the model findings
    pub fn analyze(&self, upload: &Upload, findings: Findings) -> Result<AnalysisReport, ServiceError> {
        let document = self.extract(upload)?;
        Ok(self.report(document, findings))
    }

    /// Assemble a report for an already extracted document
    pub fn report(&self, document: Document, findings: Findings) -> AnalysisReport {
        let risk_level = overall_severity(&findings.risks);
        let tags = retain_tags(&findings.tags, self.limits.max_tags);
        let highlights = self.locator.locate(
            &document.text,
            &findings.obligations,
            &findings.risks,
            &findings.clauses,
        );

        // Only paginated formats expose their offsets to clients.
        let page_offsets = if document.format.is_paginated() {
            document.page_offsets
        } else {
            Vec::new()
        };

        debug!(
            "Report: risk level {:?}, {} tags, {} highlights",
            risk_level,
            tags.len(),
            highlights.len()
        );

        AnalysisReport {
            summary: findings.summary,
            obligations: findings.obligations,
            risks: findings.risks,
            clauses: findings.clauses,
            risk_level,
            tags,
            size: format_size(document.byte_len),
            format: document.format,
            pages: document.page_count,
            analyzed_text: document.text,
            page_offsets,
            highlights,
        }
    }
}
