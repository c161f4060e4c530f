//! Subcommand implementations
//!
//! Each command reads its inputs from disk, runs one service and returns the
//! text to print.

use std::path::Path;

use anyhow::Context;
use lexiclaire_service::{
    parse_findings, AnalysisService, ChatRequest, ChatService, ComparisonService, Document,
    ServiceConfig, Upload,
};
use serde::Serialize;
use shared_types::{ChatMessage, DocumentFormat};
use tracing::info;

/// JSON shape printed by `extract`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOutput {
    #[serde(rename = "type")]
    pub format: DocumentFormat,
    pub pages: usize,
    pub page_offsets: Vec<usize>,
    pub text: String,
}

impl From<Document> for ExtractOutput {
    fn from(document: Document) -> Self {
        Self {
            format: document.format,
            pages: document.page_count,
            page_offsets: document.page_offsets,
            text: document.text,
        }
    }
}

pub fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Upload::new(filename, bytes))
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn parse_history(json: &str) -> anyhow::Result<Vec<ChatMessage>> {
    serde_json::from_str(json).context("History JSON must be a list of {type, content} messages")
}

pub fn extract(config: &ServiceConfig, path: &Path, pretty: bool) -> anyhow::Result<String> {
    let upload = read_upload(path)?;
    let document = AnalysisService::new(config).extract(&upload)?;
    to_json(&ExtractOutput::from(document), pretty)
}

pub fn compare(
    config: &ServiceConfig,
    path_a: &Path,
    path_b: &Path,
    pretty: bool,
) -> anyhow::Result<String> {
    let a = read_upload(path_a)?;
    let b = read_upload(path_b)?;
    let report = ComparisonService::new(config).compare(&a, &b)?;
    to_json(&report, pretty)
}

pub fn analyze(
    config: &ServiceConfig,
    path: &Path,
    findings_path: &Path,
    pretty: bool,
) -> anyhow::Result<String> {
    let upload = read_upload(path)?;
    let raw = std::fs::read_to_string(findings_path)
        .with_context(|| format!("Failed to read {}", findings_path.display()))?;
    let findings = parse_findings(&raw)
        .with_context(|| format!("{} does not match the findings schema", findings_path.display()))?;

    let report = AnalysisService::new(config).analyze(&upload, findings)?;
    info!(
        "Analyzed {}: risk level {:?}, {} highlights",
        upload.filename,
        report.risk_level,
        report.highlights.len()
    );
    to_json(&report, pretty)
}

pub fn chat_prompt(
    config: &ServiceConfig,
    path: &Path,
    question: String,
    history_path: Option<&Path>,
) -> anyhow::Result<String> {
    let upload = read_upload(path)?;
    let document = AnalysisService::new(config).extract(&upload)?;

    let history = match history_path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read {}", p.display()))?;
            parse_history(&raw)?
        }
        None => Vec::new(),
    };

    let request = ChatRequest {
        question,
        history,
        document_id: upload.filename,
        analyzed_text: document.text,
    };
    Ok(ChatService::new(config).build_prompt(&request).render())
}
