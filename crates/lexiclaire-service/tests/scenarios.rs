//! End-to-end scenarios across extraction, comparison and annotation

use std::io::{Cursor, Write};

use lexiclaire_service::{
    AnalysisService, ChatRequest, ChatService, ComparisonService, Findings, ServiceConfig, Upload,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shared_types::{ChangeType, DocumentFormat, HighlightKind, Severity};

const FINDINGS_JSON: &str = r#"{
    "summary": "Residential lease with a monthly rent obligation.",
    "obligations": [
        {"text": "shall pay rent monthly", "clause": "Rent"}
    ],
    "risks": [
        {"text": "Late payment incurs a 10% fee", "clause": "Fees", "severity": "medium"},
        {"text": "Landlord may terminate without notice", "clause": "Termination", "severity": "high"}
    ],
    "clauses": [
        {"name": "Governing law", "status": "standard", "description": ""},
        {"name": "Termination", "status": "restrictive", "description": "either party may terminate"}
    ],
    "tags": ["lease", "rent", "lease", "fees", "termination", "residential", "notice", "deposit"]
}"#;

const LEASE: &str = "The tenant shall pay rent monthly. Late payment incurs a 10% fee.\n\n\
Either party may terminate with 30 days notice.\n\nGoverning law is Ontario.";

fn docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut buf = Vec::new();
    {
        let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    buf
}

#[test]
fn analyze_lease_from_findings_json() {
    let findings: Findings = serde_json::from_str(FINDINGS_JSON).unwrap();
    let upload = Upload::new("lease.txt", LEASE);
    let report = AnalysisService::default().analyze(&upload, findings).unwrap();

    assert_eq!(report.format, DocumentFormat::Txt);
    assert_eq!(report.risk_level, Severity::High);
    assert_eq!(
        report.tags,
        vec!["lease", "rent", "fees", "termination", "residential", "notice"]
    );

    let located: Vec<(HighlightKind, usize, usize)> = report
        .highlights
        .iter()
        .map(|h| (h.kind, h.range_start, h.range_end))
        .collect();
    assert_eq!(
        located,
        vec![
            (HighlightKind::Obligation, 11, 33),
            (HighlightKind::Risk, 35, 64),
            (HighlightKind::Clause, 116, 129),
            (HighlightKind::Clause, 67, 93),
        ]
    );

    for h in &report.highlights {
        let covered: String = report
            .analyzed_text
            .chars()
            .skip(h.range_start)
            .take(h.range_end - h.range_start)
            .collect();
        assert_eq!(covered.to_lowercase(), h.text.to_lowercase());
    }
}

#[test]
fn analysis_report_wire_shape() {
    let findings: Findings = serde_json::from_str(FINDINGS_JSON).unwrap();
    let upload = Upload::new("lease.txt", LEASE);
    let report = AnalysisService::default().analyze(&upload, findings).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["riskLevel"], "high");
    assert_eq!(json["type"], "txt");
    assert_eq!(json["size"], "0 KB");
    assert_eq!(json["pageOffsets"], serde_json::json!([]));
    assert_eq!(json["highlights"][0]["rangeStart"], 11);
    assert_eq!(json["highlights"][0]["kind"], "obligation");
    assert_eq!(json["highlights"][2]["clause"], serde_json::Value::Null);
}

#[test]
fn compare_docx_versions() {
    let a = Upload::new(
        "lease-v1.docx",
        docx(&["Parties", "", "Rent is 500 per month.", "", "Term is 12 months."]),
    );
    let b = Upload::new(
        "lease-v2.docx",
        docx(&[
            "Parties",
            "",
            "Rent is 650 per month.",
            "",
            "Term is 12 months.",
            "",
            "Pets are not allowed.",
        ]),
    );
    let report = ComparisonService::default().compare(&a, &b).unwrap();

    assert_eq!(report.version_a.title, "lease-v1.docx");
    assert_eq!(report.version_b.title, "lease-v2.docx");
    assert_eq!(
        report.version_a.content,
        "Parties\n\nRent is 500 per month.\n\nTerm is 12 months."
    );

    let kinds: Vec<(ChangeType, &str)> = report
        .changes
        .iter()
        .map(|c| (c.change_type, c.section.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (ChangeType::Modified, "Sections 2-2"),
            (ChangeType::Added, "Section 4"),
        ]
    );
    assert_eq!(
        report.changes[0].description,
        "Changed from: “Rent is 500 per month.” → “Rent is 650 per month.”."
    );
    assert_eq!(report.changes[1].description, "Pets are not allowed.");
}

#[test]
fn compare_against_empty_version() {
    let a = Upload::new("draft.docx", docx(&[""]));
    let b = Upload::new("final.txt", "Clause one\n\nClause two\n\nClause three");
    let report = ComparisonService::default().compare(&a, &b).unwrap();

    assert_eq!(report.changes.len(), 3);
    assert!(report
        .changes
        .iter()
        .all(|c| c.change_type == ChangeType::Added));
}

#[test]
fn chat_prompt_over_analyzed_text() {
    let config = ServiceConfig::default();
    let request: ChatRequest = serde_json::from_str(
        r#"{
            "question": "Can the landlord terminate early?",
            "history": [
                {"type": "user", "content": "What is the rent?"},
                {"type": "ai", "content": "It is paid monthly."}
            ],
            "documentId": "lease-1",
            "analyzedText": "Either party may terminate with 30 days notice."
        }"#,
    )
    .unwrap();

    let prompt = ChatService::new(&config).build_prompt(&request).render();
    assert!(prompt.contains("DOCUMENT:\nEither party may terminate with 30 days notice."));
    assert!(prompt.contains("HISTORY:\nUSER: What is the rent?\nAI: It is paid monthly."));
    assert!(prompt.ends_with("QUESTION:\nCan the landlord terminate early?"));
}

proptest! {
    #[test]
    fn highlights_always_cover_their_snippet(
        words in prop::collection::vec("[a-z]{1,6}", 1..30),
        pick in 0usize..30,
        span in 1usize..4,
    ) {
        let text = words.join(" ");
        let start = pick % words.len();
        let end = (start + span).min(words.len());
        let snippet = words[start..end].join(" ").to_uppercase();

        let findings = Findings {
            obligations: vec![shared_types::Obligation { text: snippet.clone(), clause: "C".into() }],
            ..Findings::default()
        };
        let upload = Upload::new("doc.txt", text.clone());
        let report = AnalysisService::default().analyze(&upload, findings).unwrap();

        prop_assert_eq!(report.highlights.len(), 1);
        let h = &report.highlights[0];
        prop_assert_eq!(h.range_end - h.range_start, snippet.chars().count());
        let covered: String = text.chars().skip(h.range_start).take(h.range_end - h.range_start).collect();
        prop_assert_eq!(covered.to_uppercase(), snippet);
    }
}
