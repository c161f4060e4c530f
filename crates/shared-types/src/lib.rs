pub mod limits;
pub mod text;
pub mod types;

pub use limits::Limits;
pub use types::{
    AnalysisReport, Change, ChangeType, ChatMessage, Clause, ClauseStatus,
    ComparisonReport, Document, DocumentFormat, Findings, Highlight, HighlightKind, Obligation,
    OpTag, Opcode, Risk, Section, Severity, Side, Speaker, VersionContent,
};
