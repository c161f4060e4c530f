//! Lexiclaire services
//!
//! Assembles the wire-level reports from the extraction, comparison and
//! annotation engines:
//!
//! - [`AnalysisService`]: one upload plus model findings into an [`AnalysisReport`]
//! - [`ComparisonService`]: two uploads into a [`ComparisonReport`]
//! - [`ChatService`]: question, windowed history and document into a prompt
//!
//! Services are built from a [`ServiceConfig`] and hold no state between
//! calls. Text generation stays outside this crate: findings arrive already
//! parsed, and chat prompts are handed to a [`TextGenerator`].

pub mod analysis;
pub mod chat;
pub mod comparison;
pub mod config;
pub mod error;
pub mod upload;

pub use analysis::{format_size, parse_findings, AnalysisService};
pub use chat::{render_turns, window_history, ChatPrompt, ChatRequest, ChatService, TextGenerator};
pub use comparison::ComparisonService;
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use upload::Upload;

pub use shared_types::{AnalysisReport, ComparisonReport, Document, Findings, Limits};
