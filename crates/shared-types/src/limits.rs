//! Hard caps applied while extracting, comparing and annotating documents.
//!
//! Every cap is counted in chars (Unicode scalar values) or in records and is
//! applied deterministically.

/// Default maximum number of chars kept from an extracted document
pub const DEFAULT_MAX_INPUT_CHARS: usize = 60_000;
/// Default maximum length of a highlight snippet
pub const DEFAULT_MAX_SNIPPET_CHARS: usize = 160;
/// Default description length for added/removed changes
pub const DEFAULT_CHANGE_DESCRIPTION_CHARS: usize = 180;
/// Default length of each side of a modified change description
pub const DEFAULT_MODIFIED_SIDE_CHARS: usize = 200;
/// Default maximum number of change records in one comparison
pub const DEFAULT_MAX_CHANGES: usize = 100;
/// Default maximum number of retained tags
pub const DEFAULT_MAX_TAGS: usize = 6;
/// Default number of chat history turns forwarded with a question
pub const DEFAULT_MAX_HISTORY_TURNS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Limits {
    pub max_input_chars: usize,
    pub max_snippet_chars: usize,
    pub change_description_chars: usize,
    pub modified_side_chars: usize,
    pub max_changes: usize,
    pub max_tags: usize,
    pub max_history_turns: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_snippet_chars: DEFAULT_MAX_SNIPPET_CHARS,
            change_description_chars: DEFAULT_CHANGE_DESCRIPTION_CHARS,
            modified_side_chars: DEFAULT_MODIFIED_SIDE_CHARS,
            max_changes: DEFAULT_MAX_CHANGES,
            max_tags: DEFAULT_MAX_TAGS,
            max_history_turns: DEFAULT_MAX_HISTORY_TURNS,
        }
    }
}

impl Limits {
    /// Override the input cap, keeping every other default
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }
}
