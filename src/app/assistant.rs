use crate::domain::model::DesignSuggestion;
use serde::Serialize;

/// Local state of the design-assistant widget.
///
/// A submit only goes to the network when the trimmed prompt is non-empty and
/// no request is already in flight. A failed request leaves the previous
/// suggestion in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignAssistantSession {
    prompt: String,
    loading: bool,
    suggestion: Option<DesignSuggestion>,
}

impl DesignAssistantSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn suggestion(&self) -> Option<&DesignSuggestion> {
        self.suggestion.as_ref()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Starts a request. Returns the prompt to send, or `None` when the submit
    /// short-circuits (blank prompt, or a request already pending), in which
    /// case the loading flag is untouched.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        let trimmed = self.prompt.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.loading = true;
        Some(trimmed.to_string())
    }

    pub fn complete_success(&mut self, suggestion: DesignSuggestion) {
        self.suggestion = Some(suggestion);
        self.loading = false;
    }

    pub fn complete_failure(&mut self) {
        self.loading = false;
    }
}
