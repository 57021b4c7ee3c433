use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const MAX_HISTORY_SIZE: usize = 10;

/// Who said a line in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Agent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Entry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Bounded window of recent conversation. Externally owned: the pipeline
/// reads snapshots from it and never writes back.
#[derive(Debug, Clone)]
pub struct ConversationState {
    entries: VecDeque<Entry>,
    max_size: usize,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::with_max_size(MAX_HISTORY_SIZE)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    pub fn record(&mut self, entry: Entry) {
        if self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn record_user(&mut self, content: impl Into<String>) {
        self.record(Entry::user(content));
    }

    pub fn record_agent(&mut self, content: impl Into<String>) {
        self.record(Entry::agent(content));
    }

    /// Copy of this state with one more user line appended. This is how the
    /// dispatcher folds the incoming message into the context without
    /// mutating the caller's state.
    pub fn snapshot_with(&self, message: &str) -> ConversationState {
        let mut snapshot = self.clone();
        snapshot.record_user(message);
        snapshot
    }

    /// Render the window for splicing into an extraction prompt.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.entries.is_empty() {
            out.push_str(&format!(
                "Recent conversation (last {} messages):\n",
                self.entries.len()
            ));
            for (i, entry) in self.entries.iter().enumerate() {
                let speaker = match entry.speaker {
                    Speaker::User => "User",
                    Speaker::Agent => "Agent",
                };
                out.push_str(&format!("{}. [{}]: {}\n", i + 1, speaker, entry.content));
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_eviction() {
        let mut state = ConversationState::with_max_size(3);

        state.record_user("Message 1");
        state.record_agent("Response 1");
        state.record_user("Message 2");
        assert_eq!(state.len(), 3);

        // A 4th entry evicts the oldest
        state.record_agent("Response 2");
        assert_eq!(state.len(), 3);
        assert!(!state.render().contains("Message 1"));
        assert!(state.render().contains("Response 2"));
    }

    #[test]
    fn test_snapshot_leaves_original_untouched() {
        let mut state = ConversationState::new();
        state.record_user("register an agent");

        let snapshot = state.snapshot_with("call it Pizza");
        assert_eq!(state.len(), 1);
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.render().contains("Pizza"));
    }

    #[test]
    fn test_render_contains_speakers() {
        let mut state = ConversationState::new();
        state.record_user("submit a vote");
        state.record_agent("Vote submitted successfully");

        let rendered = state.render();
        assert!(rendered.contains("[User]"));
        assert!(rendered.contains("[Agent]"));
        assert!(rendered.contains("submit a vote"));
    }
}
