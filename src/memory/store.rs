//! Session transcript and mood history storage
//!
//! Everything lives for the lifetime of one coaching session; nothing
//! is persisted across process restarts.

use crate::models::{ChatMessage, Context, Intent, MessageRole, MoodEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::io::Write;
use uuid::Uuid;

/// Read-only projection of session activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionStats {
    pub message_count: usize,
    pub mood_entry_count: usize,
    pub latest_emotion: Option<String>,
    pub opportunities_surfaced: u32,
}

/// Per-session store for transcript and mood entries.
#[derive(Debug)]
pub struct SessionStore {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    messages: VecDeque<ChatMessage>,
    mood_entries: Vec<MoodEntry>,
    opportunities_surfaced: u32,
}

impl SessionStore {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            messages: VecDeque::new(),
            mood_entries: Vec::new(),
            opportunities_surfaced: 0,
        }
    }

    /// Record one full exchange: the user message and the assistant reply.
    pub fn record_exchange(&mut self, user_content: &str, reply: &str, intent: Intent) {
        self.push_message(MessageRole::User, user_content, Some(intent));
        self.push_message(MessageRole::Assistant, reply, Some(intent));
    }

    fn push_message(&mut self, role: MessageRole, content: &str, intent: Option<Intent>) {
        self.messages.push_back(ChatMessage {
            message_id: Uuid::new_v4(),
            role,
            content: content.to_string(),
            intent,
            timestamp: Utc::now(),
        });
        self.updated_at = Utc::now();
    }

    /// Record a mood entry captured alongside an emotional analysis.
    pub fn record_mood(&mut self, context: &Context, primary_emotion: &str) {
        self.mood_entries.push(MoodEntry {
            entry_id: Uuid::new_v4(),
            energy_level: context.energy_level,
            stress_level: context.stress_level,
            primary_emotion: primary_emotion.to_string(),
            timestamp: Utc::now(),
        });
        self.updated_at = Utc::now();
    }

    pub fn note_opportunities_surfaced(&mut self, count: u32) {
        self.opportunities_surfaced += count;
        self.updated_at = Utc::now();
    }

    /// Iterate over the full transcript
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Iterate over the N most recent messages, newest first
    pub fn recent_messages(&self, count: usize) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().rev().take(count)
    }

    pub fn mood_history(&self) -> &[MoodEntry] {
        &self.mood_entries
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Stats projection for reporting. Pure read; never mutates.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.messages.len(),
            mood_entry_count: self.mood_entries.len(),
            latest_emotion: self
                .mood_entries
                .last()
                .map(|entry| entry.primary_emotion.clone()),
            opportunities_surfaced: self.opportunities_surfaced,
        }
    }

    /// SHA256 over the serialized transcript, for integrity checks.
    /// Streams JSON directly into the hasher (no intermediate String).
    pub fn transcript_hash(&self) -> String {
        let mut hasher = Sha256::new();
        let messages: Vec<&ChatMessage> = self.messages.iter().collect();

        if serde_json::to_writer(&mut HashWriter(&mut hasher), &messages).is_err() {
            return String::new();
        }

        hex::encode(hasher.finalize())
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.mood_entries.clear();
        self.opportunities_surfaced = 0;
        self.updated_at = Utc::now();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter to allow writing into Sha256 via std::io::Write
struct HashWriter<'a, H: Digest>(&'a mut H);

impl<'a, H: Digest> Write for HashWriter<'a, H> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_context(stress: u8, energy: u8) -> Context {
        Context {
            current_time: "12:00".to_string(),
            day_of_week: "Tuesday".to_string(),
            recent_app_usage: vec![],
            last_search_queries: vec![],
            mood_indicators: vec![],
            energy_level: energy,
            stress_level: stress,
            has_financial_signal: false,
            has_opportunity_signal: false,
        }
    }

    #[test]
    fn test_record_exchange() {
        let mut store = SessionStore::new();
        store.record_exchange("hello", "hi, how can I help?", Intent::GeneralChat);

        assert_eq!(store.message_count(), 2);
        let roles: Vec<MessageRole> = store.messages().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Assistant]);
    }

    #[test]
    fn test_stats_projection() {
        let mut store = SessionStore::new();
        store.record_exchange("I feel stressed", "let's talk", Intent::EmotionalSupport);
        store.record_mood(&create_test_context(8, 3), "Depressed/Overwhelmed");
        store.note_opportunities_surfaced(3);

        let stats = store.stats();
        assert_eq!(stats.message_count, 2);
        assert_eq!(stats.mood_entry_count, 1);
        assert_eq!(stats.latest_emotion.as_deref(), Some("Depressed/Overwhelmed"));
        assert_eq!(stats.opportunities_surfaced, 3);

        // Projection is pure
        assert_eq!(store.stats(), stats);
    }

    #[test]
    fn test_recent_messages_newest_first() {
        let mut store = SessionStore::new();
        store.record_exchange("first", "reply one", Intent::GeneralChat);
        store.record_exchange("second", "reply two", Intent::GeneralChat);

        let recent: Vec<&str> = store
            .recent_messages(2)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(recent, vec!["reply two", "second"]);
    }

    #[test]
    fn test_transcript_hash_changes_with_content() {
        let mut store = SessionStore::new();
        let empty_hash = store.transcript_hash();
        assert_eq!(empty_hash, store.transcript_hash());

        store.record_exchange("hello", "hi", Intent::GeneralChat);
        assert_ne!(store.transcript_hash(), empty_hash);
    }

    #[test]
    fn test_clear() {
        let mut store = SessionStore::new();
        store.record_exchange("a", "b", Intent::GeneralChat);
        store.record_mood(&create_test_context(5, 5), "Cautiously Optimistic");
        store.clear();

        assert_eq!(store.message_count(), 0);
        assert!(store.mood_history().is_empty());
        assert_eq!(store.stats().opportunities_surfaced, 0);
    }
}
