//! AI Life Coach & Wealth Assistant
//!
//! A rule-driven coaching agent that:
//! - Classifies free-text messages into coaching intents
//! - Derives an emotional assessment from device context signals
//! - Ranks money-making opportunities against the user profile
//! - Assembles structured multi-section text responses per intent
//! - Tracks session progress counters for daily reporting
//!
//! PIPELINE:
//! MESSAGE → CLASSIFY → (ANALYZE and/or RANK) → COMPOSE → REPLY

pub mod agent;
pub mod analyzer;
pub mod classifier;
pub mod composer;
pub mod error;
pub mod memory;
pub mod models;
pub mod providers;
pub mod ranker;
pub mod state;

pub use error::Result;

// Re-export common types
pub use agent::{LifeCoach, DEFAULT_DAILY_TARGET};
pub use classifier::IntentClassifier;
pub use models::*;
