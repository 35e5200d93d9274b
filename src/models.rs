//! Core data models for the life coach agent

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

//
// ================= Enums =================
//

/// Coarse category a message is routed to before response generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    EmotionalSupport,
    MoneyOpportunities,
    CareerGuidance,
    GeneralChat,
    ComprehensiveLifeCoaching,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

//
// ================= Profile =================
//

/// Complete user profile supplied by the device provider.
/// Immutable once loaded; owned exclusively by the coaching session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub location: String,
    /// Monthly income in naira.
    pub current_income: f64,
    pub career_goals: Vec<String>,
    pub pain_points: Vec<String>,
    pub strengths: Vec<String>,
    /// Monthly income target in naira.
    pub financial_goals: f64,
    pub preferred_work_style: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub daily_routine: HashMap<String, String>,
    pub emotional_state: String,
    /// Stress category → intensity on a 1-10 scale.
    pub stress_levels: HashMap<String, u8>,
    pub success_triggers: Vec<String>,
}

//
// ================= Context =================
//

/// Point-in-time context snapshot. Recreated on every interaction,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    pub current_time: String,
    pub day_of_week: String,
    pub recent_app_usage: Vec<String>,
    pub last_search_queries: Vec<String>,
    pub mood_indicators: Vec<String>,
    /// 1-10.
    pub energy_level: u8,
    /// 1-10.
    pub stress_level: u8,
    /// Financial-signal marker, computed once by the provider.
    pub has_financial_signal: bool,
    /// Opportunity-signal marker, computed once by the provider.
    pub has_opportunity_signal: bool,
}

//
// ================= Opportunity =================
//

/// A candidate money-making action discovered by the opportunity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityAlert {
    pub opportunity_type: String,
    pub description: String,
    /// Potential monthly earnings in naira.
    pub potential_earnings: f64,
    pub time_investment: String,
    /// 1-10.
    pub difficulty_level: u8,
    pub requirements: Vec<String>,
    pub action_steps: Vec<String>,
    /// Free-text deadline descriptor; "Flexible" means no deadline.
    pub deadline: String,
    /// Always within [0, 1].
    pub confidence_score: f64,
}

impl OpportunityAlert {
    /// Ranking key: expected value of pursuing this opportunity.
    pub fn expected_value(&self) -> f64 {
        self.confidence_score * self.potential_earnings
    }

    pub fn is_time_sensitive(&self) -> bool {
        self.deadline != "Flexible"
    }
}

//
// ================= Emotional Assessment =================
//

/// Derived emotional read on the user. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalAssessment {
    pub primary_emotion: String,
    pub underlying_causes: Vec<String>,
    pub therapeutic_approach: String,
    pub immediate_interventions: Vec<String>,
    /// Ordered healing phases: (horizon label, strategy text).
    pub long_term_strategy: Vec<(String, String)>,
}

//
// ================= Market Trends =================
//

/// Fixed market-trend reference payload returned by the opportunity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    pub hot_skills: Vec<String>,
    pub growing_markets: Vec<String>,
    pub crypto_trends: Vec<String>,
    /// Segment → qualitative demand label.
    pub job_market: Vec<(String, String)>,
}

//
// ================= Session Records =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub entry_id: Uuid,
    pub energy_level: u8,
    pub stress_level: u8,
    pub primary_emotion: String,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::EmotionalSupport => "emotional_support",
            Intent::MoneyOpportunities => "money_opportunities",
            Intent::CareerGuidance => "career_guidance",
            Intent::GeneralChat => "general_chat",
            Intent::ComprehensiveLifeCoaching => "comprehensive_life_coaching",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };
        write!(f, "{}", s)
    }
}
