//! Main coaching session - implements the message pipeline
//!
//! MESSAGE → CLASSIFY → (ANALYZE and/or RANK) → COMPOSE → REPLY
//!
//! One `LifeCoach` instance is one session: it owns the profile snapshot,
//! the progress tracker, and the transcript store exclusively. The driving
//! loop processes one message to completion before the next begins.

use crate::analyzer::EmotionalAnalyzer;
use crate::classifier::IntentClassifier;
use crate::composer::ResponseComposer;
use crate::memory::{SessionStats, SessionStore};
use crate::models::{Intent, UserProfile};
use crate::providers::{DeviceSource, OpportunityFeed};
use crate::ranker::OpportunityRanker;
use crate::state::ProgressTracker;
use crate::Result;
use chrono::Utc;
use tracing::{debug, info};

/// Default minimum daily earning target in USD.
pub const DEFAULT_DAILY_TARGET: u32 = 1000;

/// AI life coach session.
pub struct LifeCoach {
    device: Box<dyn DeviceSource>,
    feed: Box<dyn OpportunityFeed>,
    profile: UserProfile,
    composer: ResponseComposer,
    tracker: ProgressTracker,
    store: SessionStore,
}

impl LifeCoach {
    /// Build a session. The profile is loaded once and treated as an
    /// immutable snapshot for the session's lifetime.
    pub fn new(
        device: Box<dyn DeviceSource>,
        feed: Box<dyn OpportunityFeed>,
        daily_target: u32,
    ) -> Self {
        let profile = device.get_profile();

        info!(
            user = %profile.name,
            location = %profile.location,
            daily_target,
            "Coaching session initialized"
        );

        Self {
            device,
            feed,
            profile,
            composer: ResponseComposer::new(daily_target),
            tracker: ProgressTracker::new(),
            store: SessionStore::new(),
        }
    }

    /// Session-opening greeting, including a first emotional read.
    pub fn start_session(&mut self) -> String {
        let context = self.device.get_context();
        let assessment = EmotionalAnalyzer::analyze(&context);
        self.store.record_mood(&context, &assessment.primary_emotion);

        self.composer.greeting(&self.profile, &context, &assessment)
    }

    /// Process one user message end to end.
    pub fn handle_message(&mut self, message: &str) -> Result<String> {
        let intent = IntentClassifier::classify(message);
        debug!(%intent, "Message classified");

        self.respond_with_intent(intent, message)
    }

    /// Respond for an explicitly chosen intent.
    ///
    /// This is the only route to `Intent::GeneralChat`; the classifier
    /// never yields it.
    pub fn respond_with_intent(&mut self, intent: Intent, message: &str) -> Result<String> {
        let reply = match intent {
            Intent::EmotionalSupport => {
                let context = self.device.get_context();
                let assessment = EmotionalAnalyzer::analyze(&context);
                self.store.record_mood(&context, &assessment.primary_emotion);

                self.composer.therapy_response(&self.profile, &assessment)?
            }
            Intent::MoneyOpportunities => {
                let opportunities = self.feed.list_opportunities(&self.profile);
                let trends = self.feed.get_market_trends();
                let best = OpportunityRanker::best(&opportunities, &self.profile)?;

                let reply = self
                    .composer
                    .money_response(best, &trends, opportunities.len())?;
                self.store
                    .note_opportunities_surfaced(opportunities.len() as u32);
                reply
            }
            Intent::CareerGuidance => self.composer.career_response(&self.profile)?,
            Intent::GeneralChat => self.composer.general_chat_response(&self.profile)?,
            Intent::ComprehensiveLifeCoaching => {
                let context = self.device.get_context();
                let assessment = EmotionalAnalyzer::analyze(&context);
                self.store.record_mood(&context, &assessment.primary_emotion);

                let opportunities = self.feed.list_opportunities(&self.profile);
                let reply = self.composer.life_coaching_response(
                    &self.profile,
                    &assessment,
                    &opportunities,
                )?;
                self.store
                    .note_opportunities_surfaced(opportunities.len() as u32);
                reply
            }
        };

        self.store.record_exchange(message, &reply, intent);

        info!(
            %intent,
            transcript_len = self.store.message_count(),
            "Interaction complete"
        );

        Ok(reply)
    }

    /// Daily progress and opportunity report.
    pub fn daily_report(&self) -> Result<String> {
        let opportunities = self.feed.list_opportunities(&self.profile);
        self.composer
            .daily_report(&opportunities, self.tracker.state(), Utc::now())
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Tracker handle for the driving loop's additive updates.
    pub fn tracker_mut(&mut self) -> &mut ProgressTracker {
        &mut self.tracker
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn session_stats(&self) -> SessionStats {
        self.store.stats()
    }

    pub fn transcript_hash(&self) -> String {
        self.store.transcript_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FixedLevels, SimulatedDevice, SimulatedFeed};

    fn create_test_coach(stress: u8, energy: u8) -> LifeCoach {
        let device = SimulatedDevice::with_sampler(Box::new(FixedLevels { energy, stress }));
        LifeCoach::new(Box::new(device), Box::new(SimulatedFeed), DEFAULT_DAILY_TARGET)
    }

    #[test]
    fn test_emotional_message_gets_therapy_response() {
        let mut coach = create_test_coach(9, 3);
        let reply = coach.handle_message("I'm feeling really depressed").unwrap();

        assert!(reply.contains("THERAPY MODE ACTIVATED"));
        assert!(reply.contains("Depressed/Overwhelmed"));
    }

    #[test]
    fn test_money_message_surfaces_best_opportunity() {
        let mut coach = create_test_coach(5, 5);
        let reply = coach
            .handle_message("I need to find ways to make money online")
            .unwrap();

        // 0.75 * 450000 dominates the simulated feed
        assert!(reply.contains("Remote Developer Job"));
        assert!(reply.contains("₦450,000/month"));
        assert_eq!(coach.session_stats().opportunities_surfaced, 3);
    }

    #[test]
    fn test_career_message() {
        let mut coach = create_test_coach(5, 5);
        let reply = coach.handle_message("help me with my interview prep").unwrap();
        assert!(reply.contains("CAREER ACCELERATION MODE"));
    }

    #[test]
    fn test_unmatched_message_gets_life_coaching() {
        let mut coach = create_test_coach(5, 5);
        let reply = coach.handle_message("hello there").unwrap();
        assert!(reply.contains("COMPLETE LIFE OPTIMIZATION SCAN"));
    }

    #[test]
    fn test_general_chat_only_via_explicit_intent() {
        let mut coach = create_test_coach(5, 5);

        let explicit = coach
            .respond_with_intent(Intent::GeneralChat, "just checking in")
            .unwrap();
        assert!(explicit.contains("I'M RIGHT HERE WITH YOU"));

        // The classifier itself never routes there
        let classified = coach.handle_message("just checking in").unwrap();
        assert!(!classified.contains("I'M RIGHT HERE WITH YOU"));
    }

    #[test]
    fn test_session_greeting() {
        let mut coach = create_test_coach(8, 3);
        let greeting = coach.start_session();
        assert!(greeting.contains("AI LIFE COACH & WEALTH ASSISTANT ONLINE"));
        assert!(greeting.contains("Stress Level: 8/10"));
    }

    #[test]
    fn test_transcript_records_every_exchange() {
        let mut coach = create_test_coach(5, 5);
        coach.handle_message("I'm worried").unwrap();
        coach.handle_message("find me a job").unwrap();

        let stats = coach.session_stats();
        assert_eq!(stats.message_count, 4);
        assert!(!coach.transcript_hash().is_empty());
    }

    #[test]
    fn test_daily_report_with_tracker_progress() {
        let mut coach = create_test_coach(5, 5);
        coach.tracker_mut().add_income_generated(3000.0);
        coach.tracker_mut().add_applications_sent(1);

        let report = coach.daily_report().unwrap();
        assert!(report.contains("Income generated: ₦3,000"));
        assert!(report.contains("we're 0.8% there"));
        // All three simulated deadlines are time-boxed
        assert!(report.contains("Action required on: 3 time-sensitive opportunities"));
    }
}
