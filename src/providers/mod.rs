//! External collaborator interfaces and their simulated implementations
//!
//! The device source supplies the user profile and real-time context; the
//! opportunity feed supplies candidate opportunities and market trends.
//! Both are traits so the coaching core stays testable against fixtures.
//! Energy/stress sampling sits behind `LevelSampler` so everything past the
//! provider boundary is deterministic.

use crate::models::{Context, OpportunityAlert, TrendSummary, UserProfile};
use crate::ranker;
use chrono::Local;
use lazy_static::lazy_static;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

//
// ================= Level Sampling =================
//

/// Source of the context's energy and stress readings.
pub trait LevelSampler: Send {
    /// 1-10 energy reading.
    fn energy_level(&mut self) -> u8;
    /// 1-10 stress reading.
    fn stress_level(&mut self) -> u8;
}

/// Production sampler: energy in 4..=8, stress in 5..=9.
pub struct RandomLevels;

impl LevelSampler for RandomLevels {
    fn energy_level(&mut self) -> u8 {
        rand::thread_rng().gen_range(4..=8)
    }

    fn stress_level(&mut self) -> u8 {
        rand::thread_rng().gen_range(5..=9)
    }
}

/// Deterministic sampler for tests and replayable sessions.
pub struct FixedLevels {
    pub energy: u8,
    pub stress: u8,
}

impl LevelSampler for FixedLevels {
    fn energy_level(&mut self) -> u8 {
        self.energy
    }

    fn stress_level(&mut self) -> u8 {
        self.stress
    }
}

//
// ================= Device Source =================
//

/// Profile & context provider.
pub trait DeviceSource: Send {
    fn get_profile(&self) -> UserProfile;
    fn get_context(&mut self) -> Context;
}

/// Simulated device integration returning a fixed profile and a sampled
/// context snapshot.
pub struct SimulatedDevice {
    sampler: Box<dyn LevelSampler>,
}

impl SimulatedDevice {
    pub fn new() -> Self {
        Self::with_sampler(Box::new(RandomLevels))
    }

    pub fn with_sampler(sampler: Box<dyn LevelSampler>) -> Self {
        Self { sampler }
    }
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceSource for SimulatedDevice {
    fn get_profile(&self) -> UserProfile {
        UserProfile {
            name: "User".to_string(),
            age: 28,
            location: "Lagos, Nigeria".to_string(),
            current_income: 50000.0,
            career_goals: owned(&[
                "Remote tech job",
                "Start online business",
                "Financial freedom",
            ]),
            pain_points: owned(&[
                "Depression",
                "Financial stress",
                "Career stagnation",
                "Loneliness",
            ]),
            strengths: owned(&["Tech-savvy", "Creative", "Determined", "Fast learner"]),
            financial_goals: 300000.0,
            preferred_work_style: "Remote/Freelance".to_string(),
            skills: owned(&["Programming", "Digital Marketing", "Content Creation"]),
            interests: owned(&[
                "Technology",
                "Business",
                "Cryptocurrency",
                "Personal Development",
            ]),
            daily_routine: HashMap::from([
                (
                    "morning".to_string(),
                    "Check phone, coffee, worry about money".to_string(),
                ),
                (
                    "afternoon".to_string(),
                    "Job hunting, skill learning".to_string(),
                ),
                (
                    "evening".to_string(),
                    "Social media, planning, anxiety".to_string(),
                ),
            ]),
            emotional_state: "Struggling but hopeful".to_string(),
            stress_levels: HashMap::from([
                ("financial".to_string(), 9),
                ("career".to_string(), 8),
                ("social".to_string(), 7),
                ("health".to_string(), 6),
            ]),
            success_triggers: owned(&[
                "Making money",
                "Learning new skills",
                "Recognition",
                "Progress",
            ]),
        }
    }

    fn get_context(&mut self) -> Context {
        let now = Local::now();
        let last_search_queries = owned(&[
            "remote jobs Nigeria",
            "online money making",
            "depression help",
        ]);
        let mood_indicators = owned(&[
            "searching for opportunities",
            "financial planning",
            "self-improvement",
        ]);

        let context = Context {
            current_time: now.format("%H:%M").to_string(),
            day_of_week: now.format("%A").to_string(),
            recent_app_usage: owned(&["LinkedIn", "Indeed", "WhatsApp", "Banking App"]),
            has_financial_signal: detect_signal(&last_search_queries, &mood_indicators, "financial"),
            has_opportunity_signal: detect_signal(
                &last_search_queries,
                &mood_indicators,
                "opportunit",
            ),
            last_search_queries,
            mood_indicators,
            energy_level: self.sampler.energy_level(),
            stress_level: self.sampler.stress_level(),
        };

        debug!(
            energy = context.energy_level,
            stress = context.stress_level,
            "Context snapshot captured"
        );

        context
    }
}

/// Signal flags are computed once here so the analyzer consumes plain
/// booleans instead of scanning stringified context.
fn detect_signal(queries: &[String], moods: &[String], marker: &str) -> bool {
    queries
        .iter()
        .chain(moods.iter())
        .any(|entry| entry.to_lowercase().contains(marker))
}

//
// ================= Opportunity Feed =================
//

/// Opportunity provider. Returns a non-empty candidate list by contract.
pub trait OpportunityFeed: Send {
    fn list_opportunities(&self, profile: &UserProfile) -> Vec<OpportunityAlert>;

    fn get_market_trends(&self) -> TrendSummary {
        ranker::market_trends()
    }
}

lazy_static! {
    static ref SIMULATED_OPPORTUNITIES: Vec<OpportunityAlert> = vec![
        OpportunityAlert {
            opportunity_type: "Remote Developer Job".to_string(),
            description: "Full-stack developer position at UK startup, fully remote".to_string(),
            potential_earnings: 450000.0,
            time_investment: "40 hours/week".to_string(),
            difficulty_level: 6,
            requirements: owned(&["React", "Node.js", "3+ years experience"]),
            action_steps: owned(&[
                "Update LinkedIn profile with React projects",
                "Prepare portfolio website",
                "Apply within 48 hours",
                "Practice technical interview questions",
            ]),
            deadline: "2 days".to_string(),
            confidence_score: 0.75,
        },
        OpportunityAlert {
            opportunity_type: "Cryptocurrency Mining Pool".to_string(),
            description: "New profitable mining pool with 15% higher returns".to_string(),
            potential_earnings: 85000.0,
            time_investment: "2 hours setup".to_string(),
            difficulty_level: 4,
            requirements: owned(&["Basic crypto knowledge", "₦50,000 investment"]),
            action_steps: owned(&[
                "Research pool reputation and security",
                "Calculate ROI and risks",
                "Start with small investment",
                "Monitor performance daily",
            ]),
            deadline: "1 week".to_string(),
            confidence_score: 0.65,
        },
        OpportunityAlert {
            opportunity_type: "Online Business Idea".to_string(),
            description: "AI-powered content creation service for Nigerian businesses".to_string(),
            potential_earnings: 200000.0,
            time_investment: "20 hours/week initially".to_string(),
            difficulty_level: 7,
            requirements: owned(&[
                "AI tools knowledge",
                "Marketing skills",
                "₦30,000 startup capital",
            ]),
            action_steps: owned(&[
                "Research target market in Nigeria",
                "Develop MVP using AI tools",
                "Create marketing strategy",
                "Launch with 5 pilot clients",
            ]),
            deadline: "3 weeks".to_string(),
            confidence_score: 0.80,
        },
    ];
}

/// Simulated opportunity feed producing a fixed, fresh candidate list
/// per call.
pub struct SimulatedFeed;

impl OpportunityFeed for SimulatedFeed {
    fn list_opportunities(&self, _profile: &UserProfile) -> Vec<OpportunityAlert> {
        SIMULATED_OPPORTUNITIES.clone()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sampler_deterministic_context() {
        let mut device = SimulatedDevice::with_sampler(Box::new(FixedLevels {
            energy: 6,
            stress: 7,
        }));

        let a = device.get_context();
        let b = device.get_context();
        assert_eq!(a.energy_level, 6);
        assert_eq!(a.stress_level, 7);
        assert_eq!(a.energy_level, b.energy_level);
        assert_eq!(a.stress_level, b.stress_level);
    }

    #[test]
    fn test_random_sampler_stays_in_range() {
        let mut sampler = RandomLevels;
        for _ in 0..100 {
            let energy = sampler.energy_level();
            let stress = sampler.stress_level();
            assert!((4..=8).contains(&energy));
            assert!((5..=9).contains(&stress));
        }
    }

    #[test]
    fn test_simulated_context_signals() {
        let mut device = SimulatedDevice::with_sampler(Box::new(FixedLevels {
            energy: 5,
            stress: 5,
        }));

        // "financial planning" and "searching for opportunities" both appear
        let context = device.get_context();
        assert!(context.has_financial_signal);
        assert!(context.has_opportunity_signal);
    }

    #[test]
    fn test_feed_is_non_empty() {
        let device = SimulatedDevice::new();
        let feed = SimulatedFeed;
        let opportunities = feed.list_opportunities(&device.get_profile());
        assert_eq!(opportunities.len(), 3);
        for opportunity in &opportunities {
            assert!((0.0..=1.0).contains(&opportunity.confidence_score));
        }
    }

    #[test]
    fn test_profile_levels_in_bounds() {
        let profile = SimulatedDevice::new().get_profile();
        for intensity in profile.stress_levels.values() {
            assert!((1..=10).contains(intensity));
        }
    }
}
