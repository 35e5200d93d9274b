//! Emotional Analyzer
//!
//! Derives an `EmotionalAssessment` from a context snapshot. The primary
//! emotion is the only input-sensitive part; causes, interventions, and the
//! healing strategy are static therapeutic reference tables exposed through
//! the same interface so a later refinement can make them input-sensitive
//! without breaking callers.

use crate::models::{Context, EmotionalAssessment};

pub mod reference {
    //! Static therapeutic reference content.
    //!
    //! Keyed by nothing today; if refinement ever ties these to the primary
    //! emotion, the keying belongs here.

    pub const ROOT_CAUSES: &[&str] = &[
        "Financial insecurity creating survival anxiety",
        "Career stagnation affecting self-worth",
        "Social isolation during job hunting",
        "Overwhelm from too many options without clear direction",
        "Past failures creating fear of taking action",
    ];

    pub const THERAPY_APPROACH: &str =
        "Solution-Focused Brief Therapy with CBT techniques and practical action steps";

    pub const INTERVENTIONS: &[&str] = &[
        "Reframe financial stress as motivation fuel",
        "Break down overwhelming goals into daily actions",
        "Celebrate small wins to build momentum",
        "Use tech skills as confidence foundation",
        "Channel hustler energy into structured opportunity pursuit",
    ];

    /// Ordered healing phases: (horizon label, strategy text).
    pub const HEALING_STRATEGY: &[(&str, &str)] = &[
        (
            "week_1",
            "Stabilize mood with daily wins and financial progress tracking",
        ),
        (
            "week_2",
            "Build confidence through skill application and small income streams",
        ),
        (
            "week_3",
            "Expand opportunities while maintaining emotional balance",
        ),
        (
            "month_1",
            "Establish sustainable income and emotional resilience patterns",
        ),
    ];
}

/// Emotional analyzer
pub struct EmotionalAnalyzer;

impl EmotionalAnalyzer {
    /// Derive a full emotional assessment from the context snapshot.
    ///
    /// Pure function of `(stress_level, energy_level, signal flags)`:
    /// identical inputs always yield byte-identical output.
    pub fn analyze(context: &Context) -> EmotionalAssessment {
        EmotionalAssessment {
            primary_emotion: Self::detect_primary_emotion(context).to_string(),
            underlying_causes: reference::ROOT_CAUSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            therapeutic_approach: reference::THERAPY_APPROACH.to_string(),
            immediate_interventions: reference::INTERVENTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            long_term_strategy: reference::HEALING_STRATEGY
                .iter()
                .map(|(horizon, focus)| (horizon.to_string(), focus.to_string()))
                .collect(),
        }
    }

    /// Primary-emotion rule chain, evaluated in order, first match wins.
    fn detect_primary_emotion(context: &Context) -> &'static str {
        if context.stress_level > 7 && context.energy_level < 4 {
            "Depressed/Overwhelmed"
        } else if context.stress_level > 6 && context.has_financial_signal {
            "Financial Anxiety"
        } else if context.energy_level > 6 && context.has_opportunity_signal {
            "Hopeful but Impatient"
        } else {
            "Cautiously Optimistic"
        }
    }
}
