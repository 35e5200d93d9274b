//! Opportunity Ranker
//!
//! Selects the single best opportunity from a candidate set by maximizing
//! `confidence_score * potential_earnings`. Ties are broken by first
//! occurrence in input order (stable max). Candidates are never mutated.

use crate::error::CoachError;
use crate::models::{OpportunityAlert, TrendSummary, UserProfile};
use crate::Result;
use tracing::debug;

/// Opportunity ranker
pub struct OpportunityRanker;

impl OpportunityRanker {
    /// Pick the best opportunity for the user.
    ///
    /// The profile is unused today but part of the contract so scoring can
    /// become profile-aware without a signature change. Fails with
    /// `EmptyOpportunities` on an empty candidate list — callers must
    /// guarantee non-empty input.
    pub fn best<'a>(
        opportunities: &'a [OpportunityAlert],
        _profile: &UserProfile,
    ) -> Result<&'a OpportunityAlert> {
        let mut best = opportunities.first().ok_or(CoachError::EmptyOpportunities)?;

        for candidate in &opportunities[1..] {
            // Strict comparison keeps the earliest candidate on ties
            if candidate.expected_value() > best.expected_value() {
                best = candidate;
            }
        }

        debug!(
            opportunity_type = %best.opportunity_type,
            expected_value = best.expected_value(),
            "Selected best opportunity"
        );

        Ok(best)
    }
}

/// Aggregate market-trend summary.
///
/// Fixed reference payload, returned verbatim; not derived from any
/// ranked opportunities.
pub fn market_trends() -> TrendSummary {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

    TrendSummary {
        hot_skills: owned(&["AI/ML", "Blockchain", "Remote Work Tools", "Digital Marketing"]),
        growing_markets: owned(&["EdTech", "FinTech", "HealthTech", "E-commerce"]),
        crypto_trends: owned(&["DeFi yield farming", "NFT marketplace", "Layer 2 solutions"]),
        job_market: vec![
            ("remote_demand".to_string(), "High".to_string()),
            ("tech_jobs".to_string(), "Very High".to_string()),
            ("freelance".to_string(), "Growing".to_string()),
        ],
    }
}
