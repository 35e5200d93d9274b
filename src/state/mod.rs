//! Session progress tracking
//!
//! Additive, process-lifetime counters for user-facing outcomes. Each
//! coaching session exclusively owns one tracker; nothing here persists
//! across restarts. Counters only ever grow within a session.

use serde::{Deserialize, Serialize};

/// Cumulative session counters. Monotonically non-decreasing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressState {
    pub opportunities_found: u32,
    pub applications_sent: u32,
    pub interviews_scheduled: u32,
    /// Naira.
    pub income_generated: f64,
    /// Cumulative mood-improvement score; rendered as a percentage.
    pub mood_improvement: f64,
}

/// Progress tracker owned by the coaching session.
///
/// Exposes additive updates only — no subtraction, no bounds. Reads are
/// pure projections.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    state: ProgressState,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_opportunities_found(&mut self, count: u32) {
        self.state.opportunities_found += count;
    }

    pub fn add_applications_sent(&mut self, count: u32) {
        self.state.applications_sent += count;
    }

    pub fn add_interviews_scheduled(&mut self, count: u32) {
        self.state.interviews_scheduled += count;
    }

    pub fn add_income_generated(&mut self, amount: f64) {
        self.state.income_generated += amount;
    }

    pub fn add_mood_improvement(&mut self, delta: f64) {
        self.state.mood_improvement += delta;
    }

    /// Read-only snapshot for reporting.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.state(), &ProgressState::default());
    }

    #[test]
    fn test_additive_updates_accumulate() {
        let mut tracker = ProgressTracker::new();
        tracker.add_opportunities_found(2);
        tracker.add_opportunities_found(3);
        tracker.add_applications_sent(1);
        tracker.add_interviews_scheduled(1);
        tracker.add_income_generated(3000.0);
        tracker.add_mood_improvement(0.1);
        tracker.add_mood_improvement(0.2);

        let state = tracker.state();
        assert_eq!(state.opportunities_found, 5);
        assert_eq!(state.applications_sent, 1);
        assert_eq!(state.interviews_scheduled, 1);
        assert_eq!(state.income_generated, 3000.0);
        assert!((state.mood_improvement - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_reads_do_not_mutate() {
        let mut tracker = ProgressTracker::new();
        tracker.add_income_generated(500.0);

        let before = tracker.state().clone();
        let _ = tracker.state();
        assert_eq!(tracker.state(), &before);
    }
}
