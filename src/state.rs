//! Per-match mutable state.
//!
//! Everything the agent remembers between turns lives in one struct owned
//! by the orchestrator: created at match start, dropped at match end, and
//! passed by reference into every planning call so the planners themselves
//! stay stateless and testable.

use crate::layout::LayoutRegion;
use crate::memory::BreachMemory;
use fnv::FnvHashMap;
use log::*;

#[derive(Clone, Debug, Default)]
pub struct MatchState {
    pub breaches: BreachMemory,
    enemy_health_history: Vec<f32>,
    aggressive: bool,
    reinforced: FnvHashMap<LayoutRegion, bool>,
}

impl MatchState {
    pub fn new() -> Self {
        MatchState::default()
    }

    /// Record the opponent's health at the start of a turn.
    pub fn record_enemy_health(&mut self, health: f32) {
        self.enemy_health_history.push(health);
    }

    pub fn enemy_health_history(&self) -> &[f32] {
        &self.enemy_health_history
    }

    /// Health lost by the opponent between the last two recorded turns.
    /// `None` until two turns have been recorded.
    pub fn last_enemy_health_drop(&self) -> Option<f32> {
        match self.enemy_health_history.as_slice() {
            [.., previous, latest] => Some(previous - latest),
            _ => None,
        }
    }

    pub fn is_aggressive(&self) -> bool {
        self.aggressive
    }

    /// Switch to aggressive offense. Monotonic: once set, the flag holds
    /// for the rest of the match; there is deliberately no way back.
    pub fn escalate(&mut self) {
        if !self.aggressive {
            debug!("offense stagnated, switching to aggressive mode");
        }
        self.aggressive = true;
    }

    pub fn region_reinforced(&self, region: LayoutRegion) -> bool {
        self.reinforced.get(&region).copied().unwrap_or(false)
    }

    /// Set or revert a region's reinforcement flag from the observed unit
    /// count. Reverting is expected: engine-side losses re-open placement.
    pub fn set_region_reinforced(&mut self, region: LayoutRegion, reinforced: bool) {
        let previous = self.reinforced.insert(region, reinforced);
        if previous != Some(reinforced) && previous.is_some() {
            debug!("region {region:?} reinforcement flipped to {reinforced}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn aggression_is_monotonic() {
        let mut state = MatchState::new();
        assert!(!state.is_aggressive());
        state.escalate();
        assert!(state.is_aggressive());
        // A second escalation is a no-op, and no API exists to clear it.
        state.escalate();
        assert!(state.is_aggressive());
    }

    #[test]
    fn health_drop_needs_two_turns() {
        let mut state = MatchState::new();
        assert_eq!(state.last_enemy_health_drop(), None);
        state.record_enemy_health(40.0);
        assert_eq!(state.last_enemy_health_drop(), None);
        state.record_enemy_health(37.0);
        assert_eq!(state.last_enemy_health_drop(), Some(3.0));
        state.record_enemy_health(39.0);
        assert_eq!(state.last_enemy_health_drop(), Some(-2.0));
    }

    #[test]
    fn reinforcement_flags_revert() {
        let mut state = MatchState::new();
        assert!(!state.region_reinforced(LayoutRegion::TurretLine));
        state.set_region_reinforced(LayoutRegion::TurretLine, true);
        assert!(state.region_reinforced(LayoutRegion::TurretLine));
        state.set_region_reinforced(LayoutRegion::TurretLine, false);
        assert!(!state.region_reinforced(LayoutRegion::TurretLine));
    }

    #[test]
    fn breach_memory_is_reachable_through_state() {
        let mut state = MatchState::new();
        state.breaches.record(Location::new(5, 13));
        assert_eq!(state.breaches.latest(), Some(Location::new(5, 13)));
    }
}
