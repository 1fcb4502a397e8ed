//! Planner tuning, as data.
//!
//! Every heuristic constant the planners consult lives here, so strategy
//! variants are configuration rather than parallel code paths. `Default`
//! is the tuning the crate ships with.

use crate::layout::*;
use crate::location::Location;
use std::ops::RangeInclusive;

/// Shipped opening probes: a split disruptor pair on the two center cells.
const OPENING_WAVES: &[(Location, u32)] = &[(Location::new(13, 0), 3), (Location::new(14, 0), 2)];

#[derive(Clone, Debug)]
pub struct Policy {
    /// Defensive layout tiers, attempted in order each turn.
    pub layout: &'static [LayoutTier],
    /// Reactive turret neighborhood: offsets `(±i, ±j)` for `i, j` in this
    /// range are attempted around the latest breach.
    pub reactive_offsets: RangeInclusive<i8>,
    /// Turns (from 0) that get the fixed opening probe waves.
    pub opening_turns: u32,
    /// Opening probes: disruptor count per fixed edge cell.
    pub opening_waves: &'static [(Location, u32)],
    /// Before this turn, the non-aggressive primary offense sends split
    /// disruptor waves instead of runner rushes.
    pub split_wave_turns: u32,
    /// Enemy health must drop by more than this between two consecutive
    /// turns for offense to count as working.
    pub stagnation_margin: f32,
    /// Earliest turn the stagnation rule is evaluated (it needs two
    /// recorded health values).
    pub stagnation_min_turn: u32,
    /// Runner-rush targets, keyed by turn parity (even, odd).
    pub parity_targets: [Location; 2],
    /// Deploy target of last resort; used whenever no breach has been
    /// recorded or every candidate location is blocked.
    pub fallback_spawn: Location,
    /// Quantity requested for "spend the whole budget" deployments. Far
    /// beyond anything affordable; the engine caps it.
    pub saturation_quantity: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            layout: DEFENSE_LAYOUT,
            reactive_offsets: 2..=6,
            opening_turns: 2,
            opening_waves: OPENING_WAVES,
            split_wave_turns: 3,
            stagnation_margin: 3.0,
            stagnation_min_turn: 2,
            parity_targets: [Location::new(13, 0), Location::new(14, 0)],
            fallback_spawn: Location::new(14, 0),
            saturation_quantity: 1000,
        }
    }
}
