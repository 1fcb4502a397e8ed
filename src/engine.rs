//! The boundary between the decision engine and the match engine.
//!
//! The core consumes this trait; it never implements the game itself. A live
//! deployment provides a wire-protocol adapter; [`crate::harness`] provides
//! an in-memory implementation for native testing and benchmarking.

use crate::location::*;
use crate::snapshot::*;
use crate::units::*;

/// Read/command facade over the match engine.
///
/// Placement and upgrade calls follow the engine's "no-op on unavailable"
/// contract: a blocked cell, an unaffordable cost, or a foreign unit yields
/// a zero count, never an error. Callers are expected to over-ask and let
/// the engine cap; that is how full-budget deployments are expressed.
pub trait EngineFacade {
    /// Immutable view of the match at the current point in the turn.
    /// Placements already queued this turn are reflected.
    fn snapshot(&self) -> TurnSnapshot;

    /// Try to place `quantity` units of `kind` at `at`. Returns how many
    /// were actually placed, capped by budget and cell availability.
    fn attempt_place(&mut self, kind: UnitKind, at: Location, quantity: u32) -> u32;

    /// Try to upgrade the friendly stationary unit at `at`. Returns 1 on
    /// success, 0 for empty cells, foreign units, already-upgraded units,
    /// or insufficient funds.
    fn attempt_upgrade(&mut self, at: Location) -> u32;

    /// The path a mobile unit entering at `from` would take toward the far
    /// edge, or `None` if it is fully walled off.
    fn find_path(&self, from: Location) -> Option<Vec<Location>>;

    /// Stationary units belonging to `owner` currently able to hit `target`.
    fn attackers_at(&self, target: Location, owner: Owner) -> Vec<StationaryUnit>;

    /// Commit the turn. Repeated calls within one turn are rejected by the
    /// engine, not by this core.
    fn submit_turn(&mut self);
}
