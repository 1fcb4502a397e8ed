//! Defensive placement planning.
//!
//! Placement is attempt-based and idempotent: every cell in the layout is
//! attempted every turn, occupied cells become engine no-ops, and the board
//! converges toward the full layout as the structure budget allows. That
//! same property makes defense self-healing: whatever the opponent destroys
//! is re-attempted the next turn.

use crate::command::*;
use crate::constants::*;
use crate::geometry::*;
use crate::location::*;
use crate::policy::*;
use crate::snapshot::*;
use crate::state::*;
use crate::units::*;
use fnv::FnvHashSet;
use itertools::iproduct;
use log::*;

/// Plan this turn's defensive commands: layout tiers in priority order,
/// then the reactive neighborhood around the latest breach.
pub fn plan_defense(
    policy: &Policy,
    geometry: &BoardGeometry,
    snapshot: &TurnSnapshot,
    state: &mut MatchState,
) -> Vec<Command> {
    let mut commands = Vec::new();

    for tier in policy.layout {
        // Count this tier's kind on its own cells. Crossing the threshold
        // flips the region to upgrades; engine-driven losses flip it back.
        let standing = tier
            .cells
            .iter()
            .filter(|&&cell| {
                snapshot
                    .board
                    .stationary_at(cell)
                    .map(|unit| unit.owner == Owner::Friendly && unit.kind == tier.kind)
                    .unwrap_or(false)
            })
            .count();
        let reinforced = standing >= tier.reinforce_threshold;
        state.set_region_reinforced(tier.region, reinforced);

        for &cell in tier.cells {
            if reinforced {
                commands.push(Command::upgrade(cell));
            } else {
                commands.push(Command::place(tier.kind, cell, 1));
            }
        }
    }

    commands.extend(reactive_turrets(policy, geometry, snapshot, state));
    commands
}

/// Turret placements biased toward the most recent breach.
///
/// Attempts every sign combination `(±i, ±j)` of the configured offset
/// range around the latest breach coordinate, skipping cells that are off
/// the arena or already occupied. Runs every turn so the net re-grows
/// after losses, not just once per breach.
fn reactive_turrets(
    policy: &Policy,
    geometry: &BoardGeometry,
    snapshot: &TurnSnapshot,
    state: &MatchState,
) -> Vec<Command> {
    let focus = match state.breaches.latest() {
        Some(loc) => loc,
        None => return Vec::new(),
    };

    debug!(
        "reinforcing around last breach at ({}, {})",
        focus.x(),
        focus.y()
    );

    let mut commands = Vec::new();
    let mut attempted = FnvHashSet::default();
    for (i, j) in iproduct!(policy.reactive_offsets.clone(), policy.reactive_offsets.clone()) {
        for &(sx, sy) in &OFFSET_SIGNS {
            let cell = match focus.offset(sx * i, sy * j) {
                Some(cell) => cell,
                None => continue,
            };
            if !geometry.in_arena(cell) || snapshot.board.is_occupied(cell) {
                continue;
            }
            if attempted.insert(cell) {
                commands.push(Command::place(UnitKind::Turret, cell, 1));
            }
        }
    }
    commands
}

/// Upgrade every friendly stationary unit currently standing, plus anything
/// queued for placement this turn. Attempts on already-upgraded units are
/// engine no-ops, so the sweep is safe to run unconditionally.
pub fn upgrade_sweep(snapshot: &TurnSnapshot, queued: &[Command]) -> Vec<Command> {
    let mut targets: Vec<Location> = snapshot.board.stationary_locations(Owner::Friendly);
    for command in queued {
        if let Command::Place { kind, at, .. } = command {
            if kind.is_stationary() {
                targets.push(*at);
            }
        }
    }

    let mut seen = FnvHashSet::default();
    targets
        .into_iter()
        .filter(|loc| seen.insert(*loc))
        .map(Command::upgrade)
        .collect()
}
