//! Offensive scheduling.
//!
//! Rules are evaluated in a fixed order each turn; earlier rules can
//! pre-empt later ones but every non-conflicting command stays in the list.
//! Nothing here is allowed to fail the turn: when no deploy location is
//! viable, the scheduler falls back to a fixed coordinate and moves on.

use crate::command::*;
use crate::engine::*;
use crate::geometry::*;
use crate::location::*;
use crate::policy::*;
use crate::risk::*;
use crate::snapshot::*;
use crate::state::*;
use crate::units::*;
use log::*;

/// Plan this turn's mobile deployments.
pub fn plan_offense<E: EngineFacade + ?Sized>(
    policy: &Policy,
    geometry: &BoardGeometry,
    snapshot: &TurnSnapshot,
    state: &mut MatchState,
    estimator: &PathRiskEstimator<'_, E>,
) -> Vec<Command> {
    let mut commands = Vec::new();

    // Rule 1: opening probes at fixed edge cells.
    if snapshot.turn < policy.opening_turns {
        for &(cell, quantity) in policy.opening_waves {
            commands.push(Command::place(UnitKind::Disruptor, cell, quantity));
        }
    }

    // Rule 2: the default screening wave. Half the mobile budget, rounded
    // down, buys `2n + 1` disruptors at the least-risk edge cell, or at the
    // latest breach once the opponent has found a way through.
    let n = (snapshot.my_resources.mobile / 2.0).floor() as u32;
    let screen_target = match state.breaches.latest() {
        Some(loc) => loc,
        None => least_risk_edge(policy, geometry, estimator),
    };
    commands.push(Command::place(UnitKind::Disruptor, screen_target, 2 * n + 1));

    // Rule 3: stagnation check. If the last two turns moved the opponent's
    // health by no more than the margin, offense is not working; double the
    // screen and stay aggressive for the rest of the match.
    let stalled = snapshot.turn >= policy.stagnation_min_turn
        && state
            .last_enemy_health_drop()
            .map(|drop| drop <= policy.stagnation_margin)
            .unwrap_or(false);
    if state.is_aggressive() || stalled {
        let target = state.breaches.latest().unwrap_or(policy.fallback_spawn);
        commands.push(Command::place(UnitKind::Disruptor, target, 2 * n + 1));
        state.escalate();
    }

    // Rule 4: primary offense, full mobile budget.
    if !state.is_aggressive() {
        if snapshot.turn < policy.split_wave_turns {
            // Early turns: split disruptor waves across both rush lanes.
            commands.push(Command::place(UnitKind::Disruptor, policy.parity_targets[0], n));
            commands.push(Command::place(
                UnitKind::Disruptor,
                policy.parity_targets[1],
                n + 1,
            ));
        } else {
            let target = policy.parity_targets[(snapshot.turn % 2) as usize];
            commands.push(Command::place(
                UnitKind::Runner,
                target,
                policy.saturation_quantity,
            ));
        }
    } else {
        let target = state.breaches.latest().unwrap_or(policy.fallback_spawn);
        commands.push(Command::place(
            UnitKind::Disruptor,
            target,
            policy.saturation_quantity,
        ));
    }

    commands
}

/// The least-risk friendly edge cell, falling back to the policy default
/// when every edge is walled off. Offense must never abort the turn.
fn least_risk_edge<E: EngineFacade + ?Sized>(
    policy: &Policy,
    geometry: &BoardGeometry,
    estimator: &PathRiskEstimator<'_, E>,
) -> Location {
    let candidates = geometry.home_edge_cells();
    match estimator.select_best(&candidates) {
        Ok(loc) => {
            debug!("least-risk deploy location ({}, {})", loc.x(), loc.y());
            loc
        }
        Err(err) => {
            debug!("{err}; deploying at the fallback cell");
            policy.fallback_spawn
        }
    }
}
