//! Turn sequencing.
//!
//! The orchestrator owns everything that lives for a whole match: the
//! policy, the unit roster, and the mutable [`MatchState`]. Each turn it
//! runs the planners in order, queues their commands in a local ledger, and
//! flushes the ledger to the engine exactly once. Sub-turn combat frames go
//! through [`TurnOrchestrator::on_action_frame`], which only appends to
//! breach memory; the engine calls it under a much tighter deadline.

use crate::command::*;
use crate::defense;
use crate::engine::*;
use crate::geometry::*;
use crate::offense;
use crate::policy::*;
use crate::risk::*;
use crate::state::*;
use crate::units::*;
use log::*;

/// Where the current turn stands.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TurnPhase {
    /// Commands are being accumulated; nothing has reached the engine.
    Planning,
    /// The ledger has been flushed and the turn submitted. Closed.
    Committed,
}

/// Local command queue for one turn.
///
/// Commands accumulate while the turn is in [`TurnPhase::Planning`] and hit
/// the engine in one flush. There is no partial-submission mode: if the
/// flush never happens the whole turn is lost, and the engine's own timeout
/// policy takes over.
pub struct TurnLedger {
    commands: Vec<Command>,
    phase: TurnPhase,
}

impl TurnLedger {
    pub fn new() -> Self {
        TurnLedger {
            commands: Vec::new(),
            phase: TurnPhase::Planning,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Queue a command. Rejected with a warning once the turn is committed;
    /// a late command is a planner bug, not a reason to abort the match.
    pub fn queue(&mut self, command: Command) {
        if self.phase == TurnPhase::Committed {
            warn!("command {command:?} queued after commit, dropping");
            return;
        }
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.queue(command);
        }
    }

    /// Apply every queued command to the engine, submit the turn, and close
    /// the ledger.
    pub fn flush<E: EngineFacade + ?Sized>(&mut self, engine: &mut E) -> CommandReceipt {
        let receipt = apply_commands(engine, &self.commands);
        engine.submit_turn();
        self.phase = TurnPhase::Committed;
        receipt
    }
}

impl Default for TurnLedger {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TurnOrchestrator {
    policy: Policy,
    roster: UnitRoster,
    geometry: BoardGeometry,
    state: MatchState,
}

impl TurnOrchestrator {
    /// Create the agent for a new match. The roster is resolved once from
    /// the engine's configuration and never changes afterwards.
    pub fn new(roster: UnitRoster, policy: Policy) -> Self {
        TurnOrchestrator {
            policy,
            roster,
            geometry: BoardGeometry::new(),
            state: MatchState::new(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The full-turn callback: plan, flush, submit.
    ///
    /// Sequence: snapshot, defense (with the reactive pass folded in),
    /// offense, upgrade sweep, then one atomic flush. Returns the receipt
    /// for diagnostics.
    pub fn on_turn<E: EngineFacade>(&mut self, engine: &mut E) -> CommandReceipt {
        let snapshot = engine.snapshot();
        debug!("planning turn {}", snapshot.turn);
        self.state.record_enemy_health(snapshot.enemy_health);

        let mut ledger = TurnLedger::new();
        ledger.extend(defense::plan_defense(
            &self.policy,
            &self.geometry,
            &snapshot,
            &mut self.state,
        ));

        {
            let estimator = PathRiskEstimator::new(&*engine, &self.roster);
            ledger.extend(offense::plan_offense(
                &self.policy,
                &self.geometry,
                &snapshot,
                &mut self.state,
                &estimator,
            ));
        }

        let sweep = defense::upgrade_sweep(&snapshot, ledger.commands());
        ledger.extend(sweep);

        let receipt = ledger.flush(engine);
        debug!(
            "turn {} committed: {} placed, {} upgraded",
            snapshot.turn, receipt.placed, receipt.upgraded
        );
        receipt
    }

    /// The sub-turn combat callback. Must stay cheap: it only feeds breach
    /// memory, never places units or runs path queries.
    pub fn on_action_frame(&mut self, raw: &str) {
        self.state.breaches.ingest_frame(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn ledger_rejects_commands_after_commit() {
        struct NullEngine;
        impl EngineFacade for NullEngine {
            fn snapshot(&self) -> crate::snapshot::TurnSnapshot {
                crate::snapshot::TurnSnapshot::initial()
            }
            fn attempt_place(&mut self, _: UnitKind, _: Location, _: u32) -> u32 {
                0
            }
            fn attempt_upgrade(&mut self, _: Location) -> u32 {
                0
            }
            fn find_path(&self, _: Location) -> Option<Vec<Location>> {
                None
            }
            fn attackers_at(&self, _: Location, _: Owner) -> Vec<crate::units::StationaryUnit> {
                Vec::new()
            }
            fn submit_turn(&mut self) {}
        }

        let mut ledger = TurnLedger::new();
        ledger.queue(Command::place(UnitKind::Wall, Location::new(1, 13), 1));
        assert_eq!(ledger.phase(), TurnPhase::Planning);
        assert_eq!(ledger.commands().len(), 1);

        ledger.flush(&mut NullEngine);
        assert_eq!(ledger.phase(), TurnPhase::Committed);

        ledger.queue(Command::place(UnitKind::Wall, Location::new(2, 13), 1));
        assert_eq!(ledger.commands().len(), 1, "post-commit commands are dropped");
    }

    #[test]
    fn action_frames_feed_breach_memory() {
        let mut agent = TurnOrchestrator::new(UnitRoster::standard(), Policy::default());
        agent.on_action_frame(
            r#"{"events": {"breach": [[[5, 13], 1.0, 3, "u1", 2], [[9, 4], 1.0, 3, "u2", 1]]}}"#,
        );
        assert_eq!(agent.state().breaches.latest(), Some(Location::new(5, 13)));
        assert_eq!(agent.state().breaches.len(), 1);
    }
}
