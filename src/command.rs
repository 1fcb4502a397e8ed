use crate::engine::*;
use crate::location::*;
use crate::units::*;

/// A single planner decision.
///
/// Commands are pure data; executing them against the engine is the
/// orchestrator's job. `quantity > 1` on a mobile kind means "spawn that
/// many sequentially at this coordinate this turn" and is implicitly capped
/// by the remaining mobile budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place {
        kind: UnitKind,
        at: Location,
        quantity: u32,
    },
    Upgrade {
        at: Location,
    },
}

impl Command {
    pub fn place(kind: UnitKind, at: Location, quantity: u32) -> Command {
        Command::Place { kind, at, quantity }
    }

    pub fn upgrade(at: Location) -> Command {
        Command::Upgrade { at }
    }
}

/// Counts of commands that actually took effect, for diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandReceipt {
    pub placed: u32,
    pub upgraded: u32,
}

/// Apply a queued command list against the facade, in order.
///
/// Zero-effect commands (occupied cells, empty budget, missing units) are
/// normal and simply contribute nothing to the receipt.
pub fn apply_commands<E: EngineFacade + ?Sized>(
    engine: &mut E,
    commands: &[Command],
) -> CommandReceipt {
    let mut receipt = CommandReceipt::default();
    for command in commands {
        match *command {
            Command::Place { kind, at, quantity } => {
                receipt.placed += engine.attempt_place(kind, at, quantity);
            }
            Command::Upgrade { at } => {
                receipt.upgraded += engine.attempt_upgrade(at);
            }
        }
    }
    receipt
}
