use thiserror::Error;

/// Planner-level errors. Everything here is recovered locally; nothing the
/// core controls may abort a turn.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum PlanError {
    /// Every candidate in a path-risk selection was blocked. Callers fall
    /// back to a fixed default coordinate instead of propagating this.
    #[error("no viable deploy location: every candidate path is blocked")]
    NoViableLocation,
}

/// Failures while building the unit roster from the engine's configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed unit configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected 6 unit entries in configuration, got {0}")]
    WrongUnitCount(usize),
}
