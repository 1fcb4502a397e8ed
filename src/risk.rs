//! Path-risk estimation for candidate deploy locations.
//!
//! A mobile unit entering the board walks the engine-computed path to the
//! far edge; the risk of a candidate is the total damage enemy turrets can
//! deal along that path. One path query per candidate, no nested search:
//! the turn callback runs under an engine deadline and this is the only
//! per-candidate cost.

use crate::engine::*;
use crate::error::*;
use crate::location::*;
use crate::units::*;

/// The outcome of scoring one candidate entry location.
#[derive(Clone, Debug)]
pub struct PathRisk {
    /// The traversal path, or `None` when the candidate is fully walled off.
    pub path: Option<Vec<Location>>,
    /// Aggregate expected damage; `f64::INFINITY` for blocked candidates.
    pub score: f64,
}

impl PathRisk {
    pub fn is_blocked(&self) -> bool {
        self.path.is_none()
    }
}

pub struct PathRiskEstimator<'a, E: EngineFacade + ?Sized> {
    engine: &'a E,
    roster: &'a UnitRoster,
}

impl<'a, E: EngineFacade + ?Sized> PathRiskEstimator<'a, E> {
    pub fn new(engine: &'a E, roster: &'a UnitRoster) -> Self {
        PathRiskEstimator { engine, roster }
    }

    /// Score one candidate. For every cell on its path, each enemy turret in
    /// range contributes one hit of turret damage.
    pub fn estimate_risk(&self, candidate: Location) -> PathRisk {
        let path = match self.engine.find_path(candidate) {
            Some(path) => path,
            None => {
                return PathRisk {
                    path: None,
                    score: f64::INFINITY,
                }
            }
        };

        let turret_damage = self.roster.stats(UnitKind::Turret).damage as f64;
        let score = path
            .iter()
            .map(|&cell| {
                let turrets = self
                    .engine
                    .attackers_at(cell, Owner::Enemy)
                    .iter()
                    .filter(|unit| unit.kind == UnitKind::Turret)
                    .count();
                turrets as f64 * turret_damage
            })
            .sum();

        PathRisk {
            path: Some(path),
            score,
        }
    }

    /// The least-risk candidate. Blocked candidates are discarded; ties
    /// break on first-seen order, so the result is deterministic for a
    /// fixed candidate ordering.
    pub fn select_best(&self, candidates: &[Location]) -> Result<Location, PlanError> {
        let mut best: Option<(Location, f64)> = None;

        for &candidate in candidates {
            let risk = self.estimate_risk(candidate);
            if risk.is_blocked() {
                continue;
            }
            match best {
                Some((_, best_score)) if risk.score >= best_score => {}
                _ => best = Some((candidate, risk.score)),
            }
        }

        best.map(|(loc, _)| loc).ok_or(PlanError::NoViableLocation)
    }
}
