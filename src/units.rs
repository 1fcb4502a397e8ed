use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// The six deployable unit kinds.
///
/// The discriminant order matches the engine's unit-information table, so a
/// kind doubles as an index into [`UnitRoster`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitKind {
    /// Cheap blocking structure.
    Wall,
    /// Support structure that shields passing friendly mobile units.
    Shield,
    /// Attacking structure; the only stationary kind that deals damage.
    Turret,
    /// Fast, cheap scoring unit.
    Runner,
    /// Heavy area-damage unit.
    Breaker,
    /// Defensive screening unit that intercepts enemy mobile units.
    Disruptor,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum UnitClass {
    Stationary,
    Mobile,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Wall,
        UnitKind::Shield,
        UnitKind::Turret,
        UnitKind::Runner,
        UnitKind::Breaker,
        UnitKind::Disruptor,
    ];

    pub fn class(self) -> UnitClass {
        match self {
            UnitKind::Wall | UnitKind::Shield | UnitKind::Turret => UnitClass::Stationary,
            UnitKind::Runner | UnitKind::Breaker | UnitKind::Disruptor => UnitClass::Mobile,
        }
    }

    pub fn is_stationary(self) -> bool {
        self.class() == UnitClass::Stationary
    }

    fn index(self) -> usize {
        match self {
            UnitKind::Wall => 0,
            UnitKind::Shield => 1,
            UnitKind::Turret => 2,
            UnitKind::Runner => 3,
            UnitKind::Breaker => 4,
            UnitKind::Disruptor => 5,
        }
    }
}

/// Which side a unit (or event) belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Owner {
    Friendly,
    Enemy,
}

impl Owner {
    /// Owner encoding used by the engine's sub-turn combat frames:
    /// `1` is the agent itself, `2` the opponent.
    pub fn from_frame_index(index: u8) -> Option<Owner> {
        match index {
            1 => Some(Owner::Friendly),
            2 => Some(Owner::Enemy),
            _ => None,
        }
    }
}

/// Per-kind stats resolved from the engine's match configuration.
///
/// `cost` is denominated in the structure currency for stationary kinds and
/// the mobile currency for mobile kinds; a unit never costs both.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub cost: f32,
    #[serde(default)]
    pub damage: f32,
    #[serde(default)]
    pub range: f32,
}

/// Immutable per-match unit-stat table.
///
/// Built once when the engine hands over its configuration and passed by
/// reference into every component that needs stats. Nothing in the crate
/// reads unit stats from anywhere else.
#[derive(Clone, Debug)]
pub struct UnitRoster {
    stats: [UnitStats; 6],
}

#[derive(Deserialize)]
struct RosterConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<UnitStats>,
}

impl UnitRoster {
    pub fn new(stats: [UnitStats; 6]) -> Self {
        UnitRoster { stats }
    }

    /// Parse the engine's configuration blob. The `unitInformation` array is
    /// expected in kind-declaration order (wall, shield, turret, runner,
    /// breaker, disruptor).
    pub fn from_config_str(raw: &str) -> Result<Self, ConfigError> {
        let config: RosterConfig = serde_json::from_str(raw)?;
        let count = config.unit_information.len();
        let stats: [UnitStats; 6] = config
            .unit_information
            .try_into()
            .map_err(|_| ConfigError::WrongUnitCount(count))?;
        Ok(UnitRoster { stats })
    }

    /// The stat table used by the offline harness and tests.
    pub fn standard() -> Self {
        UnitRoster::new([
            // Wall
            UnitStats { cost: 1.0, damage: 0.0, range: 0.0 },
            // Shield
            UnitStats { cost: 4.0, damage: 0.0, range: 3.5 },
            // Turret
            UnitStats { cost: 3.0, damage: 4.0, range: 3.5 },
            // Runner
            UnitStats { cost: 1.0, damage: 1.0, range: 3.5 },
            // Breaker
            UnitStats { cost: 3.0, damage: 3.0, range: 4.5 },
            // Disruptor
            UnitStats { cost: 1.0, damage: 10.0, range: 4.5 },
        ])
    }

    pub fn stats(&self, kind: UnitKind) -> &UnitStats {
        &self.stats[kind.index()]
    }
}

/// A stationary unit occupying one board cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StationaryUnit {
    pub kind: UnitKind,
    pub owner: Owner,
    pub upgraded: bool,
}

impl StationaryUnit {
    pub fn new(kind: UnitKind, owner: Owner) -> Self {
        debug_assert!(kind.is_stationary());
        StationaryUnit {
            kind,
            owner,
            upgraded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_parses_engine_config() {
        let raw = r#"{
            "unitInformation": [
                {"cost": 1.0},
                {"cost": 4.0, "range": 3.5},
                {"cost": 3.0, "damage": 4.0, "range": 3.5},
                {"cost": 1.0, "damage": 1.0, "range": 3.5},
                {"cost": 3.0, "damage": 3.0, "range": 4.5},
                {"cost": 1.0, "damage": 10.0, "range": 4.5}
            ]
        }"#;
        let roster = UnitRoster::from_config_str(raw).unwrap();
        assert_eq!(roster.stats(UnitKind::Turret).damage, 4.0);
        assert_eq!(roster.stats(UnitKind::Wall).damage, 0.0);
        assert_eq!(roster.stats(UnitKind::Disruptor).cost, 1.0);
    }

    #[test]
    fn roster_rejects_short_config() {
        let raw = r#"{"unitInformation": [{"cost": 1.0}]}"#;
        assert!(matches!(
            UnitRoster::from_config_str(raw),
            Err(ConfigError::WrongUnitCount(1))
        ));
    }

    #[test]
    fn frame_owner_encoding() {
        assert_eq!(Owner::from_frame_index(1), Some(Owner::Friendly));
        assert_eq!(Owner::from_frame_index(2), Some(Owner::Enemy));
        assert_eq!(Owner::from_frame_index(0), None);
    }
}
