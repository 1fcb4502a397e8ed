//! Hand-authored defensive layouts.
//!
//! Each tier is a unit kind plus an ordered coordinate list on the agent's
//! half of the board; tiers are attempted in declaration order. Layout maps
//! were tuned by hand against the arena geometry: the shield field hugs the
//! back rows where enemy area units cannot reach it, the turret line sits
//! two rows behind the front, and the corner walls screen the two cells an
//! edge rush hits first.

use crate::location::Location;
use crate::units::UnitKind;

/// Identity of a layout region, used to key reinforcement flags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LayoutRegion {
    ShieldField,
    TurretLine,
    FrontWalls,
}

/// One priority tier of the defensive layout.
#[derive(Debug)]
pub struct LayoutTier {
    pub region: LayoutRegion,
    pub kind: UnitKind,
    pub cells: &'static [Location],
    /// Once this many of `kind` stand on the tier's cells, the region is
    /// considered reinforced and remaining attempts switch to upgrades.
    pub reinforce_threshold: usize,
}

const fn at(x: u8, y: u8) -> Location {
    Location::new(x, y)
}

/// Shield field: a wedge across rows 2-6, deepest in the center.
const SHIELD_FIELD: &[Location] = &[
    at(9, 6), at(10, 6), at(11, 6), at(12, 6), at(13, 6), at(14, 6), at(15, 6), at(16, 6),
    at(17, 6), at(18, 6),
    at(10, 5), at(11, 5), at(12, 5), at(13, 5), at(14, 5), at(15, 5), at(16, 5), at(17, 5),
    at(11, 4), at(12, 4), at(13, 4), at(14, 4), at(15, 4), at(16, 4),
    at(12, 3), at(13, 3), at(14, 3), at(15, 3),
    at(13, 2),
];

/// Turret line: corner anchors plus a staggered double row across the front.
const TURRET_LINE: &[Location] = &[
    at(0, 13), at(27, 13),
    at(3, 12), at(7, 12), at(11, 12), at(15, 12), at(19, 12), at(23, 12),
    at(5, 10), at(9, 10), at(13, 10), at(17, 10), at(21, 10),
];

/// Corner walls: screen the cells directly ahead of the corner turrets.
const FRONT_WALLS: &[Location] = &[at(1, 13), at(2, 13), at(25, 13), at(26, 13)];

pub const DEFENSE_LAYOUT: &[LayoutTier] = &[
    LayoutTier {
        region: LayoutRegion::ShieldField,
        kind: UnitKind::Shield,
        cells: SHIELD_FIELD,
        reinforce_threshold: 12,
    },
    LayoutTier {
        region: LayoutRegion::TurretLine,
        kind: UnitKind::Turret,
        cells: TURRET_LINE,
        reinforce_threshold: 13,
    },
    LayoutTier {
        region: LayoutRegion::FrontWalls,
        kind: UnitKind::Wall,
        cells: FRONT_WALLS,
        reinforce_threshold: 4,
    },
];
