use crate::constants::*;
use crate::geometry::BoardArray;
use crate::location::*;
use crate::resources::*;
use crate::units::*;

/// Dense occupancy map for stationary units.
///
/// Mobile units are never part of the board view: they exist only inside the
/// engine's sub-turn simulation.
#[derive(Clone)]
pub struct Board {
    cells: BoardArray<Option<StationaryUnit>>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: BoardArray::new(None),
        }
    }

    pub fn stationary_at(&self, loc: Location) -> Option<StationaryUnit> {
        *self.cells.get(loc.x() as usize, loc.y() as usize)
    }

    pub fn is_occupied(&self, loc: Location) -> bool {
        self.stationary_at(loc).is_some()
    }

    /// Overwrite a cell. Exclusive occupancy is the engine's invariant; the
    /// board type just stores what the engine reports.
    pub fn set(&mut self, loc: Location, unit: Option<StationaryUnit>) {
        self.cells.set(loc.x() as usize, loc.y() as usize, unit);
    }

    /// Row-major iteration over occupied cells; deterministic scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, StationaryUnit)> + '_ {
        self.cells.iter().filter_map(|((x, y), unit)| {
            unit.map(|u| (Location::from_coords(x as u32, y as u32), u))
        })
    }

    pub fn count(&self, owner: Owner, kind: UnitKind) -> usize {
        self.iter()
            .filter(|(_, u)| u.owner == owner && u.kind == kind)
            .count()
    }

    /// Locations of one side's stationary units, in scan order.
    pub fn stationary_locations(&self, owner: Owner) -> Vec<Location> {
        self.iter()
            .filter(|(_, u)| u.owner == owner)
            .map(|(loc, _)| loc)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable view of the match at the start of a turn.
///
/// Planners read snapshots and emit commands; they never write one back.
/// The previous turn's snapshot stays valid (and untouched) after the next
/// one is taken.
#[derive(Clone)]
pub struct TurnSnapshot {
    pub turn: u32,
    pub my_health: f32,
    pub enemy_health: f32,
    pub my_resources: ResourcePool,
    pub enemy_resources: ResourcePool,
    pub board: Board,
}

impl TurnSnapshot {
    /// An empty opening-state snapshot; tests and the harness build on it.
    pub fn initial() -> Self {
        TurnSnapshot {
            turn: 0,
            my_health: STARTING_HEALTH,
            enemy_health: STARTING_HEALTH,
            my_resources: ResourcePool::default(),
            enemy_resources: ResourcePool::default(),
            board: Board::new(),
        }
    }
}
