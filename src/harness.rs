//! Offline match harness.
//!
//! An in-memory [`EngineFacade`] implementation with the same observable
//! contract as the live engine: placements no-op on blocked or unaffordable
//! cells, oversized quantities are capped by the budget, upgrades are
//! idempotent, and path queries walk around stationary obstacles. The
//! harness exists so the planners can be exercised natively, without a
//! match server; it deliberately simulates no combat.

use crate::constants::*;
use crate::engine::*;
use crate::geometry::*;
use crate::location::*;
use crate::resources::*;
use crate::snapshot::*;
use crate::units::*;
use log::*;
use pathfinding::directed::bfs::bfs;

const STRUCTURE_REGEN: f32 = 5.0;
const MOBILE_REGEN: f32 = 5.0;

pub struct MatchHarness {
    geometry: BoardGeometry,
    roster: UnitRoster,
    board: Board,
    my_resources: ResourcePool,
    enemy_resources: ResourcePool,
    my_health: f32,
    enemy_health: f32,
    turn: u32,
    submitted: bool,
    mobile_spawns: Vec<(UnitKind, Location, u32)>,
}

impl MatchHarness {
    pub fn new(roster: UnitRoster) -> Self {
        MatchHarness {
            geometry: BoardGeometry::new(),
            roster,
            board: Board::new(),
            my_resources: ResourcePool::new(40.0, 5.0),
            enemy_resources: ResourcePool::new(40.0, 5.0),
            my_health: STARTING_HEALTH,
            enemy_health: STARTING_HEALTH,
            turn: 0,
            submitted: false,
            mobile_spawns: Vec::new(),
        }
    }

    /// Advance to the next turn: regenerate both pools, reopen submission.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.submitted = false;
        self.my_resources.structure += STRUCTURE_REGEN;
        self.my_resources.mobile += MOBILE_REGEN;
        self.enemy_resources.structure += STRUCTURE_REGEN;
        self.enemy_resources.mobile += MOBILE_REGEN;
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn set_my_resources(&mut self, pool: ResourcePool) {
        self.my_resources = pool;
    }

    pub fn my_resources(&self) -> ResourcePool {
        self.my_resources
    }

    pub fn set_enemy_health(&mut self, health: f32) {
        self.enemy_health = health;
    }

    /// Drop a stationary unit on the board directly, bypassing budgets.
    /// Scenario setup only; gameplay placement goes through the facade.
    pub fn put_unit(&mut self, kind: UnitKind, owner: Owner, at: Location) {
        self.board.set(at, Some(StationaryUnit::new(kind, owner)));
    }

    pub fn remove_unit(&mut self, at: Location) {
        self.board.set(at, None);
    }

    pub fn occupant(&self, at: Location) -> Option<StationaryUnit> {
        self.board.stationary_at(at)
    }

    /// Mobile spawns accepted so far, in order: `(kind, cell, count)`.
    pub fn mobile_spawns(&self) -> &[(UnitKind, Location, u32)] {
        &self.mobile_spawns
    }

    pub fn was_submitted(&self) -> bool {
        self.submitted
    }

    fn passable(&self, loc: Location) -> bool {
        self.geometry.in_arena(loc) && !self.board.is_occupied(loc)
    }

    fn place_stationary(&mut self, kind: UnitKind, at: Location) -> u32 {
        if !self.geometry.in_arena(at) || !at.on_home_half() || self.board.is_occupied(at) {
            return 0;
        }
        let cost = self.roster.stats(kind).cost;
        if !self.my_resources.spend(UnitClass::Stationary, cost) {
            return 0;
        }
        self.board
            .set(at, Some(StationaryUnit::new(kind, Owner::Friendly)));
        1
    }

    fn place_mobile(&mut self, kind: UnitKind, at: Location, quantity: u32) -> u32 {
        if !self.geometry.is_home_edge(at) || self.board.is_occupied(at) {
            return 0;
        }
        let cost = self.roster.stats(kind).cost;
        let mut placed = 0;
        for _ in 0..quantity {
            if !self.my_resources.spend(UnitClass::Mobile, cost) {
                break;
            }
            placed += 1;
        }
        if placed > 0 {
            self.mobile_spawns.push((kind, at, placed));
        }
        placed
    }
}

impl EngineFacade for MatchHarness {
    fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot {
            turn: self.turn,
            my_health: self.my_health,
            enemy_health: self.enemy_health,
            my_resources: self.my_resources,
            enemy_resources: self.enemy_resources,
            board: self.board.clone(),
        }
    }

    fn attempt_place(&mut self, kind: UnitKind, at: Location, quantity: u32) -> u32 {
        if quantity == 0 {
            return 0;
        }
        match kind.class() {
            // A stationary kind occupies the cell after the first success;
            // extra quantity cannot take effect.
            UnitClass::Stationary => self.place_stationary(kind, at),
            UnitClass::Mobile => self.place_mobile(kind, at, quantity),
        }
    }

    fn attempt_upgrade(&mut self, at: Location) -> u32 {
        let unit = match self.board.stationary_at(at) {
            Some(unit) if unit.owner == Owner::Friendly && !unit.upgraded => unit,
            _ => return 0,
        };
        let cost = self.roster.stats(unit.kind).cost;
        if !self.my_resources.spend(UnitClass::Stationary, cost) {
            return 0;
        }
        self.board.set(
            at,
            Some(StationaryUnit {
                upgraded: true,
                ..unit
            }),
        );
        1
    }

    fn find_path(&self, from: Location) -> Option<Vec<Location>> {
        if !self.passable(from) {
            return None;
        }
        bfs(
            &from,
            |&loc| {
                NEIGHBORS_4
                    .iter()
                    .filter_map(|&(dx, dy)| loc.offset(dx, dy))
                    .filter(|&next| self.passable(next))
                    .collect::<Vec<_>>()
            },
            |&loc| self.geometry.is_foe_edge(loc),
        )
    }

    fn attackers_at(&self, target: Location, owner: Owner) -> Vec<StationaryUnit> {
        self.board
            .iter()
            .filter(|(_, unit)| unit.owner == owner)
            .filter(|(loc, unit)| {
                let stats = self.roster.stats(unit.kind);
                stats.damage > 0.0 && loc.distance_squared(target) <= stats.range * stats.range
            })
            .map(|(_, unit)| unit)
            .collect()
    }

    fn submit_turn(&mut self) {
        if self.submitted {
            warn!("turn {} submitted twice, ignoring", self.turn);
            return;
        }
        self.submitted = true;
    }
}
