//! One player's board: the fleet plus the attack history against it.

use std::collections::HashSet;

use rand::Rng;

use crate::common::{AttackResult, BoardError, Coordinate, Direction};
use crate::config::{BOARD_MAX, BOARD_MIN, NUM_SHIPS};
use crate::ship::{Ship, ShipKind};

/// Attempts before random placement reports failure.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// Five ships in fleet order plus the hit and miss sets. The sets are
/// disjoint and only ever grow; the fleet composition never changes after
/// construction.
///
/// The same type backs the local mirror of the enemy board, where ships stay
/// unplaced and the sets record the outcomes the peer reported.
pub struct Board {
    ships: [Ship; NUM_SHIPS],
    hits: HashSet<Coordinate>,
    misses: HashSet<Coordinate>,
}

impl Board {
    /// Empty board: unplaced fleet, no attacks recorded.
    pub fn new() -> Self {
        Self {
            ships: std::array::from_fn(|i| Ship::new(ShipKind::FLEET[i])),
            hits: HashSet::new(),
            misses: HashSet::new(),
        }
    }

    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    /// The fleet, in fixed fleet order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn hits(&self) -> &HashSet<Coordinate> {
        &self.hits
    }

    pub fn misses(&self) -> &HashSet<Coordinate> {
        &self.misses
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Loss condition: every ship sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn is_attacked(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord) || self.misses.contains(&coord)
    }

    /// True when every occupied cell of `ship` lies on the board.
    pub fn in_bounds(ship: &Ship) -> bool {
        ship.occupied_cells().all(Coordinate::in_bounds)
    }

    /// True when `ship` shares a cell with a *different* ship on this board.
    /// The checked ship's own slot is excluded, so re-placing a ship never
    /// collides with itself.
    pub fn collides(&self, ship: &Ship) -> bool {
        self.ships
            .iter()
            .filter(|other| other.kind() != ship.kind())
            .any(|other| ship.occupied_cells().any(|coord| other.covers(coord)))
    }

    /// Provisionally place `kind`, validate, and either commit or roll back
    /// to unplaced. Re-placing an already-placed ship is allowed until the
    /// owner locks the fleet in.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        anchor: Coordinate,
        direction: Direction,
    ) -> Result<(), BoardError> {
        let idx = kind.index();
        self.ships[idx].place(anchor, direction);
        if !Self::in_bounds(&self.ships[idx]) {
            self.ships[idx].clear();
            return Err(BoardError::OutOfBounds);
        }
        if self.collides(&self.ships[idx]) {
            self.ships[idx].clear();
            return Err(BoardError::Overlap);
        }
        Ok(())
    }

    /// Keep trying random anchors and directions until `kind` fits.
    pub fn place_ship_random<R: Rng>(
        &mut self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(), BoardError> {
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let anchor = Coordinate::new(
                rng.random_range(BOARD_MIN..=BOARD_MAX),
                rng.random_range(BOARD_MIN..=BOARD_MAX),
            );
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if self.place_ship(kind, anchor, direction).is_ok() {
                return Ok(());
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve an attack against this board. Ships answer in fleet order,
    /// skipping those already sunk; placements never overlap, so at most one
    /// ship can claim the coordinate. Re-attacking a coordinate is the
    /// caller's mistake and is rejected.
    pub fn attack(&mut self, coord: Coordinate) -> Result<AttackResult, BoardError> {
        if self.is_attacked(coord) {
            return Err(BoardError::AlreadyAttacked);
        }
        for ship in self.ships.iter_mut() {
            if ship.is_sunk() {
                continue;
            }
            if ship.damage(coord) {
                self.hits.insert(coord);
                return Ok(if ship.is_sunk() {
                    AttackResult::HitAndSunk(ship.kind())
                } else {
                    AttackResult::Hit
                });
            }
        }
        self.misses.insert(coord);
        Ok(AttackResult::Miss)
    }

    /// Mirror bookkeeping: the peer reported our attack at `coord` as a hit.
    pub fn record_hit(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        if self.is_attacked(coord) {
            return Err(BoardError::AlreadyAttacked);
        }
        self.hits.insert(coord);
        Ok(())
    }

    /// Mirror bookkeeping: the peer reported our attack at `coord` as a miss.
    pub fn record_miss(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        if self.is_attacked(coord) {
            return Err(BoardError::AlreadyAttacked);
        }
        self.misses.insert(coord);
        Ok(())
    }

    /// Mirror bookkeeping: the peer reported this ship sunk.
    pub fn mark_sunk(&mut self, kind: ShipKind) {
        self.ships[kind.index()].mark_sunk();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
