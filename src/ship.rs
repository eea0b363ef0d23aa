//! Fleet definitions and per-ship placement and damage state.

use serde::{Deserialize, Serialize};

use crate::common::{Coordinate, Direction};
use crate::config::NUM_SHIPS;

/// The five ship classes, in fleet order. Attack resolution scans ships in
/// this order, and a sunk report on the wire names the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipKind {
    Destroyer,
    Submarine,
    Cruiser,
    Battleship,
    AircraftCarrier,
}

impl ShipKind {
    pub const FLEET: [ShipKind; NUM_SHIPS] = [
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::Cruiser,
        ShipKind::Battleship,
        ShipKind::AircraftCarrier,
    ];

    /// Number of cells the ship occupies.
    pub fn length(self) -> usize {
        match self {
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 3,
            ShipKind::Cruiser => 3,
            ShipKind::Battleship => 4,
            ShipKind::AircraftCarrier => 5,
        }
    }

    /// Single-character display symbol while afloat.
    pub fn symbol(self) -> char {
        match self {
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
            ShipKind::Cruiser => 'C',
            ShipKind::Battleship => 'B',
            ShipKind::AircraftCarrier => 'A',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Battleship => "Battleship",
            ShipKind::AircraftCarrier => "Aircraft Carrier",
        }
    }

    /// 0-based fleet slot, declaration order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a class up by its display symbol, case-insensitively.
    pub fn from_symbol(ch: char) -> Option<ShipKind> {
        ShipKind::FLEET
            .into_iter()
            .find(|kind| kind.symbol() == ch.to_ascii_uppercase())
    }
}

/// One cell of a placed ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coordinate,
    damaged: bool,
}

impl Cell {
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn damaged(&self) -> bool {
        self.damaged
    }
}

/// A single ship: its class, its occupied cells, and the damage dealt to it.
///
/// Created unplaced. `place` may overwrite the cells any number of times
/// before the owner locks the fleet in; damage only ever accumulates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    sunk: bool,
    cells: Vec<Cell>,
}

impl Ship {
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            sunk: false,
            cells: Vec::new(),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Display symbol: the class symbol, or `*` once sunk.
    pub fn symbol(&self) -> char {
        if self.sunk {
            '*'
        } else {
            self.kind.symbol()
        }
    }

    /// Provisionally occupy `length` consecutive cells from `anchor`,
    /// stepping in `direction`. Overwrites any prior placement. Performs no
    /// bounds or collision validation; the board confirms or rolls back.
    pub fn place(&mut self, anchor: Coordinate, direction: Direction) {
        self.cells.clear();
        self.sunk = false;
        let mut coord = anchor;
        for _ in 0..self.kind.length() {
            self.cells.push(Cell {
                coord,
                damaged: false,
            });
            coord = coord.step(direction);
        }
    }

    /// Roll a provisional placement back to unplaced.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.sunk = false;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ordered coordinates the ship currently spans.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    pub fn covers(&self, coord: Coordinate) -> bool {
        self.cells.iter().any(|cell| cell.coord == coord)
    }

    /// Damage the cell at `coord` if this ship occupies it. Re-damaging a
    /// cell is harmless. Returns whether the coordinate belonged to the
    /// ship; the sunk flag flips once every cell is damaged.
    pub fn damage(&mut self, coord: Coordinate) -> bool {
        let Some(cell) = self.cells.iter_mut().find(|cell| cell.coord == coord) else {
            return false;
        };
        cell.damaged = true;
        if self.cells.iter().all(Cell::damaged) {
            self.sunk = true;
        }
        true
    }

    /// Mark sunk without cell bookkeeping. Mirror fleets never hold cells;
    /// they learn about sinkings from the peer's outcome reports.
    pub fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}
