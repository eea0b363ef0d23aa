//! Wire messages exchanged between peers.

use serde::{Deserialize, Serialize};

use crate::common::{AttackResult, Coordinate};

/// One frame's payload, bincode-encoded behind the transport's 4-byte
/// big-endian length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Fleet placement finished; sent by both sides.
    AllPlaced,
    /// Host's signal that both fleets are ready. Unblocks the joiner.
    StartGame,
    /// Attack at a 1-based coordinate.
    Attack { row: u8, col: u8 },
    /// Result of the attack just received.
    Outcome(AttackResult),
}

impl Message {
    /// Build an attack message from an in-bounds coordinate.
    pub fn attack(coord: Coordinate) -> Self {
        Message::Attack {
            row: coord.row as u8,
            col: coord.col as u8,
        }
    }
}

/// Validate a received attack coordinate. The sender is supposed to have
/// checked bounds already; a violation here means a misbehaving peer, and
/// the session treats it as fatal.
pub fn decode_attack(row: u8, col: u8) -> Option<Coordinate> {
    let coord = Coordinate::new(row as i8, col as i8);
    coord.in_bounds().then_some(coord)
}
