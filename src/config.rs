//! Fixed game configuration.

/// Lowest valid row/column index (the grid is 1-based).
pub const BOARD_MIN: i8 = 1;
/// Highest valid row/column index.
pub const BOARD_MAX: i8 = 10;

/// Number of ships in a fleet.
pub const NUM_SHIPS: usize = 5;

/// Well-known port used for hosting a match.
pub const DEFAULT_PORT: u16 = 5598;
