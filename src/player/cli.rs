//! Interactive stdin/stdout player.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, Coordinate, Direction};
use crate::config::{BOARD_MAX, BOARD_MIN};
use crate::player::Player;
use crate::session::is_fresh_target;
use crate::ship::ShipKind;
use crate::ui;

pub struct CliPlayer {
    rng: SmallRng,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Parse a column-letter + row-number coordinate such as `A1` or `g10`.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or_else(|| "empty input".to_string())?
        .to_ascii_uppercase();
    let last_col = (b'A' + (BOARD_MAX - 1) as u8) as char;
    if !('A'..=last_col).contains(&col_ch) {
        return Err(format!("column must be A-{}, got '{}'", last_col, col_ch));
    }
    let row: i8 = chars
        .as_str()
        .parse()
        .map_err(|_| format!("row must be a number {}-{}", BOARD_MIN, BOARD_MAX))?;
    if !(BOARD_MIN..=BOARD_MAX).contains(&row) {
        return Err(format!(
            "row must be {}-{}, got {}",
            BOARD_MIN, BOARD_MAX, row
        ));
    }
    Ok(Coordinate::new(row, (col_ch as u8 - b'A' + 1) as i8))
}

/// Parse `up`/`down`/`left`/`right` or a first letter into a direction.
pub fn parse_direction(input: &str) -> Result<Direction, String> {
    match input.to_ascii_lowercase().as_str() {
        "up" | "u" => Ok(Direction::North),
        "down" | "d" => Ok(Direction::South),
        "left" | "l" => Ok(Direction::West),
        "right" | "r" => Ok(Direction::East),
        other => Err(format!(
            "direction must be up, down, left or right, got '{}'",
            other
        )),
    }
}

impl Player for CliPlayer {
    /// Placement loop: pick a ship by symbol (picking it again re-places
    /// it), `random` auto-places whatever is missing, and once every ship is
    /// on the board the user locks the fleet in or keeps re-placing.
    fn place_ships(&mut self, board: &mut Board) -> Result<(), BoardError> {
        let blank = Board::new();
        let mut notice = String::new();
        loop {
            ui::render(&blank, board, "Place your fleet (see legend for symbols).");
            if !notice.is_empty() {
                println!("{}", notice);
                notice.clear();
            }

            if board.all_placed() {
                let input =
                    prompt("Enter 'L' to lock in your placement or 'R' to re-place a ship: ");
                match input.to_ascii_lowercase().as_str() {
                    "l" => return Ok(()),
                    "r" => {}
                    _ => {
                        notice = "Invalid input: enter 'L' to lock in or 'R' to re-place.".into();
                        continue;
                    }
                }
            }

            let input = prompt("Ship symbol to place (e.g. 'D'), or 'random' for the rest: ");
            if input.eq_ignore_ascii_case("random") {
                for kind in ShipKind::FLEET {
                    if !board.ship(kind).is_placed() {
                        board.place_ship_random(&mut self.rng, kind)?;
                    }
                }
                continue;
            }
            let kind = match input.chars().next().and_then(ShipKind::from_symbol) {
                Some(kind) if input.len() == 1 => kind,
                _ => {
                    notice = "Invalid input: enter one ship symbol (see legend).".into();
                    continue;
                }
            };

            let placement = prompt(&format!(
                "Anchor and direction for the {} (e.g. 'A1 down'): ",
                kind.name()
            ));
            let Some((coord_str, dir_str)) = placement.split_once(' ') else {
                notice = "Response must be a coordinate and a direction, e.g. 'B10 up'.".into();
                continue;
            };
            let anchor = match parse_coord(coord_str.trim()) {
                Ok(coord) => coord,
                Err(err) => {
                    notice = err;
                    continue;
                }
            };
            let direction = match parse_direction(dir_str.trim()) {
                Ok(direction) => direction,
                Err(err) => {
                    notice = err;
                    continue;
                }
            };
            if let Err(err) = board.place_ship(kind, anchor, direction) {
                notice = format!(
                    "Invalid placement: {}. Check board boundaries and other ships.",
                    err
                );
            }
        }
    }

    fn select_target(&mut self, enemy: &Board, own: &Board) -> Coordinate {
        ui::render(enemy, own, "Your turn, attack!");
        loop {
            let input = prompt("Coordinate to attack, e.g. 'A1' or 'g10': ");
            let coord = match parse_coord(&input) {
                Ok(coord) => coord,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };
            if !is_fresh_target(enemy, coord) {
                println!("You already attacked there! Try another location.");
                continue;
            }
            return coord;
        }
    }

    fn attack_resolved(&mut self, coord: Coordinate, result: AttackResult) {
        match result {
            AttackResult::Miss => println!("Splash. {} was a miss.", coord),
            AttackResult::Hit => println!("Direct hit at {}!", coord),
            AttackResult::HitAndSunk(kind) => {
                println!("Hit at {} - you sank their {}!", coord, kind.name())
            }
        }
    }

    fn attack_received(&mut self, coord: Coordinate, result: AttackResult) {
        match result {
            AttackResult::Miss => println!("The peer attacked {} and missed.", coord),
            AttackResult::Hit => println!("The peer hit your ship at {}!", coord),
            AttackResult::HitAndSunk(kind) => {
                println!("The peer sank your {} at {}!", kind.name(), coord)
            }
        }
    }

    fn status_update(&mut self, enemy: &Board, own: &Board, message: &str) {
        ui::render(enemy, own, message);
    }
}
