//! Terminal rendering of the two boards.

use crate::board::Board;
use crate::common::Coordinate;
use crate::config::{BOARD_MAX, BOARD_MIN};
use crate::ship::ShipKind;

/// Clear the terminal and move the cursor home.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

/// Redraw the whole view: enemy board on top, own board below, fleet status
/// for both sides, and the legend. Pure display; nothing is mutated.
pub fn render(enemy: &Board, own: &Board, message: &str) {
    clear_screen();
    println!("=================  Enemy Board  =================");
    println!("  {}", message);
    println!();
    print_grid(enemy, false);
    print_fleet_status(enemy, "Enemy fleet");
    println!();
    println!("=================  Your Board  ==================");
    println!();
    print_grid(own, true);
    print_fleet_status(own, "Your fleet");
    print_legend();
}

fn column_letter(col: i8) -> char {
    (b'A' + (col - 1) as u8) as char
}

fn print_grid(board: &Board, reveal_ships: bool) {
    let separator = format!("    +{}", "---+".repeat(BOARD_MAX as usize));
    print!("    ");
    for col in BOARD_MIN..=BOARD_MAX {
        print!("  {} ", column_letter(col));
    }
    println!();
    println!("{}", separator);
    for row in BOARD_MIN..=BOARD_MAX {
        print!(" {:2} |", row);
        for col in BOARD_MIN..=BOARD_MAX {
            print!(" {} |", cell_symbol(board, Coordinate::new(row, col), reveal_ships));
        }
        println!();
        println!("{}", separator);
    }
}

/// Hits and misses overlay ship symbols, except a sunk ship shows through
/// as `*` everywhere it lies.
fn cell_symbol(board: &Board, coord: Coordinate, reveal_ships: bool) -> char {
    let ship = board.ships().iter().find(|ship| ship.covers(coord));
    if let Some(ship) = ship {
        if ship.is_sunk() {
            return '*';
        }
    }
    if board.hits().contains(&coord) {
        return 'X';
    }
    if board.misses().contains(&coord) {
        return 'O';
    }
    match ship {
        Some(ship) if reveal_ships => ship.symbol(),
        _ => ' ',
    }
}

fn print_fleet_status(board: &Board, title: &str) {
    println!("    ===== {} =====", title);
    for kind in ShipKind::FLEET {
        let marker = if board.ship(kind).is_sunk() { '*' } else { ' ' };
        println!(
            "     {} {} ({}) - length {}",
            marker,
            kind.name(),
            kind.symbol(),
            kind.length()
        );
    }
}

fn print_legend() {
    println!();
    println!("    Legend: X = hit, O = miss, * = sunk ship, letters = your ships");
}
