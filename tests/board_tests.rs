use broadside::{AttackResult, Board, BoardError, Coordinate, Direction, ShipKind};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Whole fleet heading east, one ship per row starting at column 1.
fn place_fleet(board: &mut Board) {
    for (i, kind) in ShipKind::FLEET.into_iter().enumerate() {
        board
            .place_ship(kind, Coordinate::new(i as i8 + 1, 1), Direction::East)
            .unwrap();
    }
    assert!(board.all_placed());
}

#[test]
fn out_of_bounds_placement_rolls_back() {
    let mut board = Board::new();
    let err = board
        .place_ship(ShipKind::Destroyer, Coordinate::new(1, 10), Direction::East)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
    assert!(!board.ship(ShipKind::Destroyer).is_placed());
}

#[test]
fn north_edge_placement_rolls_back() {
    let mut board = Board::new();
    let err = board
        .place_ship(ShipKind::Cruiser, Coordinate::new(2, 4), Direction::North)
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);
    assert!(!board.ship(ShipKind::Cruiser).is_placed());
}

#[test]
fn overlapping_placement_rolls_back() {
    let mut board = Board::new();
    board
        .place_ship(ShipKind::Destroyer, Coordinate::new(1, 1), Direction::East)
        .unwrap();
    let err = board
        .place_ship(ShipKind::Submarine, Coordinate::new(1, 2), Direction::South)
        .unwrap_err();
    assert_eq!(err, BoardError::Overlap);
    assert!(!board.ship(ShipKind::Submarine).is_placed());
    // the resident ship is untouched
    assert!(board.ship(ShipKind::Destroyer).is_placed());
}

#[test]
fn replacing_a_ship_never_collides_with_itself() {
    let mut board = Board::new();
    board
        .place_ship(ShipKind::Destroyer, Coordinate::new(1, 1), Direction::East)
        .unwrap();
    board
        .place_ship(ShipKind::Destroyer, Coordinate::new(1, 2), Direction::East)
        .unwrap();
    let cells: Vec<_> = board.ship(ShipKind::Destroyer).occupied_cells().collect();
    assert_eq!(cells, vec![Coordinate::new(1, 2), Coordinate::new(1, 3)]);
}

#[test]
fn attack_hit_then_sink_reports_the_ship() {
    let mut board = Board::new();
    place_fleet(&mut board);

    assert_eq!(
        board.attack(Coordinate::new(1, 1)).unwrap(),
        AttackResult::Hit
    );
    assert!(!board.ship(ShipKind::Destroyer).is_sunk());
    assert_eq!(
        board.attack(Coordinate::new(1, 2)).unwrap(),
        AttackResult::HitAndSunk(ShipKind::Destroyer)
    );
    assert!(board.ship(ShipKind::Destroyer).is_sunk());
    assert!(!board.all_sunk());
    assert!(board.hits().contains(&Coordinate::new(1, 1)));
    assert!(board.hits().contains(&Coordinate::new(1, 2)));
}

#[test]
fn attack_miss_is_recorded() {
    let mut board = Board::new();
    place_fleet(&mut board);
    assert_eq!(
        board.attack(Coordinate::new(10, 10)).unwrap(),
        AttackResult::Miss
    );
    assert!(board.misses().contains(&Coordinate::new(10, 10)));
    assert!(!board.hits().contains(&Coordinate::new(10, 10)));
}

#[test]
fn duplicate_attack_is_rejected_and_state_unchanged() {
    let mut board = Board::new();
    place_fleet(&mut board);
    board.attack(Coordinate::new(1, 1)).unwrap();
    let err = board.attack(Coordinate::new(1, 1)).unwrap_err();
    assert_eq!(err, BoardError::AlreadyAttacked);
    assert_eq!(board.hits().len(), 1);
    assert!(board.misses().is_empty());
}

#[test]
fn board_is_lost_only_when_every_ship_sank() {
    let mut board = Board::new();
    place_fleet(&mut board);
    let mut targets = Vec::new();
    for (i, kind) in ShipKind::FLEET.into_iter().enumerate() {
        for c in 0..kind.length() {
            targets.push(Coordinate::new(i as i8 + 1, c as i8 + 1));
        }
    }
    let last = targets.pop().unwrap();
    for coord in targets {
        board.attack(coord).unwrap();
        assert!(!board.all_sunk());
    }
    assert_eq!(
        board.attack(last).unwrap(),
        AttackResult::HitAndSunk(ShipKind::AircraftCarrier)
    );
    assert!(board.all_sunk());
}

#[test]
fn mirror_recording_stays_disjoint() {
    let mut mirror = Board::new();
    mirror.record_hit(Coordinate::new(2, 2)).unwrap();
    mirror.record_miss(Coordinate::new(3, 3)).unwrap();
    assert_eq!(
        mirror.record_hit(Coordinate::new(3, 3)).unwrap_err(),
        BoardError::AlreadyAttacked
    );
    assert_eq!(
        mirror.record_miss(Coordinate::new(2, 2)).unwrap_err(),
        BoardError::AlreadyAttacked
    );
    assert!(mirror.is_attacked(Coordinate::new(2, 2)));
    assert!(mirror.is_attacked(Coordinate::new(3, 3)));
}

#[test]
fn mirror_sinkings_add_up_to_a_loss() {
    let mut mirror = Board::new();
    for kind in ShipKind::FLEET {
        assert!(!mirror.all_sunk());
        mirror.mark_sunk(kind);
    }
    assert!(mirror.all_sunk());
}

#[test]
fn random_placement_fills_the_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    for kind in ShipKind::FLEET {
        board.place_ship_random(&mut rng, kind).unwrap();
    }
    assert!(board.all_placed());
    for ship in board.ships() {
        assert!(Board::in_bounds(ship));
        assert!(!board.collides(ship));
        assert_eq!(ship.occupied_cells().count(), ship.kind().length());
    }
}
