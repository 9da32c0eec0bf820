use broadside::{AttackStrategy, BoardError, Fleet, GameConfig, Knowledge};

fn strategy(rows: usize, cols: usize, fleet: Fleet) -> AttackStrategy {
    AttackStrategy::new(rows, cols, fleet).unwrap()
}

#[test]
fn test_first_shot_then_target_mode_on_2x2() {
    let mut s = strategy(2, 2, Fleet::new().with_ship(2, 1));
    assert_eq!(s.get_next_attack().unwrap(), (0, 0));

    s.register_attack(0, 0, true, false).unwrap();
    assert_eq!(s.get_next_attack().unwrap(), (1, 0));
}

#[test]
fn test_target_mode_neighbor_order() {
    let mut s = strategy(3, 3, Fleet::new().with_ship(3, 1));
    s.register_attack(1, 1, true, false).unwrap();
    // left first
    assert_eq!(s.get_next_attack().unwrap(), (0, 1));
    s.register_attack(0, 1, false, false).unwrap();
    // then right
    assert_eq!(s.get_next_attack().unwrap(), (2, 1));
    s.register_attack(2, 1, false, false).unwrap();
    // then up, then down
    assert_eq!(s.get_next_attack().unwrap(), (1, 0));
    s.register_attack(1, 0, false, false).unwrap();
    assert_eq!(s.get_next_attack().unwrap(), (1, 2));
}

#[test]
fn test_target_mode_skips_hits_without_unknown_neighbors() {
    let mut s = strategy(1, 4, Fleet::new().with_ship(3, 1));
    s.register_attack(0, 0, true, false).unwrap();
    s.register_attack(1, 0, true, false).unwrap();
    // (0, 0) is boxed in, (1, 0) still has an unknown right neighbour
    assert_eq!(s.get_next_attack().unwrap(), (2, 0));
}

#[test]
fn test_checkerboard_then_fallback_sweep() {
    let mut s = strategy(3, 3, Fleet::new().with_ship(1, 1));
    let mut order = Vec::new();
    while let Ok((x, y)) = s.get_next_attack() {
        order.push((x, y));
        s.register_attack(x, y, false, false).unwrap();
    }
    assert_eq!(
        order,
        vec![
            (0, 0), (2, 0), (1, 1), (0, 2), (2, 2),
            (1, 0), (0, 1), (2, 1), (1, 2),
        ]
    );
    assert_eq!(s.shots_fired(), 9);
}

#[test]
fn test_exhausted_board() {
    let mut s = strategy(1, 1, Fleet::new().with_ship(1, 1));
    s.register_attack(0, 0, false, false).unwrap();
    assert_eq!(s.get_next_attack().unwrap_err(), BoardError::ExhaustedBoard);
}

#[test]
fn test_sunk_marks_neighbors_excluded_and_decrements_once() {
    let mut s = strategy(3, 3, Fleet::new().with_ship(2, 1).with_ship(1, 1));
    s.register_attack(1, 0, false, false).unwrap();
    s.register_attack(1, 1, true, true).unwrap();

    let board = s.get_enemy_board();
    assert_eq!(*board.get(1, 1).unwrap(), Knowledge::Hit);
    assert_eq!(*board.get(1, 0).unwrap(), Knowledge::Miss);
    for (x, y) in [(0, 1), (2, 1), (1, 2)] {
        assert_eq!(*board.get(x, y).unwrap(), Knowledge::Excluded);
    }
    // diagonals untouched
    assert_eq!(*board.get(0, 0).unwrap(), Knowledge::Unknown);

    // first positive entry in fleet order is the one decremented
    assert_eq!(s.get_remaining_ships(), Fleet::new().with_ship(1, 1));
    assert!(!s.all_ships_sunk());
}

#[test]
fn test_sunk_exclusion_only_traces_reported_cell() {
    let mut s = strategy(2, 2, Fleet::new().with_ship(2, 1));
    s.register_attack(0, 0, true, false).unwrap();
    s.register_attack(1, 0, true, true).unwrap();
    let board = s.enemy_board();
    assert_eq!(*board.get(1, 1).unwrap(), Knowledge::Excluded);
    assert_eq!(*board.get(0, 1).unwrap(), Knowledge::Unknown);
    assert!(s.all_ships_sunk());
    assert_eq!(s.get_next_attack().unwrap(), (0, 1));
}

#[test]
fn test_remaining_ships_and_all_sunk() {
    let mut s = strategy(5, 5, Fleet::new().with_ship(3, 1).with_ship(2, 2));
    assert_eq!(s.get_remaining_ships().total_ships(), 3);
    s.register_attack(0, 0, true, true).unwrap();
    s.register_attack(4, 4, true, true).unwrap();
    assert_eq!(s.get_remaining_ships(), Fleet::new().with_ship(2, 1));
    s.register_attack(2, 2, true, true).unwrap();
    assert!(s.all_ships_sunk());
    assert!(s.get_remaining_ships().entries().is_empty());

    // an extra sunk report on an empty catalog changes nothing
    s.register_attack(0, 4, true, true).unwrap();
    assert!(s.all_ships_sunk());
}

#[test]
fn test_register_out_of_bounds() {
    let mut s = strategy(2, 3, Fleet::new().with_ship(1, 1));
    assert_eq!(
        s.register_attack(3, 0, true, false).unwrap_err(),
        BoardError::OutOfBounds { x: 3, y: 0 }
    );
    assert_eq!(s.shots_fired(), 0);
    assert_eq!(s.enemy_board().count(|k| k.is_unknown()), 6);
}

#[test]
fn test_overwrite_does_not_corrupt_state() {
    let mut s = strategy(2, 2, Fleet::new().with_ship(1, 1));
    s.register_attack(1, 1, true, false).unwrap();
    s.register_attack(1, 1, false, false).unwrap();
    assert_eq!(*s.enemy_board().get(1, 1).unwrap(), Knowledge::Miss);
    assert_eq!(s.enemy_board().count(|k| !k.is_unknown()), 1);
}

#[test]
fn test_hit_cells_and_snapshot() {
    let mut s = strategy(3, 3, Fleet::new().with_ship(2, 1));
    s.register_attack(2, 0, true, false).unwrap();
    s.register_attack(0, 2, true, false).unwrap();
    s.register_attack(1, 1, false, false).unwrap();
    assert_eq!(s.hit_cells(), vec![(2, 0), (0, 2)]);

    let mut snapshot = s.get_enemy_board();
    snapshot.fill(Knowledge::Miss);
    assert_eq!(s.enemy_board().count(|k| k.is_unknown()), 6);
    assert_eq!(s.enemy_board().to_string(), "? ? H\n? M ?\nH ? ?");
}

#[test]
fn test_from_config_validates() {
    assert!(AttackStrategy::from_config(&GameConfig::default()).is_ok());
    assert_eq!(
        AttackStrategy::new(4, 0, Fleet::new()).unwrap_err(),
        BoardError::InvalidDimensions { rows: 4, cols: 0 }
    );
}
