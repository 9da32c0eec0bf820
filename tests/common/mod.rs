#![allow(dead_code)]

use broadside::{BoardSetup, Grid, Tile};

/// Groups occupied cells into orthogonally connected components.
pub fn components(board: &Grid<Tile>) -> Vec<Vec<(usize, usize)>> {
    let mut seen = Grid::new(board.rows(), board.cols(), false);
    let mut out = Vec::new();
    for ((x, y), tile) in board.iter() {
        if tile.is_water() || *seen.get(x, y).unwrap() {
            continue;
        }
        let mut stack = vec![(x, y)];
        let mut cells = Vec::new();
        seen.set(x, y, true).unwrap();
        while let Some((cx, cy)) = stack.pop() {
            cells.push((cx, cy));
            for (nx, ny) in board.neighbors(cx, cy) {
                if !board.get(nx, ny).unwrap().is_water() && !*seen.get(nx, ny).unwrap() {
                    seen.set(nx, ny, true).unwrap();
                    stack.push((nx, ny));
                }
            }
        }
        cells.sort_by_key(|&(cx, cy)| (cy, cx));
        out.push(cells);
    }
    out
}

/// Checks the layout using only the grid: every connected group of ship
/// cells is one straight run carrying a single id, of that id's length, and
/// the number of runs per id matches the fleet.
pub fn assert_valid_layout(setup: &BoardSetup) {
    let board = setup.get_board();
    let fleet = setup.fleet();
    let groups = components(&board);
    for cells in &groups {
        let id = board.get(cells[0].0, cells[0].1).unwrap().ship_id().unwrap();
        assert!(
            cells.iter().all(|&(x, y)| *board.get(x, y).unwrap() == Tile::Ship(id)),
            "mixed ids in one run: {:?}\n{}",
            cells,
            board
        );
        let same_row = cells.iter().all(|&(_, y)| y == cells[0].1);
        let same_col = cells.iter().all(|&(x, _)| x == cells[0].0);
        assert!(same_row || same_col, "run is not straight: {:?}\n{}", cells, board);
        assert_eq!(Some(cells.len()), fleet.length_of(id), "wrong length\n{}", board);
    }
    for entry in fleet.iter() {
        let runs = groups
            .iter()
            .filter(|c| *board.get(c[0].0, c[0].1).unwrap() == Tile::Ship(entry.id))
            .count();
        assert_eq!(runs, entry.count, "ship {} count\n{}", entry.id, board);
    }
    assert_eq!(setup.board_stats().occupied_spaces, fleet.total_cells());
}

/// Fire at `(x, y)` and report `(is_hit, is_sunk)`.
pub fn fire(defender: &BoardSetup, shots: &mut Grid<bool>, x: usize, y: usize) -> (bool, bool) {
    shots.set(x, y, true).unwrap();
    match defender.placement_at(x, y) {
        Some(ship) => (true, ship.is_sunk(shots)),
        None => (false, false),
    }
}
