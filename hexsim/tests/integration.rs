//! Integration tests for the hexsim engine

use std::collections::HashSet;
use std::sync::Arc;

use hexsim::patterns::apply_random_pattern;
use hexsim::simulator::{neighbor_sum, HEX_NEIGHBORS};
use hexsim::{coro, step, Config, Grid, Session, Tick, PATTERNS};

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    apply_random_pattern(&mut grid, seed);
    grid
}

#[test]
fn test_step_is_deterministic_and_pure() {
    let grid = random_grid(30, 40, 2024);
    let before = grid.clone();

    let a = step(&grid);
    let b = step(&grid);

    assert_eq!(a, b);
    assert_eq!(grid, before);
}

#[test]
fn test_wrap_around() {
    let grid = random_grid(7, 11, 5);
    let (r, c) = (7isize, 11isize);
    for i in 0..r {
        for j in 0..c {
            let v = grid.get(i, j);
            assert_eq!(v, grid.get(i + r, j));
            assert_eq!(v, grid.get(i, j + c));
            assert_eq!(v, grid.get(i - r, j - c));
        }
    }
}

#[test]
fn test_all_dead_grid_is_stable() {
    let grid = Grid::new(13, 9).unwrap();
    let next = step(&grid);
    assert!(next.is_empty());
    assert_eq!(next.dimensions(), (13, 9));
}

/// Places `count` live neighbors around (3, 3) and returns the resulting
/// state of the center after one step.
fn center_after_step(center_alive: bool, count: usize) -> bool {
    let mut grid = Grid::new(7, 7).unwrap();
    grid.set(3, 3, center_alive);
    for &(di, dj) in HEX_NEIGHBORS.iter().take(count) {
        grid.set(3 + di, 3 + dj, true);
    }
    assert_eq!(neighbor_sum(&grid, 3, 3) as usize, count);
    step(&grid).get(3, 3)
}

#[test]
fn test_birth_rule() {
    for count in 0..=6 {
        assert_eq!(center_after_step(false, count), count == 2, "birth with {count} neighbors");
    }
}

#[test]
fn test_survival_rule() {
    for count in 0..=6 {
        let survives = count == 2 || count == 3;
        assert_eq!(center_after_step(true, count), survives, "survival with {count} neighbors");
    }
}

#[test]
fn test_single_cell_on_three_by_three() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set(1, 1, true);

    let expected: HashSet<(usize, usize)> = HEX_NEIGHBORS
        .iter()
        .map(|&(di, dj)| grid.wrap(1 + di, 1 + dj))
        .collect();
    assert_eq!(expected.len(), 6);

    for i in 0..3 {
        for j in 0..3 {
            let sum = neighbor_sum(&grid, i, j);
            assert!(sum < 2, "cell ({i}, {j}) reached {sum}");
            let is_neighbor = expected.contains(&(i as usize, j as usize));
            assert_eq!(sum == 1, is_neighbor, "cell ({i}, {j})");
        }
    }

    assert!(step(&grid).is_empty());
}

#[test]
fn test_copy_is_independent() {
    let grid = random_grid(10, 10, 99);
    let mut copy = grid.clone();
    for i in 0..10 {
        for j in 0..10 {
            assert_eq!(copy.get(i, j), grid.get(i, j));
        }
    }
    let was = grid.get(4, 4);
    copy.toggle(4, 4);
    assert_eq!(grid.get(4, 4), was);
}

#[test]
fn test_every_pattern_runs() {
    for pattern in PATTERNS {
        let mut session = Session::new(40, 40).unwrap();
        session.apply_pattern(pattern);
        assert_eq!(session.live_cells(), pattern.cells.len(), "{}", pattern.name);
        for _ in 0..20 {
            session.tick();
        }
        assert_eq!(session.generation(), 20);
        assert!(session.start_pattern().is_some());
    }
}

#[test]
fn test_session_from_default_config() {
    let config = Config::default();
    let mut session = Session::from_config(&config).unwrap();
    assert_eq!(session.grid().dimensions(), (config.grid.rows, config.grid.cols));

    session.toggle(0, 0);
    session.toggle(1, 0);
    session.start();
    let ticks: Vec<Tick> = (0..3).map(|_| session.tick()).collect();
    assert_eq!(ticks, vec![Tick::Advanced, Tick::Advanced, Tick::Cycle]);
    assert!(!session.is_running());
}

#[tokio::test]
async fn test_row_coroutines_drive_session() {
    let mut session = Session::new(24, 18).unwrap();
    session.randomize(11);
    let mut reference = session.grid().clone();

    for _ in 0..10 {
        let snapshot = Arc::new(session.grid().clone());
        let next = coro::step_rows(snapshot).await.unwrap();
        session.commit(next).unwrap();
        reference = step(&reference);
        assert_eq!(session.grid(), &reference);
    }
    assert_eq!(session.generation(), 10);
}
