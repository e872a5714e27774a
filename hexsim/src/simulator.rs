// simulator.rs - One generation of the hexagonal life rule

use crate::grid::Grid;

/// Neighbor offsets as `(row, col)` deltas: north, south, west, east,
/// northeast, southwest. Northwest and southeast are not part of the set.
pub const HEX_NEIGHBORS: [(isize, isize); 6] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (1, -1),
];

/// Number of live cells among the six wrapped neighbors of `(i, j)`.
#[inline]
pub fn neighbor_sum(grid: &Grid, i: isize, j: isize) -> u8 {
    HEX_NEIGHBORS
        .iter()
        .filter(|&&(di, dj)| grid.get(i + di, j + dj))
        .count() as u8
}

/// Survival on 2 or 3 neighbors, birth on exactly 2.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 2)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation into a freshly allocated grid.
/// The input grid is only read.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    next.clear();
    for i in 0..grid.rows() as isize {
        for j in 0..grid.cols() as isize {
            let alive = next_state(grid.get(i, j), neighbor_sum(grid, i, j));
            if alive {
                next.set(i, j, true);
            }
        }
    }
    next
}
