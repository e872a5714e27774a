// patterns.rs - Seed shapes for the hex sandbox

use crate::grid::Grid;
use crate::simulator::HEX_NEIGHBORS;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A named shape given as `(row, col)` offsets from the grid center.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Bounding box of the offsets as `((min_row, min_col), (max_row, max_col))`.
    pub fn bounds(&self) -> Option<((isize, isize), (isize, isize))> {
        let (&(r0, c0), rest) = self.cells.split_first()?;
        Some(rest.iter().fold(((r0, c0), (r0, c0)), |((r_lo, c_lo), (r_hi, c_hi)), &(r, c)| {
            ((r_lo.min(r), c_lo.min(c)), (r_hi.max(r), c_hi.max(c)))
        }))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Domino",
        cells: &[(0, 0), (1, 0)],
    },
    Pattern {
        name: "Wedge",
        cells: &[(0, 0), (0, 1), (1, 0)],
    },
    Pattern {
        name: "Ring",
        cells: &HEX_NEIGHBORS,
    },
    Pattern {
        name: "Bar",
        cells: &[(0, -2), (0, -1), (0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Diagonal",
        cells: &[(-2, 2), (-1, 1), (0, 0), (1, -1), (2, -2)],
    },
    Pattern {
        name: "Comb",
        cells: &[
            (0, -3), (0, -2), (0, -1), (0, 0), (0, 1), (0, 2), (0, 3),
            (1, -3), (1, -1), (1, 1), (1, 3),
        ],
    },
];

/// Row and column of the grid center, where pattern offset `(0, 0)` lands.
pub fn center(grid: &Grid) -> (isize, isize) {
    ((grid.rows() / 2) as isize, (grid.cols() / 2) as isize)
}

pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    // Clear grid first
    grid.clear();

    let (ci, cj) = center(grid);
    for &(row, col) in pattern.cells {
        grid.set(ci + row, cj + col, true);
    }
}

pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) {
    grid.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..grid.rows() as isize {
        for col in 0..grid.cols() as isize {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(row, col, (seed % 3) == 0); // ~33% chance of being alive
        }
    }
}
