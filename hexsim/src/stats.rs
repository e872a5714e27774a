//! Display statistics derived from a grid.

use crate::grid::Grid;

/// Live/dead split of a grid, for the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Population {
    pub live: usize,
    pub dead: usize,
    pub percent: f32,
}

pub fn population(grid: &Grid) -> Population {
    let live = grid.live_count();
    let total = grid.rows() * grid.cols();
    Population {
        live,
        dead: total - live,
        percent: live as f32 / total as f32 * 100.0,
    }
}

/// Sub-window of `initial` around the user-drawn starting pattern.
///
/// Centered on `first` with radius
/// `max(|last.row - first.row|, |last.col - first.col|) + 1`, clipped to the
/// grid edges rather than wrapped.
pub fn start_pattern(initial: &Grid, first: (usize, usize), last: (usize, usize)) -> Option<Grid> {
    let (i, j) = first;
    let radius = i.abs_diff(last.0).max(j.abs_diff(last.1)) + 1;
    initial.window(
        i.saturating_sub(radius)..i + radius + 1,
        j.saturating_sub(radius)..j + radius + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_of_half_filled_grid() {
        let grid = Grid::from_rows(&["#.", "#."]).unwrap();
        let pop = population(&grid);
        assert_eq!(pop.live, 2);
        assert_eq!(pop.dead, 2);
        assert!((pop.percent - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn start_pattern_radius_follows_last_edit() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(10, 10, true);
        grid.set(12, 11, true);

        let window = start_pattern(&grid, (10, 10), (12, 11)).unwrap();
        // radius 3 around (10, 10)
        assert_eq!(window.dimensions(), (7, 7));
        assert!(window.get(3, 3));
        assert!(window.get(5, 4));
        assert_eq!(window.live_count(), 2);
    }

    #[test]
    fn single_edit_gives_three_by_three() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, true);
        let window = start_pattern(&grid, (2, 2), (2, 2)).unwrap();
        assert_eq!(window.to_string(), "...\n.#.\n...\n");
    }

    #[test]
    fn start_pattern_is_clipped_at_corner() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(0, 0, true);
        let window = start_pattern(&grid, (0, 0), (1, 0)).unwrap();
        // radius 2: rows 0..3, cols 0..3
        assert_eq!(window.dimensions(), (3, 3));
        assert!(window.get(0, 0));

        let window = start_pattern(&grid, (5, 5), (5, 5)).unwrap();
        assert_eq!(window.dimensions(), (2, 2));
    }
}
