// coro.rs - Generation step with one async coroutine per row

use std::sync::Arc;

use crate::error::SimError;
use crate::grid::Grid;
use crate::simulator::{neighbor_sum, next_state};

/// Row coroutine: computes the next state of every cell in `row`,
/// yielding to the scheduler after each cell.
pub async fn process_row(row: usize, snapshot: Arc<Grid>) -> (usize, Vec<bool>) {
    let i = row as isize;
    let mut row_result = Vec::with_capacity(snapshot.cols());
    for j in 0..snapshot.cols() as isize {
        let alive = next_state(snapshot.get(i, j), neighbor_sum(&snapshot, i, j));
        row_result.push(alive);

        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row, row_result)  // Return (row_id, completed_row)
}

/// Spawns a coroutine per row over a shared read-only snapshot and
/// assembles their results into the next generation.
///
/// Must be called from inside a tokio runtime.
pub async fn step_rows(snapshot: Arc<Grid>) -> Result<Grid, SimError> {
    let mut next = Grid::clone(&snapshot);
    next.clear();

    let handles: Vec<_> = (0..snapshot.rows())
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot))))
        .collect();

    for handle in handles {
        let (row_index, completed_row) = handle.await?;
        for (j, alive) in completed_row.into_iter().enumerate() {
            if alive {
                next.set(row_index as isize, j as isize, true);
            }
        }
    }

    log::trace!("row coroutines finished for {} rows", snapshot.rows());
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::apply_random_pattern;
    use crate::simulator::step;

    #[tokio::test]
    async fn matches_synchronous_step() {
        let mut grid = Grid::new(17, 23).unwrap();
        apply_random_pattern(&mut grid, 7);
        let snapshot = Arc::new(grid);

        let mut expected = step(&snapshot);
        let mut actual = step_rows(Arc::clone(&snapshot)).await.unwrap();
        assert_eq!(actual, expected);

        for _ in 0..5 {
            expected = step(&expected);
            actual = step_rows(Arc::new(actual)).await.unwrap();
        }
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn single_row_returns_its_index() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set(0, 1, true);
        grid.set(2, 1, true);
        let (row, cells) = process_row(1, Arc::new(grid)).await;
        assert_eq!(row, 1);
        assert_eq!(cells, vec![false, true, false, false]);
    }
}
