// grid.rs - Toroidal hex lattice storage

use crate::error::GridError;

/// Row-major boolean lattice whose edges wrap around in both directions.
///
/// Every coordinate passed to [`Grid::get`], [`Grid::set`] and
/// [`Grid::toggle`] is reduced modulo the grid size first, so there are no
/// border cells and no out-of-bounds accesses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Zero-sized dimensions are rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }
        let size = rows
            .checked_mul(cols)
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self { rows, cols, cells: vec![false; size] })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Reduces a signed coordinate pair onto the torus.
    pub fn wrap(&self, i: isize, j: isize) -> (usize, usize) {
        (
            i.rem_euclid(self.rows as isize) as usize,
            j.rem_euclid(self.cols as isize) as usize,
        )
    }

    #[inline]
    fn index(&self, i: isize, j: isize) -> usize {
        let (row, col) = self.wrap(i, j);
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, i: isize, j: isize) -> bool {
        self.cells[self.index(i, j)]
    }

    pub fn set(&mut self, i: isize, j: isize, alive: bool) {
        let idx = self.index(i, j);
        self.cells[idx] = alive;
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, i: isize, j: isize) -> bool {
        let idx = self.index(i, j);
        self.cells[idx] = !self.cells[idx];
        self.cells[idx]
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// One row of cells, `row` taken modulo the row count.
    pub fn row(&self, row: isize) -> &[bool] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols]
    }

    /// Coordinates of every live cell in row-major order.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Copies the rectangle `rows x cols` out of the grid without wrapping.
    /// Both ranges are clipped to the grid; `None` if nothing is left.
    pub fn window(
        &self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> Option<Grid> {
        let rows = rows.start.min(self.rows)..rows.end.min(self.rows);
        let cols = cols.start.min(self.cols)..cols.end.min(self.cols);
        let mut sub = Grid::new(rows.len(), cols.len()).ok()?;
        for (r, row) in rows.enumerate() {
            let src = row * self.cols;
            let dst = r * sub.cols;
            sub.cells[dst..dst + sub.cols].copy_from_slice(&self.cells[src + cols.start..src + cols.end]);
        }
        Some(sub)
    }

    /// Builds a grid from rows of `'#'` (alive) and `'.'` (dead).
    /// Rows shorter than the longest one are padded with dead cells.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Grid::new(rows.len(), cols)?;
        for (i, line) in rows.iter().enumerate() {
            for (j, ch) in line.chars().enumerate() {
                grid.set(i as isize, j as isize, ch == '#');
            }
        }
        Ok(grid)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
