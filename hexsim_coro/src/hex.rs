// hex.rs - Flat-top hexagon layout in offset columns
//
// Odd columns sit half a row lower than even ones:
//   x = 1.5 * s * col
//   y = sqrt(3) * s * row + (col % 2) * sqrt(3) * s / 2
// shifted by one radius so the first hexes are not cut off.

use egui::{pos2, vec2, Pos2, Vec2};

const SQRT_3: f32 = 1.732_050_8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Circumradius of one hexagon
    pub size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    pub fn new(size: f32, rows: usize, cols: usize) -> Self {
        Self { size, rows, cols }
    }

    /// Largest layout of `rows x cols` hexes fitting in a `side x side` square.
    pub fn fitting(side: f32, rows: usize, cols: usize) -> Self {
        let unit = Self::new(1.0, rows, cols).extent();
        let size = side / unit.x.max(unit.y);
        Self::new(size, rows, cols)
    }

    fn row_height(&self) -> f32 {
        SQRT_3 * self.size
    }

    /// Bounding size of the whole drawn grid.
    pub fn extent(&self) -> Vec2 {
        let cols = self.cols.max(1) as f32;
        let stagger = if self.cols > 1 { 0.5 } else { 0.0 };
        vec2(
            1.5 * self.size * (cols - 1.0) + 2.0 * self.size,
            self.row_height() * (self.rows as f32 + stagger),
        )
    }

    /// Center of a cell relative to the top-left corner of the drawing.
    pub fn center(&self, row: usize, col: usize) -> Vec2 {
        let h = self.row_height();
        let offset = if col % 2 == 1 { h / 2.0 } else { 0.0 };
        vec2(
            self.size + 1.5 * self.size * col as f32,
            h / 2.0 + h * row as f32 + offset,
        )
    }

    pub fn corners(&self, center: Pos2) -> [Pos2; 6] {
        std::array::from_fn(|k| {
            let angle = std::f32::consts::TAU / 6.0 * k as f32;
            pos2(
                center.x + self.size * angle.cos(),
                center.y + self.size * angle.sin(),
            )
        })
    }

    /// Cell under a point given relative to the top-left corner, or `None`
    /// when the point lies outside every hexagon.
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        if self.size <= 0.0 {
            return None;
        }
        let h = self.row_height();
        let approx = ((point.x - self.size) / (1.5 * self.size)).round() as i64;

        let mut best: Option<((usize, usize), f32)> = None;
        for col in approx - 1..=approx + 1 {
            if col < 0 || col >= self.cols as i64 {
                continue;
            }
            let offset = if col % 2 == 1 { h / 2.0 } else { 0.0 };
            let row = ((point.y - h / 2.0 - offset) / h).round() as i64;
            if row < 0 || row >= self.rows as i64 {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            let dist = (self.center(row, col) - point).length_sq();
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some(((row, col), dist));
            }
        }

        // Nearest center only counts when the point is inside its hexagon
        best.map(|(cell, _)| cell)
            .filter(|&(row, col)| self.contains(self.center(row, col), point))
    }

    fn contains(&self, center: Vec2, point: Vec2) -> bool {
        let d = point - center;
        let (x, y) = (d.x.abs(), d.y.abs());
        let inradius = self.size * SQRT_3 / 2.0;
        y <= inradius && SQRT_3 * x + y <= SQRT_3 * self.size
    }
}
