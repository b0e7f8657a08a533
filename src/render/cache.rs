// Projected screen position of every grid-line intersection

use glam::DVec2;

/// `(n+1) x (n+1)` table of intersection points for an `n x n` grid, stored
/// row-major. Always rebuilt in full; there is no incremental update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectionCache {
    side: usize,
    points: Vec<DVec2>,
}

impl ProjectionCache {
    pub fn build(grid_size: u32, project: impl Fn(f64, f64) -> DVec2) -> Self {
        let side = grid_size as usize + 1;
        let mut points = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                points.push(project(col as f64, row as f64));
            }
        }
        Self { side, points }
    }

    /// Number of intersections along one axis (`grid_size + 1`).
    #[cfg(test)]
    pub fn side(&self) -> usize {
        self.side
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn point(&self, col: u32, row: u32) -> DVec2 {
        self.points[row as usize * self.side + col as usize]
    }

    /// Ground corners of a cell: top-left, top-right, bottom-right,
    /// bottom-left in grid space.
    #[inline]
    pub fn cell_corners(&self, col: u32, row: u32) -> [DVec2; 4] {
        [
            self.point(col, row),
            self.point(col + 1, row),
            self.point(col + 1, row + 1),
            self.point(col, row + 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_square_with_one_extra_line() {
        let cache = ProjectionCache::build(4, |x, y| DVec2::new(x, y));
        assert_eq!(cache.side(), 5);
        assert_eq!(cache.len(), 25);
    }

    #[test]
    fn points_are_indexed_row_then_col() {
        let cache = ProjectionCache::build(3, |x, y| DVec2::new(x * 10.0, y * 100.0));
        assert_eq!(cache.point(2, 1), DVec2::new(20.0, 100.0));
        assert_eq!(
            cache.cell_corners(1, 2),
            [
                DVec2::new(10.0, 200.0),
                DVec2::new(20.0, 200.0),
                DVec2::new(20.0, 300.0),
                DVec2::new(10.0, 300.0),
            ]
        );
    }
}
