//! Grid-to-screen projection: a rotated, squashed ground plane with optional
//! perspective foreshortening toward the far edge.
//!
//! `ProjectionState` is a plain value. Any change to grid size, rotation,
//! perspective or window width builds a new one from scratch (including its
//! intersection cache); nothing is patched in place.

use std::f64::consts::SQRT_2;

use glam::{DMat2, DVec2};

use super::cache::ProjectionCache;
use super::viewport::CanvasSize;
use crate::config::{BLOCK_HEIGHT_FACTOR, MIN_DEPTH_RANGE};

/// Inputs of a projection rebuild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    pub grid_size: u32,
    /// Camera angle in radians; unbounded.
    pub rotation: f64,
    /// Vertical squash of the ground plane.
    pub perspective_ratio: f64,
    /// Foreshortening strength, already clamped by the caller. 0 disables it.
    pub perspective_strength: f64,
    pub viewport_width: f64,
}

#[derive(Clone, Debug)]
pub struct ProjectionState {
    params: ProjectionParams,
    /// Columns are the screen-space images of the grid x and y unit vectors.
    basis: DMat2,
    base_block_height: f64,
    raw_max_y: f64,
    raw_center_x: f64,
    /// `None` means orthographic (infinite focal length).
    focal_length: Option<f64>,
    canvas: CanvasSize,
    origin: DVec2,
    cache: ProjectionCache,
}

impl ProjectionState {
    /// Recomputes everything for `params`: basis, perspective, canvas box,
    /// origin offset and the intersection cache.
    ///
    /// # Panics
    /// If `params.grid_size` is 0.
    pub fn new(params: ProjectionParams) -> Self {
        assert!(params.grid_size > 0, "grid size must be positive");
        let n = params.grid_size as f64;
        let ratio = params.perspective_ratio;
        let (sin, cos) = params.rotation.sin_cos();
        // Fits the diamond silhouette into the viewport at any angle
        let scale = params.viewport_width / (n * SQRT_2);
        let basis = DMat2::from_cols(
            DVec2::new(cos * scale, sin * scale * ratio),
            DVec2::new(-sin * scale, cos * scale * ratio),
        );
        // Independent of the angle so blocks keep their height while rotating
        let base_block_height = scale * ratio * SQRT_2 * BLOCK_HEIGHT_FACTOR;

        let corners = [
            DVec2::ZERO,
            basis * DVec2::new(n, 0.0),
            basis * DVec2::new(0.0, n),
            basis * DVec2::new(n, n),
        ];
        let min = corners.iter().fold(DVec2::INFINITY, |acc, c| acc.min(*c));
        let max = corners.iter().fold(DVec2::NEG_INFINITY, |acc, c| acc.max(*c));
        let depth_range = (max.y - min.y).max(MIN_DEPTH_RANGE);
        let focal_length = if params.perspective_strength > 0.0 {
            Some(depth_range / params.perspective_strength)
        } else {
            None
        };

        let mut state = Self {
            params,
            basis,
            base_block_height,
            raw_max_y: max.y,
            raw_center_x: (min.x + max.x) * 0.5,
            focal_length,
            canvas: CanvasSize::for_viewport(params.viewport_width, ratio),
            origin: DVec2::ZERO,
            cache: ProjectionCache::default(),
        };
        // Pin the grid centre to the canvas centre so rotation pivots in place
        let center = state.to_iso(n * 0.5, n * 0.5);
        state.origin = state.canvas.center() - center;
        let cache = ProjectionCache::build(params.grid_size, |x, y| state.to_iso(x, y));
        state.cache = cache;
        state
    }

    /// Position before perspective and origin translation.
    #[inline]
    pub fn raw(&self, gx: f64, gy: f64) -> DVec2 {
        self.basis * DVec2::new(gx, gy)
    }

    /// Depth key used for painter's ordering; larger is nearer the viewer.
    #[inline]
    pub fn raw_y(&self, gx: f64, gy: f64) -> f64 {
        gx * self.basis.x_axis.y + gy * self.basis.y_axis.y
    }

    /// Foreshortening factor at `depth` below the near edge: 1 at the near
    /// edge, falling toward 0 with distance.
    #[inline]
    pub fn perspective_scale(&self, depth: f64) -> f64 {
        match self.focal_length {
            Some(f) => f / (f + depth),
            None => 1.0,
        }
    }

    /// Projects a (possibly fractional) grid coordinate to canvas pixels.
    pub fn to_iso(&self, gx: f64, gy: f64) -> DVec2 {
        let raw = self.raw(gx, gy);
        let depth = self.raw_max_y - raw.y;
        let scale = self.perspective_scale(depth);
        DVec2::new(
            self.raw_center_x + (raw.x - self.raw_center_x) * scale,
            self.raw_max_y - depth * scale,
        ) + self.origin
    }

    /// Block height at a grid point, shrunk by the same factor as the ground.
    pub fn block_height_at(&self, gx: f64, gy: f64) -> f64 {
        let depth = self.raw_max_y - self.raw_y(gx, gy);
        self.base_block_height * self.perspective_scale(depth)
    }

    /// Block height for a cell, evaluated at the cell centre.
    pub fn block_height(&self, col: u32, row: u32) -> f64 {
        self.block_height_at(col as f64 + 0.5, row as f64 + 0.5)
    }

    /// On-screen width of one tile; grid lines are hidden below a threshold.
    pub fn tile_width(&self) -> f64 {
        self.basis.x_axis.x.abs() + self.basis.y_axis.x.abs()
    }

    pub fn grid_size(&self) -> u32 {
        self.params.grid_size
    }

    pub fn focal_length(&self) -> Option<f64> {
        self.focal_length
    }

    #[cfg(test)]
    pub fn raw_max_y(&self) -> f64 {
        self.raw_max_y
    }

    #[cfg(test)]
    pub fn base_block_height(&self) -> f64 {
        self.base_block_height
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[cfg(test)]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn cache(&self) -> &ProjectionCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn params(grid_size: u32, rotation: f64, strength: f64) -> ProjectionParams {
        ProjectionParams {
            grid_size,
            rotation,
            perspective_ratio: 0.5,
            perspective_strength: strength,
            viewport_width: 300.0,
        }
    }

    fn angles() -> Vec<f64> {
        (0..24).map(|i| i as f64 * PI / 12.0 - 0.3).collect()
    }

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn to_iso_is_deterministic() {
        let p = ProjectionState::new(params(10, 0.7, 0.4));
        for row in 0..=10 {
            for col in 0..=10 {
                let a = p.to_iso(col as f64, row as f64);
                let b = p.to_iso(col as f64, row as f64);
                assert_eq!(a.x.to_bits(), b.x.to_bits());
                assert_eq!(a.y.to_bits(), b.y.to_bits());
            }
        }
    }

    #[test]
    fn grid_center_lands_on_canvas_center() {
        for rotation in angles() {
            for strength in [0.0, 0.2, 0.4, 0.8] {
                for grid_size in [5, 10, 17] {
                    let p = ProjectionState::new(params(grid_size, rotation, strength));
                    let half = grid_size as f64 * 0.5;
                    assert_close(p.to_iso(half, half), p.canvas().center());
                }
            }
        }
    }

    #[test]
    fn canvas_size_ignores_rotation() {
        let a = ProjectionState::new(params(10, 0.0, 0.4));
        let b = ProjectionState::new(params(10, 1.1, 0.4));
        assert_eq!(a.canvas(), b.canvas());
    }

    #[test]
    fn center_block_height_is_rotation_invariant() {
        for strength in [0.0, 0.3, 0.8] {
            let a = ProjectionState::new(params(9, 0.2, strength));
            let b = ProjectionState::new(params(9, 2.3, strength));
            // Cell (4, 4) is centred on the grid centre of a 9x9 board
            assert!((a.block_height(4, 4) - b.block_height(4, 4)).abs() < EPS);
            assert!((a.block_height_at(4.5, 4.5) - b.block_height_at(4.5, 4.5)).abs() < EPS);
        }
    }

    #[test]
    fn nearer_blocks_are_taller() {
        let p = ProjectionState::new(params(10, PI / 3.0, 0.4));
        // Raw Y grows with both coordinates at this angle
        let far = p.block_height(0, 0);
        let mid = p.block_height(5, 5);
        let near = p.block_height(9, 9);
        assert!(far < mid && mid < near, "{far} {mid} {near}");
        assert!(near <= p.base_block_height());
    }

    #[test]
    fn zero_strength_is_the_affine_transform() {
        let p = ProjectionState::new(params(10, 0.9, 0.0));
        assert_eq!(p.focal_length(), None);
        for (gx, gy) in [(0.0, 0.0), (3.5, 7.25), (10.0, 10.0), (10.0, 0.0)] {
            assert_close(p.to_iso(gx, gy), p.raw(gx, gy) + p.origin());
            assert!((p.block_height_at(gx, gy) - p.base_block_height()).abs() < EPS);
        }
    }

    #[test]
    fn depth_range_is_floored() {
        let flat = ProjectionState::new(ProjectionParams {
            perspective_ratio: 0.0,
            ..params(10, 0.5, 0.4)
        });
        assert_eq!(flat.focal_length(), Some(MIN_DEPTH_RANGE / 0.4));
        let p = flat.to_iso(0.0, 0.0);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn cache_matches_to_iso() {
        let p = ProjectionState::new(params(6, 1.3, 0.5));
        assert_eq!(p.cache().side(), 7);
        for row in 0..=6 {
            for col in 0..=6 {
                assert_eq!(p.cache().point(col, row), p.to_iso(col as f64, row as f64));
            }
        }
    }

    #[test]
    fn far_corners_straddle_the_center_line() {
        let p = ProjectionState::new(params(10, PI / 3.0, 0.4));
        let center = p.canvas().center();
        assert_close(p.to_iso(5.0, 5.0), center);
        let far = p.to_iso(0.0, 0.0);
        let near = p.to_iso(10.0, 10.0);
        assert!(far.y < center.y && near.y > center.y, "{far:?} {near:?}");
        // (0,0) sits on the back edge, (10,10) on the front edge
        assert!((p.raw_y(10.0, 10.0) - p.raw_max_y()).abs() < EPS);
        for (gx, gy) in [(10.0, 0.0), (0.0, 10.0), (10.0, 10.0)] {
            assert!(p.raw_y(0.0, 0.0) < p.raw_y(gx, gy));
        }
    }

    #[test]
    fn far_corners_are_point_symmetric_without_perspective() {
        let p = ProjectionState::new(params(10, PI / 3.0, 0.0));
        let center = p.canvas().center();
        let far = p.to_iso(0.0, 0.0);
        let near = p.to_iso(10.0, 10.0);
        assert_close((far + near) * 0.5, center);
    }

    #[test]
    fn tile_width_shrinks_with_grid_size() {
        let small = ProjectionState::new(params(10, PI / 4.0, 0.0));
        let large = ProjectionState::new(params(100, PI / 4.0, 0.0));
        assert!(small.tile_width() > 5.0);
        assert!(large.tile_width() < 5.0);
    }

    #[test]
    #[should_panic(expected = "grid size must be positive")]
    fn empty_grid_is_rejected() {
        ProjectionState::new(params(0, 0.0, 0.0));
    }
}
