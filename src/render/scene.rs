//! Frame compositor.
//!
//! Draw order is fixed: background, ground, grid lines, border, then every
//! shadow, then every block. Objects are depth-sorted once (painter's
//! algorithm) and both passes walk the same order, so a shadow can never land
//! on top of a block.

use super::block::{draw_block, draw_block_shadow};
use super::projection::ProjectionState;
use super::surface::Surface;
use crate::config::{BlockColors, GRID_LINE_MIN_TILE_PX, Palette};
use crate::model::{GameSnapshot, GridCoordinate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Head,
    Body,
    Food,
}

impl ObjectKind {
    pub fn colors(self, palette: &Palette) -> &BlockColors {
        match self {
            ObjectKind::Head => &palette.head,
            ObjectKind::Body => &palette.body,
            ObjectKind::Food => &palette.food,
        }
    }
}

/// Something drawn as a block this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderableObject {
    pub kind: ObjectKind,
    pub position: GridCoordinate,
}

pub fn collect_objects(snapshot: &GameSnapshot<'_>) -> Vec<RenderableObject> {
    let mut objects: Vec<RenderableObject> = snapshot
        .snake
        .iter()
        .enumerate()
        .map(|(i, &position)| RenderableObject {
            kind: if i == 0 {
                ObjectKind::Head
            } else {
                ObjectKind::Body
            },
            position,
        })
        .collect();
    if let Some(position) = snapshot.food {
        objects.push(RenderableObject {
            kind: ObjectKind::Food,
            position,
        });
    }
    objects
}

/// Sorts far-to-near by raw Y. Stable, so ties keep collection order.
pub fn depth_sort(objects: &mut [RenderableObject], projection: &ProjectionState) {
    let key = |o: &RenderableObject| {
        projection.raw_y(o.position.col as f64, o.position.row as f64)
    };
    objects.sort_by(|a, b| key(a).total_cmp(&key(b)));
}

pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    projection: &ProjectionState,
    snapshot: &GameSnapshot<'_>,
    palette: &Palette,
) {
    debug_assert_eq!(snapshot.grid_size, projection.grid_size());
    let canvas = projection.canvas();
    surface.set_fill_style(palette.background);
    surface.fill_rect(0.0, 0.0, canvas.width as f64, canvas.height as f64);

    draw_ground(surface, projection, palette);
    draw_grid_lines(surface, projection, palette);
    draw_border(surface, projection, palette);

    let mut objects = collect_objects(snapshot);
    depth_sort(&mut objects, projection);
    for o in &objects {
        draw_block_shadow(surface, projection, o.position.col, o.position.row, palette.shadow);
    }
    for o in &objects {
        draw_block(
            surface,
            projection,
            o.position.col,
            o.position.row,
            o.kind.colors(palette),
        );
    }
}

/// Checkerboard, batched into one path per parity.
fn draw_ground<S: Surface + ?Sized>(surface: &mut S, projection: &ProjectionState, palette: &Palette) {
    let n = projection.grid_size();
    let cache = projection.cache();
    for (parity, style) in [(0, palette.ground_even), (1, palette.ground_odd)] {
        surface.begin_path();
        for row in 0..n {
            for col in 0..n {
                if (col + row) % 2 == parity {
                    surface.quad(&cache.cell_corners(col, row));
                }
            }
        }
        surface.set_fill_style(style);
        surface.fill();
    }
}

/// Skipped when tiles are too small for lines to be useful.
fn draw_grid_lines<S: Surface + ?Sized>(
    surface: &mut S,
    projection: &ProjectionState,
    palette: &Palette,
) {
    if projection.tile_width() < GRID_LINE_MIN_TILE_PX {
        return;
    }
    let n = projection.grid_size();
    let cache = projection.cache();
    surface.set_stroke_style(palette.grid_line);
    surface.set_line_width(palette.grid_line_width);
    surface.begin_path();
    for i in 0..=n {
        let (a, b) = (cache.point(i, 0), cache.point(i, n));
        surface.move_to(a.x, a.y);
        surface.line_to(b.x, b.y);
        let (a, b) = (cache.point(0, i), cache.point(n, i));
        surface.move_to(a.x, a.y);
        surface.line_to(b.x, b.y);
    }
    surface.stroke();
}

fn draw_border<S: Surface + ?Sized>(surface: &mut S, projection: &ProjectionState, palette: &Palette) {
    let n = projection.grid_size();
    let cache = projection.cache();
    let outline = [
        cache.point(0, 0),
        cache.point(n, 0),
        cache.point(n, n),
        cache.point(0, n),
    ];
    surface.set_stroke_style(palette.border);
    surface.set_line_width(palette.border_width);
    surface.begin_path();
    surface.quad(&outline);
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::projection::ProjectionParams;
    use crate::render::surface::recording::{Op, Recorder};
    use std::f64::consts::PI;

    fn projection(grid_size: u32, rotation: f64) -> ProjectionState {
        ProjectionState::new(ProjectionParams {
            grid_size,
            rotation,
            perspective_ratio: 0.5,
            perspective_strength: 0.4,
            viewport_width: 300.0,
        })
    }

    fn at(col: u32, row: u32) -> GridCoordinate {
        GridCoordinate { col, row }
    }

    #[test]
    fn objects_are_tagged_head_body_food() {
        let snake = [at(3, 3), at(2, 3), at(1, 3)];
        let snapshot = GameSnapshot {
            snake: &snake,
            food: Some(at(7, 7)),
            grid_size: 10,
        };
        let kinds: Vec<ObjectKind> = collect_objects(&snapshot).iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![ObjectKind::Head, ObjectKind::Body, ObjectKind::Body, ObjectKind::Food]
        );
    }

    #[test]
    fn depth_sort_draws_far_objects_first() {
        let p = projection(10, PI / 3.0);
        let snake = [at(9, 9), at(5, 5)];
        let snapshot = GameSnapshot {
            snake: &snake,
            food: Some(at(0, 0)),
            grid_size: 10,
        };
        let mut objects = collect_objects(&snapshot);
        depth_sort(&mut objects, &p);
        let kinds: Vec<ObjectKind> = objects.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![ObjectKind::Food, ObjectKind::Body, ObjectKind::Head]);
    }

    #[test]
    fn ground_is_two_batched_fills() {
        let p = projection(10, PI / 4.0);
        let palette = Palette::default();
        let snapshot = GameSnapshot {
            snake: &[],
            food: None,
            grid_size: 10,
        };
        let mut rec = Recorder::default();
        draw(&mut rec, &p, &snapshot, &palette);
        assert_eq!(rec.fills(), vec![palette.ground_even, palette.ground_odd]);
        assert_eq!(rec.count(|op| *op == Op::ClosePath), 100 + 1);
    }

    #[test]
    fn grid_lines_are_one_stroke_when_tiles_are_large() {
        let p = projection(10, PI / 4.0);
        let palette = Palette::default();
        let snapshot = GameSnapshot {
            snake: &[],
            food: None,
            grid_size: 10,
        };
        let mut rec = Recorder::default();
        draw(&mut rec, &p, &snapshot, &palette);
        assert_eq!(rec.strokes(), vec![palette.grid_line, palette.border]);
        // 11 lines per axis, plus 3 border edges
        assert_eq!(rec.count(|op| matches!(op, Op::LineTo(..))), 22 + 100 * 3 + 3);
    }

    #[test]
    fn grid_lines_are_skipped_for_tiny_tiles() {
        let p = projection(100, PI / 4.0);
        assert!(p.tile_width() < GRID_LINE_MIN_TILE_PX);
        let palette = Palette::default();
        let snapshot = GameSnapshot {
            snake: &[],
            food: None,
            grid_size: 100,
        };
        let mut rec = Recorder::default();
        draw(&mut rec, &p, &snapshot, &palette);
        assert_eq!(rec.strokes(), vec![palette.border]);
        assert!(!rec.ops.contains(&Op::StrokeStyle(palette.grid_line.to_string())));
    }

    #[test]
    fn background_comes_first_and_shadows_before_blocks() {
        let p = projection(10, PI / 3.0);
        let palette = Palette::default();
        let snake = [at(4, 4), at(3, 4)];
        let snapshot = GameSnapshot {
            snake: &snake,
            food: Some(at(8, 1)),
            grid_size: 10,
        };
        let mut rec = Recorder::default();
        draw(&mut rec, &p, &snapshot, &palette);
        assert_eq!(rec.ops[0], Op::FillStyle(palette.background.to_string()));
        assert!(matches!(rec.ops[1], Op::FillRect(..)));

        let fills = rec.fills();
        let shadows: Vec<usize> = fills
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == palette.shadow)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(shadows, vec![2, 3, 4]);
        // One top face per object, all after the last shadow
        let tops: Vec<&String> = fills[5..]
            .iter()
            .filter(|s| {
                [palette.head.top, palette.body.top, palette.food.top].contains(&s.as_str())
            })
            .collect();
        assert_eq!(tops.len(), 3);
        // Food at (8, 1) is nearest the viewer at this angle
        assert_eq!(fills.last().map(String::as_str), Some(palette.food.top));
    }
}
