//! Shaded cuboids for single grid cells.
//!
//! A block's four vertical sides are classified per frame from the winding of
//! their ground edge on screen, so the shading stays correct at any camera
//! angle: back faces first, then front faces, then the top.

use glam::DVec2;

use super::projection::ProjectionState;
use super::surface::Surface;
use crate::config::{BLOCK_INSET, BlockColors, SHADOW_INSET};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

/// Classifies the side face standing on the ground edge `a -> b`.
/// Returns `None` for an edge that is vertical on screen; that face is not drawn.
pub fn classify_edge(a: DVec2, b: DVec2) -> Option<Facing> {
    if a.x > b.x {
        Some(Facing::Front)
    } else if a.x < b.x {
        Some(Facing::Back)
    } else {
        None
    }
}

/// Ground-level corners of a cell shrunk by `inset` on every side, clockwise
/// in grid space: top-left, top-right, bottom-right, bottom-left.
pub fn inset_corners(projection: &ProjectionState, col: u32, row: u32, inset: f64) -> [DVec2; 4] {
    let (x0, y0) = (col as f64 + inset, row as f64 + inset);
    let (x1, y1) = (col as f64 + 1.0 - inset, row as f64 + 1.0 - inset);
    [
        projection.to_iso(x0, y0),
        projection.to_iso(x1, y0),
        projection.to_iso(x1, y1),
        projection.to_iso(x0, y1),
    ]
}

#[inline]
fn raise(p: DVec2, height: f64) -> DVec2 {
    DVec2::new(p.x, p.y - height)
}

fn side_quad(a: DVec2, b: DVec2, height: f64) -> [DVec2; 4] {
    [a, b, raise(b, height), raise(a, height)]
}

pub fn draw_block_shadow<S: Surface + ?Sized>(
    surface: &mut S,
    projection: &ProjectionState,
    col: u32,
    row: u32,
    style: &str,
) {
    let corners = inset_corners(projection, col, row, SHADOW_INSET);
    surface.fill_quad(&corners, style);
}

pub fn draw_block<S: Surface + ?Sized>(
    surface: &mut S,
    projection: &ProjectionState,
    col: u32,
    row: u32,
    colors: &BlockColors,
) {
    let ground = inset_corners(projection, col, row, BLOCK_INSET);
    let height = projection.block_height(col, row);
    let edges = || (0..4).map(|i| (ground[i], ground[(i + 1) % 4]));

    for (a, b) in edges() {
        if classify_edge(a, b) == Some(Facing::Back) {
            surface.fill_quad(&side_quad(a, b, height), colors.left);
        }
    }
    for (a, b) in edges() {
        if classify_edge(a, b) == Some(Facing::Front) {
            let style = if b.y - a.y > 0.0 {
                colors.right
            } else {
                colors.left
            };
            surface.fill_quad(&side_quad(a, b, height), style);
        }
    }
    let top = ground.map(|p| raise(p, height));
    surface.fill_quad(&top, colors.top);
}
