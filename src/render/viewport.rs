// Viewport sizing: available iso width from the window, and the padded canvas box

use glam::DVec2;

use crate::config::{
    CANVAS_PADDING_PX, FALLBACK_WINDOW_WIDTH, ISO_MAX_WIDTH, ISO_MIN_WIDTH, PAGE_CHROME_PX,
};

/// Width the rotated grid silhouette may occupy for a given window width.
pub fn iso_width(window_width: f64) -> f64 {
    (window_width - PAGE_CHROME_PX).clamp(ISO_MIN_WIDTH, ISO_MAX_WIDTH)
}

/// Reads the current window width and derives the iso width from it.
pub fn window_iso_width() -> f64 {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WINDOW_WIDTH);
    iso_width(width)
}

/// Canvas pixel dimensions.
///
/// Sized from the viewport width and perspective ratio only, so rotating the
/// camera moves content inside the canvas without ever resizing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn for_viewport(viewport_width: f64, perspective_ratio: f64) -> Self {
        let pad = 2.0 * CANVAS_PADDING_PX;
        Self {
            width: (viewport_width + pad).ceil() as u32,
            height: (viewport_width * perspective_ratio + pad).ceil() as u32,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width as f64 * 0.5, self.height as f64 * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_width_subtracts_page_chrome() {
        assert_eq!(iso_width(500.0), 430.0);
    }

    #[test]
    fn iso_width_is_clamped() {
        assert_eq!(iso_width(100.0), ISO_MIN_WIDTH);
        assert_eq!(iso_width(4000.0), ISO_MAX_WIDTH);
    }

    #[test]
    fn canvas_box_depends_on_width_and_ratio() {
        let size = CanvasSize::for_viewport(300.0, 0.5);
        assert_eq!(size.width, 348);
        assert_eq!(size.height, 198);
        assert_eq!(size.center(), DVec2::new(174.0, 99.0));
    }
}
