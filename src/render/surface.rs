// Minimal 2D path API the compositor draws through

use glam::DVec2;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Appends a closed quadrilateral to the current path.
    fn quad(&mut self, points: &[DVec2; 4]) {
        self.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            self.line_to(p.x, p.y);
        }
        self.close_path();
    }

    fn fill_quad(&mut self, points: &[DVec2; 4], style: &str) {
        self.set_fill_style(style);
        self.begin_path();
        self.quad(points);
        self.fill();
    }
}

// Path calls go through the inherent methods explicitly; plain `self.fill()`
// would resolve back to the trait method.
impl Surface for CanvasRenderingContext2d {
    fn set_fill_style(&mut self, style: &str) {
        CanvasRenderingContext2d::set_fill_style_str(self, style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        CanvasRenderingContext2d::set_stroke_style_str(self, style);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
