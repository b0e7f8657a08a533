// Camera state: rotation angle and perspective strength, clamped at input time
use crate::config::{
    PERSPECTIVE_DEFAULT, PERSPECTIVE_MAX, PERSPECTIVE_RATIO, PERSPECTIVE_STEP, ROTATION_DEFAULT,
    ROTATION_STEP,
};
use crate::input::Command;
use crate::render::ProjectionParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Radians, unbounded.
    pub rotation: f64,
    /// In [0, PERSPECTIVE_MAX]; 0 means no foreshortening.
    pub perspective_strength: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            rotation: ROTATION_DEFAULT,
            perspective_strength: PERSPECTIVE_DEFAULT,
        }
    }
}

impl Camera {
    pub fn rotate(&mut self, steps: f64) {
        self.rotation += steps * ROTATION_STEP;
    }

    /// Moves perspective by whole steps, snapping to the step grid so that
    /// stepping down always reaches exactly 0.
    pub fn adjust_perspective(&mut self, steps: f64) {
        let current = (self.perspective_strength / PERSPECTIVE_STEP).round();
        self.perspective_strength =
            ((current + steps) * PERSPECTIVE_STEP).clamp(0.0, PERSPECTIVE_MAX);
    }

    /// Applies a camera command; returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = *self;
        match command {
            Command::RotateLeft => self.rotate(-1.0),
            Command::RotateRight => self.rotate(1.0),
            Command::IncreasePerspective => self.adjust_perspective(1.0),
            Command::DecreasePerspective => self.adjust_perspective(-1.0),
            _ => return false,
        }
        *self != before
    }

    pub fn projection_params(&self, grid_size: u32, viewport_width: f64) -> ProjectionParams {
        ProjectionParams {
            grid_size,
            rotation: self.rotation,
            perspective_ratio: PERSPECTIVE_RATIO,
            perspective_strength: self.perspective_strength,
            viewport_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_steps_are_five_degrees_and_unbounded() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            assert!(cam.apply(Command::RotateRight));
        }
        let expected = ROTATION_DEFAULT + 100.0 * ROTATION_STEP;
        assert!((cam.rotation - expected).abs() < 1e-9);
        assert!((ROTATION_STEP.to_degrees() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn perspective_is_clamped_and_reaches_zero() {
        let mut cam = Camera::default();
        for _ in 0..20 {
            cam.apply(Command::DecreasePerspective);
        }
        assert_eq!(cam.perspective_strength, 0.0);
        assert!(!cam.apply(Command::DecreasePerspective));
        for _ in 0..20 {
            cam.apply(Command::IncreasePerspective);
        }
        assert_eq!(cam.perspective_strength, PERSPECTIVE_MAX);
        assert!(!cam.apply(Command::IncreasePerspective));
    }

    #[test]
    fn game_commands_leave_camera_alone() {
        let mut cam = Camera::default();
        assert!(!cam.apply(Command::TogglePause));
        assert_eq!(cam, Camera::default());
    }
}
