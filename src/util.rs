// Utility helpers shared by the view and the renderer

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(msg);
    // Native builds (unit tests) have no console to write to
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Whole degrees for display, wrapped into [0, 360).
pub fn format_degrees(radians: f64) -> String {
    let deg = radians.to_degrees().rem_euclid(360.0).round() as i64 % 360;
    format!("{}°", deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degrees_wrap_negative_and_full_turns() {
        assert_eq!(format_degrees(PI / 4.0), "45°");
        assert_eq!(format_degrees(-PI / 36.0), "355°");
        assert_eq!(format_degrees(2.0 * PI), "0°");
    }
}
