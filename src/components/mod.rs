pub mod app;
pub mod camera_controls;
pub mod controls_panel;
pub mod game_over_overlay;
pub mod game_view;
pub mod intro_overlay;
pub mod stats_panel;
