pub mod camera;
pub mod high_score;
pub mod ticker;

pub use camera::Camera;
pub use high_score::{is_new_record, load_high_score, save_high_score};
pub use ticker::Ticker;
