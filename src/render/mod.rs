pub mod block;
pub mod cache;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod viewport;

pub use projection::{ProjectionParams, ProjectionState};
