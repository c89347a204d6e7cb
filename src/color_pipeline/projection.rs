//! Color-space projection module
//!
//! Maps RGB pixel buffers onto 2-D color-ratio coordinates for scatter
//! plotting.

mod projector;
pub mod types;

pub use projector::project;
pub use types::{ColorSpace, ProjectedPoints};
