pub mod engine;
pub mod weighting;

pub use engine::*;
pub use weighting::*;
