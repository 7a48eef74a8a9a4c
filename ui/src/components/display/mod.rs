pub mod loading_indicator;
pub mod submit_notice;

pub use loading_indicator::*;
pub use submit_notice::*;
