#[allow(clippy::module_inception)]
pub mod detector;
pub mod event;

pub use detector::{AreaDetector, TrackedArea};
pub use event::AreaEvent;
