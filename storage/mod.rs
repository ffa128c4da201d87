#[allow(clippy::module_inception)]
pub mod storage;
pub mod types;

pub use storage::{StationStorage, StorageError};
pub use types::{RailArea, RailLine, Station};
