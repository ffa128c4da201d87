pub mod client;
pub mod commands;
pub mod config;
pub mod detector;
pub mod octree;
pub mod storage;

use std::error::Error;

// 重新导出主要的公共接口
pub use octree::{Point3D, Range3D, RangeOctree};

// 重新导出常用类型，便于二进制文件使用
pub use client::{CliArgs, OutputFormatter};
pub use commands::{CommandRegistry, RailContext, Reply};
pub use config::{RailAreaConfig, RailsConfig};
pub use detector::{AreaDetector, AreaEvent};
pub use storage::{RailArea, RailLine, Station, StationStorage};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
