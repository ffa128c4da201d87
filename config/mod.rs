pub mod rails;

use crate::octree::Range3D;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use rails::{AreaConfig, RailDirection, RailLineConfig, RailsConfig, StationConfig};

/// 世界可用的最低方块高度
pub const MIN_Y: i32 = -64;
/// 世界可用的最高方块高度
pub const MAX_Y: i32 = 320;

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load config: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Failed to parse TOML: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// RailArea 主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailAreaConfig {
    /// 站台数据文件（站点、线路、区域）
    #[serde(default = "default_rails_file")]
    pub rails_file: PathBuf,

    /// 各世界的水平范围，只有在这里出现的世界才会建立索引
    ///
    /// 注意：config 库会把键名转为小写，世界名应使用小写。
    #[serde(default)]
    pub world_size: BTreeMap<String, WorldSizeConfig>,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 世界水平范围，两个角点顺序任意
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSizeConfig {
    pub x1: i32,
    pub z1: i32,
    pub x2: i32,
    pub z2: i32,
}

impl WorldSizeConfig {
    /// 该世界索引的根边界，垂直方向覆盖 MIN_Y..=MAX_Y
    pub fn bound(&self) -> Range3D {
        Range3D::new(
            self.x1.min(self.x2),
            MIN_Y,
            self.z1.min(self.z2),
            self.x1.max(self.x2),
            MAX_Y,
            self.z1.max(self.z2),
        )
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_rails_file() -> PathBuf {
    PathBuf::from("rails.toml")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

fn default_world_size() -> WorldSizeConfig {
    WorldSizeConfig {
        x1: -10000,
        z1: -10000,
        x2: 10000,
        z2: 10000,
    }
}

// ============================================================================
// 实现
// ============================================================================

impl Default for RailAreaConfig {
    fn default() -> Self {
        Self {
            rails_file: default_rails_file(),
            world_size: BTreeMap::from([("world".to_string(), default_world_size())]),
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl RailAreaConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（RAILAREA__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use railarea::config::RailAreaConfig;
    ///
    /// let config = RailAreaConfig::from_file("railarea.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("RAILAREA").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查日志级别、日志输出与各世界范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" => {
                if self.logging.log_file.is_none() {
                    return Err(ConfigError::Invalid(
                        "Log output is 'file' but log_file path is not specified".to_string(),
                    ));
                }
            }
            other => {
                return Err(ConfigError::Invalid(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                )))
            }
        }

        for (world, size) in &self.world_size {
            if size.x1 == size.x2 || size.z1 == size.z2 {
                return Err(ConfigError::Invalid(format!(
                    "World '{}' has an empty horizontal size",
                    world
                )));
            }
        }

        Ok(())
    }

    /// 站台数据文件路径，相对路径以主配置文件所在目录为基准
    pub fn rails_path(&self, config_path: &Path) -> PathBuf {
        if self.rails_file.is_absolute() {
            return self.rails_file.clone();
        }
        match config_path.parent() {
            Some(dir) => dir.join(&self.rails_file),
            None => self.rails_file.clone(),
        }
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 RailArea Configuration:");
        println!("   Rails File:  {}", self.rails_file.display());
        for (world, size) in &self.world_size {
            println!("   World:       {} {}", world, size.bound());
        }
        println!();
        println!("   Log Level:   {}", self.logging.level);
        println!("   Log Output:  {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:    {}", log_file.display());
        }
        println!();
    }
}
