//! 站台数据文件
//!
//! 站点、线路和区域以扁平列表保存在一个可手工编辑的 TOML 文件中；
//! 八叉树从不序列化，每次加载时由区域列表重建。

use super::ConfigError;
use crate::octree::{Point3D, Range3D};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 列车停靠时的朝向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RailDirection {
    North,
    South,
    East,
    West,
}

/// 站点配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub id: u32,
    pub name: String,
}

/// 线路配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RailLineConfig {
    pub id: u32,
    pub name: String,
    /// 按行驶顺序排列的站点 id
    #[serde(default)]
    pub stations: Vec<u32>,
    /// 线路颜色，形如 "#0ED145"
    pub color: String,
    #[serde(default)]
    pub is_cycle: bool,
    /// 非环线在首站反向行驶后是否折返
    #[serde(default)]
    pub left_return: bool,
    /// 非环线在末站正向行驶后是否折返
    #[serde(default)]
    pub right_return: bool,
}

/// 站台区域配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AreaConfig {
    pub world: String,
    pub range: Range3D,
    pub direction: RailDirection,
    pub stop_point: Point3D,
    pub station: u32,
    pub line: u32,
    #[serde(default)]
    pub reverse: bool,
}

/// 站台数据文件结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RailsConfig {
    #[serde(default)]
    pub stations: Vec<StationConfig>,
    #[serde(default)]
    pub lines: Vec<RailLineConfig>,
    #[serde(default)]
    pub areas: Vec<AreaConfig>,
}

impl RailsConfig {
    /// 从 TOML 文件加载；文件不存在时返回空数据
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(RailsConfig::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 保存到 TOML 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
