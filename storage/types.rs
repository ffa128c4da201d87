use crate::config::{AreaConfig, RailDirection, RailLineConfig, StationConfig};
use crate::octree::{Point3D, Range3D};
use derive_more::Display;

/// 站点
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "Station(id={}, name='{}')", id, name)]
pub struct Station {
    pub id: u32,
    pub name: String,
}

/// 线路
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "RailLine(id={}, name='{}')", id, name)]
pub struct RailLine {
    /// 由存储分配，调用 `add_line` 时传入的值会被覆盖
    pub id: u32,
    pub name: String,
    pub stations: Vec<u32>,
    pub color: String,
    pub is_cycle: bool,
    pub left_return: bool,
    pub right_return: bool,
}

impl RailLine {
    pub fn new(name: &str, color: &str) -> Self {
        RailLine {
            id: 0,
            name: name.to_string(),
            stations: Vec::new(),
            color: color.to_string(),
            is_cycle: false,
            left_return: false,
            right_return: false,
        }
    }

    pub fn with_stations(mut self, stations: Vec<u32>) -> Self {
        self.stations = stations;
        self
    }

    pub fn cycle(mut self, is_cycle: bool) -> Self {
        self.is_cycle = is_cycle;
        self
    }

    pub fn returns(mut self, left_return: bool, right_return: bool) -> Self {
        self.left_return = left_return;
        self.right_return = right_return;
        self
    }

    /// 沿线路行驶时 station 的下一站
    ///
    /// reverse 为 true 时朝站点列表的前方行驶。非环线到达端点时，
    /// 只有开启对应方向的折返才会返回端点站本身，否则没有下一站。
    pub fn next_station(&self, station: u32, reverse: bool) -> Option<u32> {
        let index = self.stations.iter().position(|&id| id == station)?;
        let last = self.stations.len() - 1;

        let next = if self.is_cycle {
            if reverse {
                if index == 0 {
                    last
                } else {
                    index - 1
                }
            } else if index == last {
                0
            } else {
                index + 1
            }
        } else if reverse {
            if index == 0 {
                if !self.left_return {
                    return None;
                }
                0
            } else {
                index - 1
            }
        } else if index == last {
            if !self.right_return {
                return None;
            }
            last
        } else {
            index + 1
        };

        self.stations.get(next).copied()
    }
}

/// 站台区域
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "RailArea(id={}, world={}, range={})", id, world, range)]
pub struct RailArea {
    /// 由存储分配，调用 `add_area` 时传入的值会被覆盖
    pub id: u32,
    pub world: String,
    pub range: Range3D,
    pub direction: RailDirection,
    pub stop_point: Point3D,
    pub station: u32,
    pub line: u32,
    pub reverse: bool,
}

impl RailArea {
    pub fn new(
        world: &str,
        range: Range3D,
        direction: RailDirection,
        stop_point: Point3D,
        station: u32,
        line: u32,
    ) -> Self {
        RailArea {
            id: 0,
            world: world.to_string(),
            range,
            direction,
            stop_point,
            station,
            line,
            reverse: false,
        }
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

impl From<&Station> for StationConfig {
    fn from(station: &Station) -> Self {
        StationConfig {
            id: station.id,
            name: station.name.clone(),
        }
    }
}

impl From<&RailLine> for RailLineConfig {
    fn from(line: &RailLine) -> Self {
        RailLineConfig {
            id: line.id,
            name: line.name.clone(),
            stations: line.stations.clone(),
            color: line.color.clone(),
            is_cycle: line.is_cycle,
            left_return: line.left_return,
            right_return: line.right_return,
        }
    }
}

impl From<&RailLineConfig> for RailLine {
    fn from(config: &RailLineConfig) -> Self {
        RailLine {
            id: config.id,
            name: config.name.clone(),
            stations: config.stations.clone(),
            color: config.color.clone(),
            is_cycle: config.is_cycle,
            left_return: config.left_return,
            right_return: config.right_return,
        }
    }
}

impl From<&RailArea> for AreaConfig {
    fn from(area: &RailArea) -> Self {
        AreaConfig {
            world: area.world.clone(),
            range: area.range,
            direction: area.direction,
            stop_point: area.stop_point,
            station: area.station,
            line: area.line,
            reverse: area.reverse,
        }
    }
}

impl From<&AreaConfig> for RailArea {
    fn from(config: &AreaConfig) -> Self {
        RailArea::new(
            &config.world,
            config.range,
            config.direction,
            config.stop_point,
            config.station,
            config.line,
        )
        .reversed(config.reverse)
    }
}
