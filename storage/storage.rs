use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use crate::config::RailsConfig;
use crate::octree::Range3D;

use super::types::{RailArea, RailLine, Station};

/// 存储错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Malformed range {0}: min must not exceed max on any axis")]
    MalformedRange(Range3D),
    #[error("Stop point of area is outside its range {0}")]
    StopPointOutside(Range3D),
    #[error("Unknown station: {0}")]
    UnknownStation(u32),
    #[error("Unknown line: {0}")]
    UnknownLine(u32),
    #[error("Unknown area: {0}")]
    UnknownArea(u32),
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("No {kind} id left after {id}")]
    IdOverflow { kind: &'static str, id: u32 },
    #[error("Range {range} is already used by area {existing} in world '{world}'")]
    DuplicateRange {
        world: String,
        range: Range3D,
        existing: u32,
    },
}

/// 站点、线路与站台区域的存储
///
/// 八叉树只保存 `Range3D`，这里维护"世界 + 区域值 -> 站台区域"的映射，
/// 用来从查询结果找回站台元数据。同一世界中不允许两个站台使用相同的区域值。
#[derive(Debug, Default)]
pub struct StationStorage {
    next_station_id: u32,
    next_line_id: u32,
    next_area_id: u32,

    stations: BTreeMap<u32, Station>,
    lines: BTreeMap<u32, RailLine>,
    areas: BTreeMap<u32, RailArea>,

    // 世界 -> 区域值 -> 区域 id
    range_lookup: HashMap<String, HashMap<Range3D, u32>>,
}

impl StationStorage {
    pub fn new() -> Self {
        StationStorage {
            next_station_id: 1,
            next_line_id: 1,
            next_area_id: 1,
            ..Default::default()
        }
    }

    /// 由站台数据文件构建
    ///
    /// 站点和线路保留文件中的 id；不合法的区域会被跳过并记录警告。
    pub fn from_config(config: &RailsConfig) -> Result<Self, StorageError> {
        let mut storage = StationStorage::new();

        for station in &config.stations {
            if storage.stations.contains_key(&station.id) {
                return Err(StorageError::DuplicateId {
                    kind: "station",
                    id: station.id,
                });
            }
            storage.stations.insert(
                station.id,
                Station {
                    id: station.id,
                    name: station.name.clone(),
                },
            );
            storage.next_station_id = storage
                .next_station_id
                .max(following_id("station", station.id)?);
        }

        for line in &config.lines {
            if storage.lines.contains_key(&line.id) {
                return Err(StorageError::DuplicateId {
                    kind: "line",
                    id: line.id,
                });
            }
            storage.check_stations(&line.stations)?;
            storage.lines.insert(line.id, RailLine::from(line));
            storage.next_line_id = storage
                .next_line_id
                .max(following_id("line", line.id)?);
        }

        for area in &config.areas {
            if let Err(e) = storage.add_area(RailArea::from(area)) {
                warn!("Skipping area in world '{}': {}", area.world, e);
            }
        }

        info!(
            "Loaded {} stations, {} lines and {} areas",
            storage.stations.len(),
            storage.lines.len(),
            storage.areas.len()
        );
        Ok(storage)
    }

    /// 导出为站台数据文件结构
    pub fn to_config(&self) -> RailsConfig {
        RailsConfig {
            stations: self.stations.values().map(Into::into).collect(),
            lines: self.lines.values().map(Into::into).collect(),
            areas: self.areas.values().map(Into::into).collect(),
        }
    }

    // === 站点管理 ===

    pub fn station(&self, id: u32) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|s| s.name == name)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// 添加站点，返回新站点 id
    pub fn add_station(&mut self, name: &str) -> Result<u32, StorageError> {
        let id = self.next_station_id;
        self.next_station_id = following_id("station", id)?;
        self.stations.insert(
            id,
            Station {
                id,
                name: name.to_string(),
            },
        );
        debug!("Added station {} '{}'", id, name);
        Ok(id)
    }

    /// 删除站点
    ///
    /// 站点会从所有线路中移除，属于该站点的区域一并删除并返回。
    pub fn remove_station(&mut self, id: u32) -> Result<Vec<RailArea>, StorageError> {
        if self.stations.remove(&id).is_none() {
            return Err(StorageError::UnknownStation(id));
        }
        for line in self.lines.values_mut() {
            line.stations.retain(|&s| s != id);
        }
        let removed = self.remove_areas_where(|area| area.station == id);
        debug!("Removed station {} and {} areas", id, removed.len());
        Ok(removed)
    }

    // === 线路管理 ===

    pub fn line(&self, id: u32) -> Option<&RailLine> {
        self.lines.get(&id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &RailLine> {
        self.lines.values()
    }

    /// 添加线路，线路上的站点必须已存在
    pub fn add_line(&mut self, mut line: RailLine) -> Result<u32, StorageError> {
        self.check_stations(&line.stations)?;
        let id = self.next_line_id;
        self.next_line_id = following_id("line", id)?;
        line.id = id;
        debug!("Added line {} '{}'", id, line.name);
        self.lines.insert(id, line);
        Ok(id)
    }

    /// 删除线路，属于该线路的区域一并删除并返回
    pub fn remove_line(&mut self, id: u32) -> Result<Vec<RailArea>, StorageError> {
        if self.lines.remove(&id).is_none() {
            return Err(StorageError::UnknownLine(id));
        }
        let removed = self.remove_areas_where(|area| area.line == id);
        debug!("Removed line {} and {} areas", id, removed.len());
        Ok(removed)
    }

    // === 区域管理 ===

    pub fn area(&self, id: u32) -> Option<&RailArea> {
        self.areas.get(&id)
    }

    pub fn areas(&self) -> impl Iterator<Item = &RailArea> {
        self.areas.values()
    }

    pub fn areas_in_world<'a>(&'a self, world: &'a str) -> impl Iterator<Item = &'a RailArea> {
        self.areas.values().filter(move |area| area.world == world)
    }

    /// 出现过区域的世界
    pub fn worlds(&self) -> Vec<&str> {
        let mut worlds: Vec<&str> = self.range_lookup.keys().map(String::as_str).collect();
        worlds.sort_unstable();
        worlds
    }

    /// 由八叉树返回的区域值找回站台区域
    pub fn area_by_range(&self, world: &str, range: &Range3D) -> Option<&RailArea> {
        let id = self.range_lookup.get(world)?.get(range)?;
        self.areas.get(id)
    }

    /// 添加站台区域，返回新区域 id
    ///
    /// 在写入八叉树之前完成全部校验：区域合法、停靠点在区域内、
    /// 站点与线路存在、同一世界中区域值不重复。
    pub fn add_area(&mut self, mut area: RailArea) -> Result<u32, StorageError> {
        if !area.range.is_well_formed() {
            return Err(StorageError::MalformedRange(area.range));
        }
        if !area.range.contains(&area.stop_point) {
            return Err(StorageError::StopPointOutside(area.range));
        }
        if !self.stations.contains_key(&area.station) {
            return Err(StorageError::UnknownStation(area.station));
        }
        if !self.lines.contains_key(&area.line) {
            return Err(StorageError::UnknownLine(area.line));
        }
        if let Some(&existing) = self
            .range_lookup
            .get(&area.world)
            .and_then(|ranges| ranges.get(&area.range))
        {
            return Err(StorageError::DuplicateRange {
                world: area.world.clone(),
                range: area.range,
                existing,
            });
        }

        let id = self.next_area_id;
        self.next_area_id = following_id("area", id)?;
        area.id = id;
        self.range_lookup
            .entry(area.world.clone())
            .or_default()
            .insert(area.range, id);
        debug!("Added area {}", area);
        self.areas.insert(id, area);
        Ok(id)
    }

    /// 删除站台区域
    pub fn remove_area(&mut self, id: u32) -> Result<RailArea, StorageError> {
        let area = self.areas.remove(&id).ok_or(StorageError::UnknownArea(id))?;
        self.forget_range(&area);
        debug!("Removed area {}", area);
        Ok(area)
    }

    /// 站台区域的下一站
    pub fn next_station(&self, area_id: u32) -> Option<&Station> {
        let area = self.areas.get(&area_id)?;
        let line = self.lines.get(&area.line)?;
        let next = line.next_station(area.station, area.reverse)?;
        self.stations.get(&next)
    }

    fn check_stations(&self, stations: &[u32]) -> Result<(), StorageError> {
        match stations.iter().find(|id| !self.stations.contains_key(id)) {
            Some(&missing) => Err(StorageError::UnknownStation(missing)),
            None => Ok(()),
        }
    }

    fn forget_range(&mut self, area: &RailArea) {
        if let Some(ranges) = self.range_lookup.get_mut(&area.world) {
            ranges.remove(&area.range);
            if ranges.is_empty() {
                self.range_lookup.remove(&area.world);
            }
        }
    }

    fn remove_areas_where<F: Fn(&RailArea) -> bool>(&mut self, predicate: F) -> Vec<RailArea> {
        let ids: Vec<u32> = self
            .areas
            .values()
            .filter(|area| predicate(area))
            .map(|area| area.id)
            .collect();
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(area) = self.areas.remove(&id) {
                self.forget_range(&area);
                removed.push(area);
            }
        }
        removed
    }
}

/// id 之后可分配的下一个 id
fn following_id(kind: &'static str, id: u32) -> Result<u32, StorageError> {
    id.checked_add(1)
        .ok_or(StorageError::IdOverflow { kind, id })
}
