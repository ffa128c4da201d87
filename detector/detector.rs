use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::RailAreaConfig;
use crate::octree::{Point3D, Range3D, RangeOctree};
use crate::storage::{RailArea, StationStorage};

use super::event::AreaEvent;

/// 实体当前所在的区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedArea {
    pub world: String,
    pub area: u32,
    pub range: Range3D,
}

/// 站台区域检测器
///
/// 每个配置了世界范围的世界持有一棵八叉树，八叉树中的区域值通过
/// `StationStorage::area_by_range` 映射回站台。检测器还记录每个实体
/// 当前所在的区域，用于产生进入/离开事件。
///
/// 没有配置世界范围的世界不建立索引，其中的实体始终视为不在任何区域内。
#[derive(Debug, Default)]
pub struct AreaDetector {
    indices: HashMap<String, RangeOctree>,
    tracked: HashMap<String, TrackedArea>,
}

impl AreaDetector {
    pub fn new(config: &RailAreaConfig, storage: &StationStorage) -> Self {
        let mut detector = AreaDetector::default();
        detector.reload(config, storage);
        detector
    }

    /// 由存储整体重建所有世界的索引，并清空实体跟踪
    pub fn reload(&mut self, config: &RailAreaConfig, storage: &StationStorage) {
        self.indices = config
            .world_size
            .iter()
            .map(|(world, size)| (world.clone(), RangeOctree::new(size.bound())))
            .collect();
        self.tracked.clear();

        let mut indexed = 0;
        for area in storage.areas() {
            if self.index_area(area) {
                indexed += 1;
            }
        }
        for (world, index) in &self.indices {
            debug!("Rebuilt index for world '{}': {:?}", world, index.stats());
        }
        info!(
            "Indexed {} areas across {} worlds",
            indexed,
            self.indices.len()
        );
    }

    /// 新区域写入存储后调用
    pub fn area_added(&mut self, area: &RailArea) {
        self.index_area(area);
    }

    /// 区域从存储删除后调用，返回当前位于该区域内的实体及其离开事件
    pub fn area_removed(&mut self, area: &RailArea) -> Vec<(String, AreaEvent)> {
        if let Some(index) = self.indices.get_mut(&area.world) {
            index.remove(&area.range);
        }

        let mut events: Vec<(String, AreaEvent)> = self
            .tracked
            .iter()
            .filter(|(_, tracked)| tracked.area == area.id)
            .map(|(entity, _)| (entity.clone(), AreaEvent::Exit(area.id)))
            .collect();
        events.sort();
        for (entity, _) in &events {
            self.tracked.remove(entity);
        }
        debug!("Unindexed {} ({} entities left it)", area, events.len());
        events
    }

    /// 更新实体位置
    ///
    /// `position` 为 `None` 表示实体已离开（下线或被销毁）。优先检查实体原来的
    /// 区域是否仍包含该点，否则查询索引。区域变化时先产生 `Exit` 再产生 `Enter`，
    /// 区域未变时产生 `Stay`，始终不在区域内时不产生事件。
    pub fn update(
        &mut self,
        storage: &StationStorage,
        entity: &str,
        position: Option<(&str, Point3D)>,
    ) -> Vec<AreaEvent> {
        let previous = self.tracked.get(entity).cloned();

        let current = match position {
            Some((world, point)) => match &previous {
                Some(tracked) if tracked.world == world && tracked.range.contains(&point) => {
                    Some(tracked.clone())
                }
                _ => self.lookup(storage, world, &point),
            },
            None => None,
        };

        let mut events = Vec::with_capacity(2);
        match (&previous, &current) {
            (Some(old), Some(new)) if old.area == new.area => {
                events.push(AreaEvent::Stay(new.area));
            }
            _ => {
                if let Some(old) = &previous {
                    events.push(AreaEvent::Exit(old.area));
                }
                if let Some(new) = &current {
                    events.push(AreaEvent::Enter(new.area));
                }
            }
        }

        match current {
            Some(tracked) => {
                self.tracked.insert(entity.to_string(), tracked);
            }
            None => {
                self.tracked.remove(entity);
            }
        }
        events
    }

    /// 点所在的某个站台区域
    pub fn locate(&self, storage: &StationStorage, world: &str, point: &Point3D) -> Option<u32> {
        self.lookup(storage, world, point).map(|tracked| tracked.area)
    }

    /// 点所在的全部站台区域，按 id 升序
    pub fn locate_all(&self, storage: &StationStorage, world: &str, point: &Point3D) -> Vec<u32> {
        let Some(index) = self.indices.get(world) else {
            return Vec::new();
        };
        let mut areas: Vec<u32> = index
            .ranges(point)
            .iter()
            .filter_map(|range| storage.area_by_range(world, range))
            .map(|area| area.id)
            .collect();
        areas.sort_unstable();
        areas
    }

    /// 区域是否与任何站台区域相交，用于判断一个区块是否值得处理
    pub fn touches_any(&self, world: &str, range: &Range3D) -> bool {
        self.indices
            .get(world)
            .is_some_and(|index| !index.intersecting(range).is_empty())
    }

    pub fn current_area(&self, entity: &str) -> Option<u32> {
        self.tracked.get(entity).map(|tracked| tracked.area)
    }

    /// 当前位于区域内的实体
    pub fn tracked(&self) -> impl Iterator<Item = (&str, &TrackedArea)> {
        self.tracked
            .iter()
            .map(|(entity, tracked)| (entity.as_str(), tracked))
    }

    pub fn index(&self, world: &str) -> Option<&RangeOctree> {
        self.indices.get(world)
    }

    pub fn worlds(&self) -> Vec<&str> {
        let mut worlds: Vec<&str> = self.indices.keys().map(String::as_str).collect();
        worlds.sort_unstable();
        worlds
    }

    fn index_area(&mut self, area: &RailArea) -> bool {
        let Some(index) = self.indices.get_mut(&area.world) else {
            warn!(
                "World '{}' has no configured size, area {} is not indexed",
                area.world, area.id
            );
            return false;
        };
        if !index.bound().contains_range(&area.range) {
            warn!("{} extends beyond the bound of world '{}'", area, area.world);
        }
        index.insert(area.range);
        true
    }

    fn lookup(&self, storage: &StationStorage, world: &str, point: &Point3D) -> Option<TrackedArea> {
        let range = self.indices.get(world)?.first_range(point)?;
        let area = storage.area_by_range(world, &range)?;
        Some(TrackedArea {
            world: world.to_string(),
            area: area.id,
            range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RailDirection;
    use crate::storage::RailLine;

    fn setup() -> (RailAreaConfig, StationStorage) {
        let mut storage = StationStorage::new();
        let central = storage.add_station("Central").unwrap();
        let harbor = storage.add_station("Harbor").unwrap();
        let line = storage
            .add_line(RailLine::new("Line 1", "#0ED145").with_stations(vec![central, harbor]))
            .unwrap();

        for (x, station) in [(0, central), (100, harbor)] {
            let range = Range3D::new(x, 70, 0, x + 3, 72, 10);
            storage
                .add_area(RailArea::new(
                    "world",
                    range,
                    RailDirection::South,
                    Point3D::new(x + 1, 71, 5),
                    station,
                    line,
                ))
                .unwrap();
        }
        (RailAreaConfig::default(), storage)
    }

    #[test]
    fn test_enter_stay_exit() {
        let (config, storage) = setup();
        let mut detector = AreaDetector::new(&config, &storage);

        let outside = Point3D::new(50, 71, 5);
        assert!(detector
            .update(&storage, "cart", Some(("world", outside)))
            .is_empty());

        let events = detector.update(&storage, "cart", Some(("world", Point3D::new(1, 71, 5))));
        assert_eq!(events, vec![AreaEvent::Enter(1)]);
        assert_eq!(detector.current_area("cart"), Some(1));
        let tracked: Vec<(&str, &TrackedArea)> = detector.tracked().collect();
        assert_eq!(
            tracked,
            vec![(
                "cart",
                &TrackedArea {
                    world: "world".to_string(),
                    area: 1,
                    range: Range3D::new(0, 70, 0, 3, 72, 10),
                }
            )]
        );

        let events = detector.update(&storage, "cart", Some(("world", Point3D::new(2, 72, 9))));
        assert_eq!(events, vec![AreaEvent::Stay(1)]);

        let events = detector.update(&storage, "cart", Some(("world", outside)));
        assert_eq!(events, vec![AreaEvent::Exit(1)]);
        assert_eq!(detector.current_area("cart"), None);
    }

    #[test]
    fn test_direct_move_between_areas() {
        let (config, storage) = setup();
        let mut detector = AreaDetector::new(&config, &storage);

        detector.update(&storage, "cart", Some(("world", Point3D::new(1, 71, 5))));
        let events = detector.update(&storage, "cart", Some(("world", Point3D::new(101, 71, 5))));
        assert_eq!(events, vec![AreaEvent::Exit(1), AreaEvent::Enter(2)]);
    }

    #[test]
    fn test_leave_and_world_change() {
        let (config, storage) = setup();
        let mut detector = AreaDetector::new(&config, &storage);

        detector.update(&storage, "a", Some(("world", Point3D::new(1, 71, 5))));
        assert_eq!(detector.update(&storage, "a", None), vec![AreaEvent::Exit(1)]);
        assert!(detector.update(&storage, "a", None).is_empty());

        // 同坐标但在另一个世界
        detector.update(&storage, "b", Some(("world", Point3D::new(1, 71, 5))));
        let events = detector.update(&storage, "b", Some(("nether", Point3D::new(1, 71, 5))));
        assert_eq!(events, vec![AreaEvent::Exit(1)]);
        assert_eq!(detector.tracked().count(), 0);
    }

    #[test]
    fn test_sticky_area_wins_over_overlap() {
        let (config, mut storage) = setup();
        let line = storage.lines().next().unwrap().id;
        let mut detector = AreaDetector::new(&config, &storage);

        detector.update(&storage, "cart", Some(("world", Point3D::new(3, 71, 5))));

        // 与区域 1 重叠的新区域
        let overlap = storage
            .add_area(RailArea::new(
                "world",
                Range3D::new(2, 70, 0, 8, 72, 10),
                RailDirection::North,
                Point3D::new(5, 71, 5),
                1,
                line,
            ))
            .unwrap();
        detector.area_added(storage.area(overlap).unwrap());

        let events = detector.update(&storage, "cart", Some(("world", Point3D::new(3, 71, 6))));
        assert_eq!(events, vec![AreaEvent::Stay(1)]);
        assert_eq!(
            detector.locate_all(&storage, "world", &Point3D::new(3, 71, 6)),
            vec![1, overlap]
        );
    }

    #[test]
    fn test_area_removed_exits_entities() {
        let (config, mut storage) = setup();
        let mut detector = AreaDetector::new(&config, &storage);

        detector.update(&storage, "a", Some(("world", Point3D::new(1, 71, 5))));
        detector.update(&storage, "b", Some(("world", Point3D::new(2, 71, 5))));
        detector.update(&storage, "c", Some(("world", Point3D::new(101, 71, 5))));

        let removed = storage.remove_area(1).unwrap();
        let events = detector.area_removed(&removed);
        assert_eq!(
            events,
            vec![
                ("a".to_string(), AreaEvent::Exit(1)),
                ("b".to_string(), AreaEvent::Exit(1)),
            ]
        );
        assert_eq!(detector.locate(&storage, "world", &Point3D::new(1, 71, 5)), None);
        assert_eq!(detector.current_area("c"), Some(2));
    }

    #[test]
    fn test_unconfigured_world_is_not_indexed() {
        let (config, mut storage) = setup();
        let line = storage.lines().next().unwrap().id;
        storage
            .add_area(RailArea::new(
                "the_end",
                Range3D::new(0, 70, 0, 3, 72, 10),
                RailDirection::East,
                Point3D::new(1, 71, 5),
                1,
                line,
            ))
            .unwrap();

        let mut detector = AreaDetector::new(&config, &storage);
        assert!(detector.index("the_end").is_none());
        assert_eq!(detector.worlds(), vec!["world"]);
        assert!(detector
            .update(&storage, "cart", Some(("the_end", Point3D::new(1, 71, 5))))
            .is_empty());
    }

    #[test]
    fn test_touches_any() {
        let (config, storage) = setup();
        let detector = AreaDetector::new(&config, &storage);

        let chunk = |cx: i32, cz: i32| Range3D::new(cx * 16, -64, cz * 16, cx * 16 + 15, 320, cz * 16 + 15);
        assert!(detector.touches_any("world", &chunk(0, 0)));
        assert!(detector.touches_any("world", &chunk(6, 0)));
        assert!(!detector.touches_any("world", &chunk(3, 3)));
        assert!(!detector.touches_any("nether", &chunk(0, 0)));
    }

    #[test]
    fn test_reload_clears_tracking() {
        let (config, storage) = setup();
        let mut detector = AreaDetector::new(&config, &storage);
        detector.update(&storage, "cart", Some(("world", Point3D::new(1, 71, 5))));

        detector.reload(&config, &storage);
        assert_eq!(detector.current_area("cart"), None);
        assert_eq!(detector.index("world").unwrap().len(), 2);
    }
}
