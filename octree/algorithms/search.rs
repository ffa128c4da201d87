use super::super::node::{Node, NodeKind};
use super::super::octree::RangeOctree;
use super::super::range::{Point3D, Range3D};
use std::collections::HashSet;

/// 搜索操作相关算法
///
/// 这些查询在每个 tick 都会被调用，不做日志输出。
impl RangeOctree {
    /// 是否存在包含 point 的区域
    pub fn contains(&self, point: &Point3D) -> bool {
        self.root().contains(point)
    }

    /// 所有包含 point 的区域
    pub fn ranges(&self, point: &Point3D) -> HashSet<Range3D> {
        let mut results = HashSet::new();
        self.root().collect_ranges(point, &mut results);
        results
    }

    /// 任意一个包含 point 的区域
    ///
    /// 多个区域重叠时返回哪一个是不确定的，取决于子节点与条目的存储顺序，
    /// 合并之后这个顺序也会变化。
    pub fn first_range(&self, point: &Point3D) -> Option<Range3D> {
        self.root().first_range(point)
    }

    /// 所有与 query 相交的区域
    pub fn intersecting(&self, query: &Range3D) -> HashSet<Range3D> {
        let mut results = HashSet::new();
        self.root().collect_intersecting(query, &mut results);
        results
    }
}

impl Node {
    fn contains(&self, point: &Point3D) -> bool {
        if !self.bound.contains(point) {
            return false;
        }
        match &self.kind {
            NodeKind::Leaf { entries, .. } => entries.iter().any(|range| range.contains(point)),
            NodeKind::Internal { children } => children.iter().any(|child| child.contains(point)),
        }
    }

    fn collect_ranges(&self, point: &Point3D, results: &mut HashSet<Range3D>) {
        if !self.bound.contains(point) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf { entries, .. } => {
                results.extend(entries.iter().filter(|range| range.contains(point)));
            }
            NodeKind::Internal { children } => {
                for child in children {
                    child.collect_ranges(point, results);
                }
            }
        }
    }

    fn first_range(&self, point: &Point3D) -> Option<Range3D> {
        if !self.bound.contains(point) {
            return None;
        }
        match &self.kind {
            NodeKind::Leaf { entries, .. } => {
                entries.iter().find(|range| range.contains(point)).copied()
            }
            NodeKind::Internal { children } => {
                children.iter().find_map(|child| child.first_range(point))
            }
        }
    }

    fn collect_intersecting(&self, query: &Range3D, results: &mut HashSet<Range3D>) {
        if !self.bound.intersects(query) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf { entries, .. } => {
                results.extend(entries.iter().filter(|range| range.intersects(query)));
            }
            NodeKind::Internal { children } => {
                for child in children {
                    child.collect_intersecting(query, results);
                }
            }
        }
    }
}
