use super::super::node::{push_unique, Node, NodeKind, MAX_LEAF_SIZE};
use super::super::octree::RangeOctree;
use super::super::range::Range3D;
use super::split::divide;
use tracing::debug;

/// 插入操作相关算法
impl RangeOctree {
    /// 插入区域
    ///
    /// 与根边界不相交的区域直接忽略。同一区域可能被放入多个子树。
    pub fn insert(&mut self, range: Range3D) {
        self.root_mut().insert(range);
    }
}

impl Node {
    pub(crate) fn insert(&mut self, range: Range3D) {
        if !self.bound.intersects(&range) {
            return;
        }
        self.size += 1;

        let divided = match &mut self.kind {
            NodeKind::Internal { .. } => None,
            NodeKind::Leaf { entries, dividable } => {
                // 不可分，或叶子未满：直接存放
                if !*dividable || self.size <= MAX_LEAF_SIZE {
                    push_unique(entries, range);
                    return;
                }

                // 叶子已满，尝试分割
                match divide(&self.bound, self.depth) {
                    None => {
                        debug!(
                            "Octree node {} at depth {} is too small to divide",
                            self.bound, self.depth
                        );
                        *dividable = false;
                        push_unique(entries, range);
                        return;
                    }
                    Some(mut children) => {
                        debug!(
                            "Dividing octree node {} at depth {} into {} children",
                            self.bound,
                            self.depth,
                            children.len()
                        );
                        // 原有条目重新分配到子节点
                        for child in children.iter_mut() {
                            for stored in entries.iter() {
                                child.insert(*stored);
                            }
                        }
                        Some(children)
                    }
                }
            }
        };

        if let Some(children) = divided {
            self.kind = NodeKind::Internal { children };
        }

        if let NodeKind::Internal { children } = &mut self.kind {
            for child in children.iter_mut() {
                child.insert(range);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octree::{NodeState, Point3D, MAX_DEPTH};

    fn world() -> RangeOctree {
        RangeOctree::new(Range3D::new(-10000, 0, -10000, 10000, 255, 10000))
    }

    /// 彼此不重叠的小区域，沿 X 轴排开
    fn small_ranges(count: i32) -> Vec<Range3D> {
        (0..count)
            .map(|i| Range3D::new(i * 10, 64, 0, i * 10 + 3, 66, 5))
            .collect()
    }

    #[test]
    fn test_insert_outside_bound_is_noop() {
        let mut octree = world();
        octree.insert(Range3D::new(20000, 0, 0, 20010, 10, 10));
        assert!(octree.is_empty());
        assert_eq!(octree.root().size, 0);
    }

    #[test]
    fn test_insert_malformed_range_is_noop() {
        let mut octree = world();
        octree.insert(Range3D::new(10, 0, 0, 0, 10, 10));
        assert!(octree.is_empty());
        assert_eq!(octree.root().size, 0);
        assert!(octree.root().entries().is_empty());

        // 不合法区域不会把叶子推向分割
        let ranges = small_ranges(MAX_LEAF_SIZE as i32);
        for range in &ranges {
            octree.insert(*range);
        }
        octree.insert(Range3D::new(0, 70, 0, 5, 60, 5));
        assert_eq!(octree.root().size, MAX_LEAF_SIZE);
        assert_eq!(octree.root().state(), NodeState::LeafDividable);
    }

    #[test]
    fn test_insert_dedups_equal_ranges_in_leaf() {
        let mut octree = world();
        let range = Range3D::new(0, 0, 0, 5, 5, 5);
        octree.insert(range);
        octree.insert(range);
        assert_eq!(octree.root().entries().len(), 1);
        // 计数仍然累加
        assert_eq!(octree.root().size, 2);
    }

    #[test]
    fn test_leaf_holds_up_to_max_leaf_size() {
        let mut octree = world();
        for range in small_ranges(MAX_LEAF_SIZE as i32) {
            octree.insert(range);
        }
        assert_eq!(octree.root().state(), NodeState::LeafDividable);
        assert_eq!(octree.root().entries().len(), MAX_LEAF_SIZE);
    }

    #[test]
    fn test_split_on_overflow() {
        let mut octree = world();
        let ranges = small_ranges(MAX_LEAF_SIZE as i32 + 1);
        for range in &ranges {
            octree.insert(*range);
        }

        assert_eq!(octree.root().state(), NodeState::Internal);
        assert_eq!(octree.root().size, 13);
        assert_eq!(octree.root().children().len(), 8);
        for range in &ranges {
            let found = octree.ranges(&range.center());
            assert_eq!(found.len(), 1);
            assert!(found.contains(range));
        }
    }

    #[test]
    fn test_straddling_range_goes_to_every_child() {
        let mut octree = world();
        for range in small_ranges(MAX_LEAF_SIZE as i32 + 1) {
            octree.insert(range);
        }
        // 跨越根节点所有切分面
        let straddling = Range3D::new(-5, 120, -5, 5, 130, 5);
        octree.insert(straddling);

        let holders = octree
            .root()
            .children()
            .iter()
            .filter(|child| {
                let mut out = Vec::new();
                child.collect_entries(&mut out);
                out.contains(&straddling)
            })
            .count();
        assert_eq!(holders, 8);
        assert_eq!(octree.first_range(&Point3D::new(0, 125, 0)), Some(straddling));
        assert_eq!(octree.first_range(&Point3D::new(5, 130, 5)), Some(straddling));
    }

    #[test]
    fn test_small_bound_never_divides() {
        let mut octree = RangeOctree::new(Range3D::new(0, 0, 0, 15, 15, 15));
        let mut inserted = Vec::new();
        for x in 0..4 {
            for z in 0..8 {
                let range = Range3D::new(x * 4, 0, z * 2, x * 4 + 3, 3, z * 2 + 1);
                octree.insert(range);
                inserted.push(range);
            }
        }

        assert_eq!(octree.root().state(), NodeState::LeafNonDividable);
        assert_eq!(octree.root().entries().len(), 32);
        for range in &inserted {
            assert_eq!(octree.first_range(&range.min()), Some(*range));
            assert_eq!(octree.first_range(&range.max()), Some(*range));
        }
    }

    #[test]
    fn test_depth_is_bounded() {
        // 同一个小区域附近反复插入大量区域，深度不能超过上限
        let mut octree = RangeOctree::new(Range3D::new(0, 0, 0, i32::MAX - 1, 255, i32::MAX - 1));
        for i in 0..64 {
            octree.insert(Range3D::new(i, 0, 0, i, 0, 0));
        }
        assert!(octree.stats().max_depth <= MAX_DEPTH);
        for i in 0..64 {
            assert!(octree.contains(&Point3D::new(i, 0, 0)));
        }
        assert!(!octree.contains(&Point3D::new(64, 0, 0)));
    }
}
