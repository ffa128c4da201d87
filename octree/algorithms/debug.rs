use super::super::node::{Node, NodeState};
use super::super::octree::RangeOctree;
use serde::Serialize;

/// 树的结构统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct OctreeStats {
    pub internal_nodes: usize,
    pub leaf_nodes: usize,
    /// 已判定不可再分的叶子
    pub non_dividable_leaves: usize,
    /// 所有叶子中的终端条目总数（跨子树的重复条目分别计数）
    pub stored_entries: usize,
    pub max_depth: usize,
}

impl RangeOctree {
    /// 遍历整棵树统计节点信息
    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        collect_stats(self.root(), &mut stats);
        stats
    }
}

fn collect_stats(node: &Node, stats: &mut OctreeStats) {
    stats.max_depth = stats.max_depth.max(node.depth);
    match node.state() {
        NodeState::Internal => {
            stats.internal_nodes += 1;
            for child in node.children() {
                collect_stats(child, stats);
            }
        }
        NodeState::LeafDividable => {
            stats.leaf_nodes += 1;
            stats.stored_entries += node.entries().len();
        }
        NodeState::LeafNonDividable => {
            stats.leaf_nodes += 1;
            stats.non_dividable_leaves += 1;
            stats.stored_entries += node.entries().len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octree::Range3D;

    #[test]
    fn test_stats_single_leaf() {
        let mut octree = RangeOctree::new(Range3D::new(0, 0, 0, 255, 255, 255));
        octree.insert(Range3D::new(1, 1, 1, 2, 2, 2));
        octree.insert(Range3D::new(3, 3, 3, 4, 4, 4));

        let stats = octree.stats();
        assert_eq!(
            stats,
            OctreeStats {
                internal_nodes: 0,
                leaf_nodes: 1,
                non_dividable_leaves: 0,
                stored_entries: 2,
                max_depth: 0,
            }
        );
    }

    #[test]
    fn test_stats_after_split() {
        let mut octree = RangeOctree::new(Range3D::new(0, 0, 0, 255, 255, 255));
        for i in 0..13 {
            octree.insert(Range3D::new(i * 8, 0, 0, i * 8 + 2, 2, 2));
        }

        let stats = octree.stats();
        assert!(stats.internal_nodes >= 1);
        assert!(stats.leaf_nodes >= 8);
        assert!(stats.max_depth >= 1);
        assert!(stats.stored_entries >= 13);
    }

    #[test]
    fn test_stats_non_dividable() {
        let mut octree = RangeOctree::new(Range3D::new(0, 0, 0, 10, 10, 10));
        for i in 0..13 {
            octree.insert(Range3D::new(0, 0, 0, i, 0, 0));
        }
        let stats = octree.stats();
        assert_eq!(stats.non_dividable_leaves, 1);
        assert_eq!(stats.stored_entries, 13);
    }
}
