use super::super::node::{Node, NodeKind, MIN_LEAF_SIZE};
use super::super::octree::RangeOctree;
use super::super::range::Range3D;
use tracing::debug;

/// 删除操作相关算法
impl RangeOctree {
    /// 删除与 range 值相等的区域
    ///
    /// 只按值匹配：与已插入区域重叠但不相等的 range 不会删除任何条目。
    /// 要移动一个区域，需要先删除再重新插入。
    pub fn remove(&mut self, range: &Range3D) {
        self.root_mut().remove(range);
    }
}

impl Node {
    pub(crate) fn remove(&mut self, range: &Range3D) {
        if !self.bound.intersects(range) {
            return;
        }
        // 计数只是策略值，删除不存在的区域时不能下溢
        self.size = self.size.saturating_sub(1);

        let merged = match &mut self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { children } => {
                if self.size >= MIN_LEAF_SIZE {
                    for child in children.iter_mut() {
                        child.remove(range);
                    }
                    return;
                }

                // 低于合并阈值：收集所有后代条目，退化为叶子
                let mut entries = Vec::new();
                for child in children.iter() {
                    child.collect_entries(&mut entries);
                }
                debug!(
                    "Merging octree node {} at depth {} back into a leaf with {} entries",
                    self.bound,
                    self.depth,
                    entries.len()
                );
                Some(entries)
            }
        };

        // 合并后的节点重新变为可分；后代的不可分状态随后代一起丢弃
        if let Some(entries) = merged {
            self.kind = NodeKind::Leaf {
                entries,
                dividable: true,
            };
        }

        if let NodeKind::Leaf { entries, .. } = &mut self.kind {
            entries.retain(|stored| stored != range);
        }
    }
}
