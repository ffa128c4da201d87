use super::node::{Node, NodeState, MAX_DEPTH, MAX_LEAF_SIZE, MIN_LEAF_SIZE};
use super::range::Range3D;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 用于JSON序列化的树结构（仅用于调试输出，不会被读回）
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeVisualization {
    pub root: NodeVisualization,
    pub config: TreeConfig,
}

/// 用于JSON序列化的树参数
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeConfig {
    pub max_depth: usize,
    pub max_leaf_size: usize,
    pub min_leaf_size: usize,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeVisualization {
    pub bound: Range3D,
    pub state: NodeState,
    pub depth: usize,
    pub size: usize,
    /// 终端条目（仅叶子节点）
    pub entries: Vec<Range3D>,
    /// 子节点（仅内部节点）
    pub children: Vec<NodeVisualization>,
}

/// 自适应区域八叉树
///
/// 回答"哪些已登记区域包含这个点"。每个独立坐标空间（例如一个世界）使用一个实例，
/// 根边界在构造时覆盖整个可用坐标范围。
///
/// 树只存在于内存中，配置重载时整体重建；不存储附加数据，不保证重叠区域之间的
/// 返回顺序，也不支持并发修改。
#[derive(Debug, Clone)]
pub struct RangeOctree {
    root: Node,
}

impl RangeOctree {
    /// 创建以 bound 为根边界的空树
    pub fn new(bound: Range3D) -> Self {
        RangeOctree {
            root: Node::new_leaf(bound, 0),
        }
    }

    /// 根边界
    pub fn bound(&self) -> &Range3D {
        &self.root.bound
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// 树中存放的不同区域数量（遍历整棵树，按值去重）
    pub fn len(&self) -> usize {
        let mut entries = Vec::new();
        self.root.collect_entries(&mut entries);
        entries.into_iter().collect::<HashSet<_>>().len()
    }

    pub fn is_empty(&self) -> bool {
        let mut entries = Vec::new();
        self.root.collect_entries(&mut entries);
        entries.is_empty()
    }

    /// 导出树结构为JSON格式
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        let visualization = TreeVisualization {
            root: Self::create_node_visualization(&self.root),
            config: TreeConfig {
                max_depth: MAX_DEPTH,
                max_leaf_size: MAX_LEAF_SIZE,
                min_leaf_size: MIN_LEAF_SIZE,
            },
        };
        serde_json::to_string_pretty(&visualization)
    }

    fn create_node_visualization(node: &Node) -> NodeVisualization {
        NodeVisualization {
            bound: node.bound,
            state: node.state(),
            depth: node.depth,
            size: node.size,
            entries: node.entries().to_vec(),
            children: node
                .children()
                .iter()
                .map(Self::create_node_visualization)
                .collect(),
        }
    }
}
