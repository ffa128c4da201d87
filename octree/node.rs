use super::range::Range3D;
use serde::{Deserialize, Serialize};

/// 节点最大深度，到达后不再分割
pub const MAX_DEPTH: usize = 16;
/// 叶子节点计数超过此值时尝试分割
pub const MAX_LEAF_SIZE: usize = 12;
/// 内部节点计数低于此值时合并回叶子
pub const MIN_LEAF_SIZE: usize = 8;

/// 节点状态
///
/// 状态转换：
/// - `LeafDividable -> Internal`：分割成功
/// - `LeafDividable -> LeafNonDividable`：分割失败（吸收态，不会再转出）
/// - `Internal -> LeafDividable`：删除导致合并
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    LeafDividable,
    LeafNonDividable,
    Internal,
}

/// 节点内容
///
/// 叶子节点直接持有插入的区域（即"终端条目"）；
/// 内部节点持有 2 到 8 个按卦限划分、互不相交的子节点。
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// 叶子节点：直接存放区域
    ///
    /// 同一个区域值在一个叶子内只保存一次，但跨越分割面的区域会分别出现在
    /// 多个兄弟子树中，每棵子树都能独立回答查询。
    Leaf {
        entries: Vec<Range3D>,
        dividable: bool,
    },

    /// 内部节点：空间被划分给子节点
    Internal { children: Vec<Node> },
}

/// 八叉树节点
#[derive(Debug, Clone)]
pub struct Node {
    /// 构造时确定的空间边界，不随内容变化
    pub bound: Range3D,

    /// 节点深度，根为 0
    pub depth: usize,

    /// 落在该节点下的插入次数
    ///
    /// 仅用于分割/合并决策，不是精确的去重计数。
    pub size: usize,

    pub kind: NodeKind,
}

impl Node {
    /// 创建空的叶子节点，深度未达上限时可分割
    pub fn new_leaf(bound: Range3D, depth: usize) -> Self {
        Node {
            bound,
            depth,
            size: 0,
            kind: NodeKind::Leaf {
                entries: Vec::new(),
                dividable: depth < MAX_DEPTH,
            },
        }
    }

    pub fn state(&self) -> NodeState {
        match &self.kind {
            NodeKind::Leaf {
                dividable: true, ..
            } => NodeState::LeafDividable,
            NodeKind::Leaf {
                dividable: false, ..
            } => NodeState::LeafNonDividable,
            NodeKind::Internal { .. } => NodeState::Internal,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// 叶子节点的终端条目，内部节点返回空切片
    pub fn entries(&self) -> &[Range3D] {
        match &self.kind {
            NodeKind::Leaf { entries, .. } => entries,
            NodeKind::Internal { .. } => &[],
        }
    }

    /// 内部节点的子节点，叶子节点返回空切片
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Internal { children } => children,
        }
    }

    /// 递归收集所有叶子中的终端条目
    ///
    /// 不去重：跨越分割面的区域会在结果里出现多次，合并后保留这些重复条目
    /// 不影响查询结果。
    pub(crate) fn collect_entries(&self, out: &mut Vec<Range3D>) {
        match &self.kind {
            NodeKind::Leaf { entries, .. } => out.extend_from_slice(entries),
            NodeKind::Internal { children } => {
                for child in children {
                    child.collect_entries(out);
                }
            }
        }
    }
}

/// 按值去重地加入终端条目
pub(crate) fn push_unique(entries: &mut Vec<Range3D>, range: Range3D) {
    if !entries.contains(&range) {
        entries.push(range);
    }
}
