use super::super::node::Node;
use super::super::range::{midpoint, Range3D};

/// 跨度不超过该值的轴不再切分
pub const MIN_SPLIT_EXTENT: i64 = 15;

const SPLIT_X: u8 = 0b100;
const SPLIT_Y: u8 = 0b010;
const SPLIT_Z: u8 = 0b001;

/// 计算可以切分的轴
///
/// 返回位标记：X = 0b100, Y = 0b010, Z = 0b001
pub(crate) fn split_axes(bound: &Range3D) -> u8 {
    let [dx, dy, dz] = bound.extent();
    let mut flag = 0;
    if dx > MIN_SPLIT_EXTENT {
        flag |= SPLIT_X;
    }
    if dy > MIN_SPLIT_EXTENT {
        flag |= SPLIT_Y;
    }
    if dz > MIN_SPLIT_EXTENT {
        flag |= SPLIT_Z;
    }
    flag
}

/// 分割节点边界
///
/// 只在跨度超过 15 的轴的中点处切分，产生 2 到 8 个互不相交、完整覆盖 bound 的
/// 子节点；没有可切分的轴时返回 None，节点此后永久不可分。
pub(crate) fn divide(bound: &Range3D, depth: usize) -> Option<Vec<Node>> {
    let flag = split_axes(bound);
    if flag == 0 {
        return None;
    }

    // 不切分的轴上，"低半边"直接覆盖整个跨度
    let mid_x = if flag & SPLIT_X != 0 {
        midpoint(bound.min_x, bound.max_x)
    } else {
        bound.max_x
    };
    let mid_y = if flag & SPLIT_Y != 0 {
        midpoint(bound.min_y, bound.max_y)
    } else {
        bound.max_y
    };
    let mid_z = if flag & SPLIT_Z != 0 {
        midpoint(bound.min_z, bound.max_z)
    } else {
        bound.max_z
    };

    let child_depth = depth + 1;
    let mut children = Vec::with_capacity(8);
    for octant in 0..8u8 {
        // 卦限只能使用被切分的轴
        if octant & !flag != 0 {
            continue;
        }
        let (min_x, max_x) = if octant & SPLIT_X != 0 {
            (mid_x + 1, bound.max_x)
        } else {
            (bound.min_x, mid_x)
        };
        let (min_y, max_y) = if octant & SPLIT_Y != 0 {
            (mid_y + 1, bound.max_y)
        } else {
            (bound.min_y, mid_y)
        };
        let (min_z, max_z) = if octant & SPLIT_Z != 0 {
            (mid_z + 1, bound.max_z)
        } else {
            (bound.min_z, mid_z)
        };
        children.push(Node::new_leaf(
            Range3D::new(min_x, min_y, min_z, max_x, max_y, max_z),
            child_depth,
        ));
    }

    Some(children)
}
