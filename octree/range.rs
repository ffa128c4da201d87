use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 整数方块坐标
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3D {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Point3D { x, y, z }
    }

}

/// 轴对齐的三维整数区域，所有边界均为闭区间
///
/// 调用方保证每个轴上 min <= max，这里不做校验；
/// 不满足的区域在包含与相交测试中永远返回 false。
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(
    fmt = "[({}, {}, {}) -> ({}, {}, {})]",
    min_x,
    min_y,
    min_z,
    max_x,
    max_y,
    max_z
)]
pub struct Range3D {
    pub min_x: i32,
    pub min_y: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub max_z: i32,
}

impl Range3D {
    /// 创建新的区域，参数顺序与配置文件一致：先最小角，后最大角
    pub fn new(min_x: i32, min_y: i32, min_z: i32, max_x: i32, max_y: i32, max_z: i32) -> Self {
        Range3D {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// 由任意两个对角点构造区域（自动规整最小/最大角）
    pub fn from_points(a: Point3D, b: Point3D) -> Self {
        Range3D::new(
            a.x.min(b.x),
            a.y.min(b.y),
            a.z.min(b.z),
            a.x.max(b.x),
            a.y.max(b.y),
            a.z.max(b.z),
        )
    }

    pub fn min(&self) -> Point3D {
        Point3D::new(self.min_x, self.min_y, self.min_z)
    }

    pub fn max(&self) -> Point3D {
        Point3D::new(self.max_x, self.max_y, self.max_z)
    }

    /// 每个轴上 min <= max
    pub fn is_well_formed(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y && self.min_z <= self.max_z
    }

    /// 判断点是否在区域内（边界包含在内）
    pub fn contains(&self, point: &Point3D) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
            && self.min_z <= point.z
            && point.z <= self.max_z
    }

    /// 判断两个区域是否相交（分离轴测试，共享边界也算相交）
    ///
    /// 任一方不合法时返回 false。
    pub fn intersects(&self, other: &Range3D) -> bool {
        if !self.is_well_formed() || !other.is_well_formed() {
            return false;
        }
        !(other.max_x < self.min_x
            || other.min_x > self.max_x
            || other.max_y < self.min_y
            || other.min_y > self.max_y
            || other.max_z < self.min_z
            || other.min_z > self.max_z)
    }

    /// 判断当前区域是否完全包含另一个区域
    pub fn contains_range(&self, other: &Range3D) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.min_z <= other.min_z
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
            && self.max_z >= other.max_z
    }

    /// 各轴跨度（max - min），用 i64 避免极端坐标溢出
    pub fn extent(&self) -> [i64; 3] {
        [
            i64::from(self.max_x) - i64::from(self.min_x),
            i64::from(self.max_y) - i64::from(self.min_y),
            i64::from(self.max_z) - i64::from(self.min_z),
        ]
    }

    /// 包含的方块数
    pub fn volume(&self) -> i64 {
        let [dx, dy, dz] = self.extent();
        (dx + 1) * (dy + 1) * (dz + 1)
    }

    /// 中心方块（向下取整）
    pub fn center(&self) -> Point3D {
        Point3D::new(
            midpoint(self.min_x, self.max_x),
            midpoint(self.min_y, self.max_y),
            midpoint(self.min_z, self.max_z),
        )
    }

    /// 各方向向外扩张 amount 格，负数则收缩
    pub fn expand(&self, amount: i32) -> Self {
        Range3D::new(
            self.min_x - amount,
            self.min_y - amount,
            self.min_z - amount,
            self.max_x + amount,
            self.max_y + amount,
            self.max_z + amount,
        )
    }

    /// 八个角点
    pub fn corners(&self) -> [Point3D; 8] {
        [
            Point3D::new(self.min_x, self.min_y, self.min_z),
            Point3D::new(self.max_x, self.min_y, self.min_z),
            Point3D::new(self.min_x, self.max_y, self.min_z),
            Point3D::new(self.max_x, self.max_y, self.min_z),
            Point3D::new(self.min_x, self.min_y, self.max_z),
            Point3D::new(self.max_x, self.min_y, self.max_z),
            Point3D::new(self.min_x, self.max_y, self.max_z),
            Point3D::new(self.max_x, self.max_y, self.max_z),
        ]
    }
}

/// 两个坐标的中点，向负无穷取整
pub(crate) fn midpoint(a: i32, b: i32) -> i32 {
    // 结果必然落在 [a, b] 内，转换不会截断
    ((i64::from(a) + i64::from(b)) >> 1) as i32
}
