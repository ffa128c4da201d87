pub mod algorithms;
pub mod node;
#[allow(clippy::module_inception)]
pub mod octree;
pub mod range;

// 重新导出主要类型
pub use algorithms::debug::OctreeStats;
pub use node::{Node, NodeKind, NodeState, MAX_DEPTH, MAX_LEAF_SIZE, MIN_LEAF_SIZE};
pub use octree::RangeOctree;
pub use range::{Point3D, Range3D};
