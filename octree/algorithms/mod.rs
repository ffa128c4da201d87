// 八叉树算法模块
//
// 按功能拆分：
// - insert: 插入
// - split: 节点分割
// - delete: 删除与合并
// - search: 点查询与相交查询
// - debug: 结构统计

pub mod debug;
pub mod delete;
pub mod insert;
pub mod search;
pub mod split;
