use derive_more::Display;
use serde::Serialize;

/// 实体相对站台区域的变化
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "event", content = "area", rename_all = "lowercase")]
pub enum AreaEvent {
    /// 进入区域
    #[display(fmt = "ENTER {}", _0)]
    Enter(u32),
    /// 离开区域
    #[display(fmt = "EXIT {}", _0)]
    Exit(u32),
    /// 仍在原区域内
    #[display(fmt = "STAY {}", _0)]
    Stay(u32),
}

impl AreaEvent {
    pub fn area(&self) -> u32 {
        match self {
            AreaEvent::Enter(id) | AreaEvent::Exit(id) | AreaEvent::Stay(id) => *id,
        }
    }
}
