use std::fmt;

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 简单状态，如 PONG
    Status(String),
    /// 错误信息，总是以 ERR 开头
    Error(String),
    Integer(i64),
    /// 多行文本
    Text(String),
    /// 有序列表
    List(Vec<String>),
    Nil,
}

impl Reply {
    pub fn status(s: &str) -> Self {
        Reply::Status(s.to_string())
    }

    pub fn error(msg: &str) -> Self {
        if msg.starts_with("ERR") {
            Reply::Error(msg.to_string())
        } else {
            Reply::Error(format!("ERR {}", msg))
        }
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Reply::List(items.into_iter().map(|item| item.to_string()).collect())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(s) | Reply::Error(s) | Reply::Text(s) => write!(f, "{}", s),
            Reply::Integer(i) => write!(f, "{}", i),
            Reply::List(items) => write!(f, "{}", items.join("\n")),
            Reply::Nil => write!(f, "(nil)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefix() {
        assert_eq!(Reply::error("boom"), Reply::Error("ERR boom".to_string()));
        assert_eq!(
            Reply::error("ERR already prefixed"),
            Reply::Error("ERR already prefixed".to_string())
        );
        assert!(Reply::error("x").is_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(Reply::list([1, 2]).to_string(), "1\n2");
        assert_eq!(Reply::Nil.to_string(), "(nil)");
        assert_eq!(Reply::Integer(-4).to_string(), "-4");
    }
}
