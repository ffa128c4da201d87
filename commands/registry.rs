use std::collections::HashMap;

use super::basic::{HelpCommand, PingCommand};
use super::info::{AreasCommand, NextCommand, StatsCommand};
use super::query::{LocateCommand, RangesCommand};
use super::track::{LeaveCommand, MoveCommand};
use super::{CommandType, RailContext, Reply};

/// 命令注册表，管理所有可用的命令
pub struct CommandRegistry {
    commands: HashMap<String, CommandType>,
    context: RailContext,
}

impl CommandRegistry {
    /// 创建新的命令注册表
    pub fn new(context: RailContext) -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
            context,
        };

        // 注册基础命令
        registry.register(CommandType::Ping(PingCommand));
        registry.register(CommandType::Help(HelpCommand));

        // 注册查询命令
        registry.register(CommandType::Locate(LocateCommand));
        registry.register(CommandType::Ranges(RangesCommand));

        // 注册实体跟踪命令
        registry.register(CommandType::Move(MoveCommand));
        registry.register(CommandType::Leave(LeaveCommand));

        // 注册信息命令
        registry.register(CommandType::Areas(AreasCommand));
        registry.register(CommandType::Next(NextCommand));
        registry.register(CommandType::Stats(StatsCommand));

        registry
    }

    /// 注册一个命令
    pub fn register(&mut self, command: CommandType) {
        let name = command.name().to_uppercase();
        self.commands.insert(name, command);
    }

    /// 执行指定的命令
    pub fn execute(&mut self, command_name: &str, args: &[String]) -> Reply {
        let name = command_name.to_uppercase();
        match self.commands.get(&name) {
            Some(command) => command.execute(&mut self.context, args),
            None => Reply::Error(format!("ERR unknown command '{}'", command_name)),
        }
    }

    /// 执行一行输入，第一个词为命令名
    pub fn execute_line(&mut self, line: &str) -> Option<Reply> {
        let parts: Vec<String> = line.split_whitespace().map(String::from).collect();
        let (name, args) = parts.split_first()?;
        Some(self.execute(name, args))
    }

    /// 获取所有注册的命令名称
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// 检查命令是否存在
    pub fn has_command(&self, command_name: &str) -> bool {
        let name = command_name.to_uppercase();
        self.commands.contains_key(&name)
    }

    pub fn context(&self) -> &RailContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RailContext {
        &mut self.context
    }
}
