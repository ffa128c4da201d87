pub mod args;
pub mod basic;
pub mod context;
pub mod info;
pub mod query;
pub mod registry;
pub mod reply;
pub mod track;

#[cfg(test)]
pub(crate) mod testing;

use basic::{HelpCommand, PingCommand};
use info::{AreasCommand, NextCommand, StatsCommand};
use query::{LocateCommand, RangesCommand};
use track::{LeaveCommand, MoveCommand};

// 重新导出常用的类型
pub use args::{ArgumentParser, MoveArgs, PositionArgs};
pub use context::RailContext;
pub use registry::CommandRegistry;
pub use reply::Reply;

pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply;
}

pub enum CommandType {
    Ping(PingCommand),
    Help(HelpCommand),
    Locate(LocateCommand),
    Ranges(RangesCommand),
    Move(MoveCommand),
    Leave(LeaveCommand),
    Areas(AreasCommand),
    Next(NextCommand),
    Stats(StatsCommand),
}

impl CommandType {
    fn name(&self) -> &'static str {
        match self {
            CommandType::Ping(cmd) => cmd.name(),
            CommandType::Help(cmd) => cmd.name(),
            CommandType::Locate(cmd) => cmd.name(),
            CommandType::Ranges(cmd) => cmd.name(),
            CommandType::Move(cmd) => cmd.name(),
            CommandType::Leave(cmd) => cmd.name(),
            CommandType::Areas(cmd) => cmd.name(),
            CommandType::Next(cmd) => cmd.name(),
            CommandType::Stats(cmd) => cmd.name(),
        }
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        match self {
            CommandType::Ping(cmd) => cmd.execute(context, args),
            CommandType::Help(cmd) => cmd.execute(context, args),
            CommandType::Locate(cmd) => cmd.execute(context, args),
            CommandType::Ranges(cmd) => cmd.execute(context, args),
            CommandType::Move(cmd) => cmd.execute(context, args),
            CommandType::Leave(cmd) => cmd.execute(context, args),
            CommandType::Areas(cmd) => cmd.execute(context, args),
            CommandType::Next(cmd) => cmd.execute(context, args),
            CommandType::Stats(cmd) => cmd.execute(context, args),
        }
    }
}
