use crate::commands::context::RailContext;
use crate::commands::reply::Reply;
use crate::commands::Command;

pub const HELP_TEXT: &str = "\
PING [message]               - Check that the index is alive
LOCATE world x y z           - Platform area containing a block
RANGES world x y z           - Every area range containing a block
MOVE entity world x y z      - Update an entity position and report area events
LEAVE entity                 - Forget an entity and report its exit
AREAS world                  - List platform areas in a world
NEXT area-id                 - Next station for trains stopping at an area
STATS world                  - Index structure statistics
HELP                         - Show this help message";

pub struct PingCommand;

impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "PING"
    }

    fn execute(&self, _context: &mut RailContext, args: &[String]) -> Reply {
        match args.len() {
            0 => Reply::status("PONG"),
            1 => Reply::Text(args[0].clone()),
            _ => Reply::error("wrong number of arguments for 'PING' command"),
        }
    }
}

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "HELP"
    }

    fn execute(&self, _context: &mut RailContext, _args: &[String]) -> Reply {
        Reply::Text(HELP_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RailAreaConfig;
    use crate::storage::StationStorage;

    #[test]
    fn test_ping() {
        let mut context = RailContext::new(RailAreaConfig::default(), StationStorage::new());
        assert_eq!(PingCommand.execute(&mut context, &[]), Reply::status("PONG"));
        assert_eq!(
            PingCommand.execute(&mut context, &["hello".to_string()]),
            Reply::Text("hello".to_string())
        );
        assert!(PingCommand
            .execute(&mut context, &["a".to_string(), "b".to_string()])
            .is_error());
    }

    #[test]
    fn test_help_lists_commands() {
        let mut context = RailContext::new(RailAreaConfig::default(), StationStorage::new());
        let help = HelpCommand.execute(&mut context, &[]).to_string();
        for name in ["LOCATE", "RANGES", "MOVE", "LEAVE", "AREAS", "NEXT", "STATS"] {
            assert!(help.contains(name), "help is missing {}", name);
        }
    }
}
