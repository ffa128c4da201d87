use crate::commands::args::ArgumentParser;
use crate::commands::context::RailContext;
use crate::commands::reply::Reply;
use crate::commands::Command;
use crate::detector::AreaEvent;

fn events_reply(events: Vec<AreaEvent>) -> Reply {
    if events.is_empty() {
        Reply::Nil
    } else {
        Reply::list(events)
    }
}

/// MOVE entity world x y z
pub struct MoveCommand;

impl Command for MoveCommand {
    fn name(&self) -> &'static str {
        "MOVE"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let parsed = match ArgumentParser::new(args, "MOVE").parse_move_args() {
            Ok(args) => args,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        let events = context.detector.update(
            &context.storage,
            &parsed.entity,
            Some((parsed.world.as_str(), parsed.point)),
        );
        events_reply(events)
    }
}

/// LEAVE entity
pub struct LeaveCommand;

impl Command for LeaveCommand {
    fn name(&self) -> &'static str {
        "LEAVE"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let entity = match ArgumentParser::new(args, "LEAVE").parse_single_arg("entity") {
            Ok(entity) => entity,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        let events = context.detector.update(&context.storage, &entity, None);
        events_reply(events)
    }
}
