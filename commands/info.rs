use crate::commands::args::ArgumentParser;
use crate::commands::context::RailContext;
use crate::commands::reply::Reply;
use crate::commands::Command;

/// AREAS world
pub struct AreasCommand;

impl Command for AreasCommand {
    fn name(&self) -> &'static str {
        "AREAS"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let world = match ArgumentParser::new(args, "AREAS").parse_single_arg("world") {
            Ok(world) => world,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        let storage = &context.storage;
        Reply::list(storage.areas_in_world(&world).map(|area| {
            let station = storage
                .station(area.station)
                .map(|s| s.name.as_str())
                .unwrap_or("?");
            let line = storage
                .line(area.line)
                .map(|l| l.name.as_str())
                .unwrap_or("?");
            format!(
                "#{} {} / {} {} {:?}",
                area.id, line, station, area.range, area.direction
            )
        }))
    }
}

/// NEXT area-id
pub struct NextCommand;

impl Command for NextCommand {
    fn name(&self) -> &'static str {
        "NEXT"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let id = match ArgumentParser::new(args, "NEXT").parse_id_arg("area id") {
            Ok(id) => id,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        if context.storage.area(id).is_none() {
            return Reply::error(&format!("unknown area {}", id));
        }
        match context.storage.next_station(id) {
            Some(station) => Reply::Text(station.name.clone()),
            None => Reply::Nil,
        }
    }
}

/// STATS world
pub struct StatsCommand;

impl Command for StatsCommand {
    fn name(&self) -> &'static str {
        "STATS"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let world = match ArgumentParser::new(args, "STATS").parse_single_arg("world") {
            Ok(world) => world,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        let Some(index) = context.detector.index(&world) else {
            return Reply::error(&format!("unknown world '{}'", world));
        };

        match serde_json::to_string_pretty(&index.stats()) {
            Ok(json) => Reply::Text(json),
            Err(e) => Reply::error(&format!("failed to serialize stats: {}", e)),
        }
    }
}
