use crate::commands::args::ArgumentParser;
use crate::commands::context::RailContext;
use crate::commands::reply::Reply;
use crate::commands::Command;
use crate::octree::Range3D;

/// LOCATE world x y z
///
/// 返回方块所在的一个站台区域
pub struct LocateCommand;

impl Command for LocateCommand {
    fn name(&self) -> &'static str {
        "LOCATE"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let parsed = match ArgumentParser::new(args, "LOCATE").parse_position_args() {
            Ok(args) => args,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        let located = context
            .detector
            .locate(&context.storage, &parsed.world, &parsed.point)
            .and_then(|id| context.storage.area(id));

        match located {
            Some(area) => {
                let station = context
                    .storage
                    .station(area.station)
                    .map(|s| s.name.as_str())
                    .unwrap_or("?");
                Reply::Text(format!(
                    "area {} station '{}' range {} stop {}",
                    area.id, station, area.range, area.stop_point
                ))
            }
            None => Reply::Nil,
        }
    }
}

/// RANGES world x y z
///
/// 返回索引中所有包含该方块的区域值
pub struct RangesCommand;

impl Command for RangesCommand {
    fn name(&self) -> &'static str {
        "RANGES"
    }

    fn execute(&self, context: &mut RailContext, args: &[String]) -> Reply {
        let parsed = match ArgumentParser::new(args, "RANGES").parse_position_args() {
            Ok(args) => args,
            Err(err_msg) => return Reply::error(&err_msg),
        };

        let Some(index) = context.detector.index(&parsed.world) else {
            return Reply::error(&format!("unknown world '{}'", parsed.world));
        };

        let mut ranges: Vec<Range3D> = index.ranges(&parsed.point).into_iter().collect();
        ranges.sort_by_key(|r| (r.min_x, r.min_y, r.min_z, r.max_x, r.max_y, r.max_z));
        Reply::list(ranges)
    }
}
