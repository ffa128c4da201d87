use crate::commands::RailContext;
use crate::config::{RailAreaConfig, RailDirection};
use crate::octree::{Point3D, Range3D};
use crate::storage::{RailArea, RailLine, StationStorage};

/// 两个站台：Central (-2144..-2141) 与 Harbor (-2131..-2128)，同属 Line 1
pub(crate) fn sample_context() -> RailContext {
    let mut storage = StationStorage::new();
    let central = storage.add_station("Central").unwrap();
    let harbor = storage.add_station("Harbor").unwrap();
    let line = storage
        .add_line(RailLine::new("Line 1", "#0ED145").with_stations(vec![central, harbor]))
        .unwrap();

    storage
        .add_area(RailArea::new(
            "world",
            Range3D::new(-2144, 70, 897, -2141, 72, 907),
            RailDirection::North,
            Point3D::new(-2142, 71, 900),
            central,
            line,
        ))
        .unwrap();
    storage
        .add_area(RailArea::new(
            "world",
            Range3D::new(-2131, 70, 897, -2128, 72, 907),
            RailDirection::South,
            Point3D::new(-2130, 71, 900),
            harbor,
            line,
        ))
        .unwrap();

    RailContext::new(RailAreaConfig::default(), storage)
}
