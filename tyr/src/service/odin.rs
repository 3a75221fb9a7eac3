#![allow(clippy::all)]

include!("../../valhalla_protos/valhalla.odin.rs");

pub use self::trip_directions::{
    location::Type as LocationType,
    maneuver::{CardinalDirection, Type as ManeuverType},
    Location, Maneuver, Summary,
};
