//! The OSRM compatible output. Everything here mirrors what OSRM clients
//! already parse, so field names, ordering inside the instruction tuples
//! and the integer meter math must not change.
//!
//! ```json
//! {
//!     "hint_data": { "locations": [ "", "" ], "checksum": 0 },
//!     "route_name": [ "West 26th Street", "Madison Avenue" ],
//!     "via_indices": [ 0, 5 ],
//!     "found_alternative": false,
//!     "route_summary": {
//!         "start_point": "West 26th Street",
//!         "end_point": "West 29th Street",
//!         "total_time": 145,
//!         "total_distance": 878
//!     },
//!     "via_points": [ [ 40.744377, -73.990433 ], [ 40.745811, -73.988075 ] ],
//!     "route_instructions": [
//!         [ "10", "West 26th Street", 216, 0, 52, "216m", "SE", 118 ],
//!         [ "15", "", 0, 8, 0, "0m", "N", 0 ]
//!     ],
//!     "route_geometry": "ozyulA~p_clCfc@ywApTar@li@ybBqe@c[ue@e[ue@i[ci@dcB}^rkA",
//!     "status_message": "Found route between points",
//!     "status": 0
//! }
//! ```

use super::{
    error::{Error, Result},
    format,
    odin::{Maneuver, TripDirections},
    options::DirectionsOptions,
    tables, FOUND_ROUTE,
};
use serde::Serialize;
use serde_json::value::RawValue;

#[cfg(test)]
mod test;

/// Placeholders, hints aren't something we can give out.
#[derive(Serialize)]
struct HintData {
    locations: [&'static str; 2],
    checksum: u64,
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_point: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_point: Option<&'a str>,
    total_time: u64,
    total_distance: u64,
}

/// `[code, street, meters, begin shape index, seconds, "<meters>m", compass, heading]`
#[derive(Serialize)]
struct RouteInstruction<'a>(
    &'static str,
    &'a str,
    u64,
    u64,
    u64,
    String,
    &'static str,
    u64,
);

#[derive(Serialize)]
pub struct OsrmRoute<'a> {
    hint_data: HintData,
    route_name: Vec<&'a str>,
    via_indices: Vec<u64>,
    found_alternative: bool,
    route_summary: RouteSummary<'a>,
    via_points: Vec<[Box<RawValue>; 2]>,
    route_instructions: Vec<RouteInstruction<'a>>,
    route_geometry: &'a str,
    status_message: &'static str,
    status: u64,
}

impl<'a> TryFrom<&'a TripDirections> for OsrmRoute<'a> {
    type Error = Error;

    fn try_from(trip: &'a TripDirections) -> Result<Self> {
        Ok(OsrmRoute {
            hint_data: HintData {
                locations: ["", ""],
                checksum: 0,
            },
            route_name: route_name(trip),
            via_indices: via_indices(trip),
            found_alternative: false,
            route_summary: route_summary(trip),
            via_points: via_points(trip)?,
            route_instructions: route_instructions(trip)?,
            route_geometry: &trip.shape,
            status_message: FOUND_ROUTE,
            status: 0,
        })
    }
}

/// Renders the trip in the OSRM format. The options don't change anything
/// in this format.
pub fn serialize(_options: &DirectionsOptions, trip: &TripDirections) -> Result<String> {
    let route = OsrmRoute::try_from(trip)?;
    serde_json::to_string(&route).map_err(Error::Serialize)
}

fn street_name(maneuver: &Maneuver) -> Option<&str> {
    maneuver.street_name.first().map(String::as_str)
}

fn street_name_or_empty(maneuver: &Maneuver) -> &str {
    street_name(maneuver).unwrap_or("")
}

fn route_name(trip: &TripDirections) -> Vec<&str> {
    let mut route_name = Vec::with_capacity(2);
    if let Some(first) = trip.maneuver.first() {
        route_name.extend(street_name(first));
    }
    if trip.maneuver.len() > 1 {
        if let Some(last) = trip.maneuver.last() {
            route_name.extend(street_name(last));
        }
    }
    route_name
}

fn via_indices(trip: &TripDirections) -> Vec<u64> {
    match trip.maneuver.len() {
        0 => vec![],
        count => vec![0, (count - 1) as u64],
    }
}

fn route_summary(trip: &TripDirections) -> RouteSummary<'_> {
    // Truncated to meters per maneuver, then summed. Dropped maneuvers count too.
    // Totals wrap on overflow rather than failing the whole response.
    let (total_time, total_distance) =
        trip.maneuver
            .iter()
            .fold((0u64, 0u64), |(seconds, meters), maneuver| {
                (
                    seconds.wrapping_add(u64::from(maneuver.time)),
                    meters.wrapping_add(format::meters(maneuver.length)),
                )
            });

    RouteSummary {
        start_point: trip.maneuver.first().map(street_name_or_empty),
        end_point: trip.maneuver.last().map(street_name_or_empty),
        total_time,
        total_distance,
    }
}

fn via_points(trip: &TripDirections) -> Result<Vec<[Box<RawValue>; 2]>> {
    trip.location
        .iter()
        .map(|location| {
            let (lat, lng) = location.ll.as_ref().map_or((0.0, 0.0), |ll| (ll.lat, ll.lng));
            Ok([format::coordinate(lat)?, format::coordinate(lng)?])
        })
        .collect()
}

fn route_instructions(trip: &TripDirections) -> Result<Vec<RouteInstruction<'_>>> {
    let mut instructions = Vec::with_capacity(trip.maneuver.len());
    for maneuver in &trip.maneuver {
        let Some(code) = tables::osrm_maneuver_code_raw(maneuver.r#type) else {
            log::trace!(
                "Skipping maneuver of type {} with no OSRM equivalent",
                maneuver.r#type
            );
            continue;
        };

        instructions.push(RouteInstruction(
            code,
            street_name_or_empty(maneuver),
            format::meters(maneuver.length),
            u64::from(maneuver.begin_shape_index),
            u64::from(maneuver.time),
            format::meters_string(maneuver.length),
            tables::compass_abbreviation_raw(maneuver.begin_cardinal_direction)?,
            u64::from(maneuver.begin_heading),
        ));
    }
    Ok(instructions)
}
