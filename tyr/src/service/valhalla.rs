//! The native output. Unlike the OSRM format every maneuver makes it into
//! the response, and optional location detail is only present when the
//! trip actually has it.
//!
//! ```json
//! {
//!     "trip": {
//!         "locations": [
//!             { "type": "break", "lat": 40.413600, "lon": -76.479100, "city": "Lebanon" },
//!             { "type": "break", "lat": 40.402900, "lon": -76.535200 }
//!         ],
//!         "summary": { "time": 325, "length": 4.973 },
//!         "legs": [
//!             {
//!                 "maneuvers": [
//!                     {
//!                         "type": 1,
//!                         "instruction": "Start out going west on West Market Street.",
//!                         "street_names": [ "West Market Street" ],
//!                         "time": 41,
//!                         "length": 0.633,
//!                         "begin_shape_index": 0,
//!                         "end_shape_index": 7
//!                     }
//!                 ],
//!                 "summary": { "time": 325, "length": 4.973 },
//!                 "shape": "gysalAlg|zpC~Clt@tDtx@hHfaBdKl{BrKbnApGro@"
//!             }
//!         ],
//!         "status_message": "Found route between points",
//!         "status": 0,
//!         "units": "kilometers"
//!     }
//! }
//! ```

use super::{
    error::{Error, Result},
    format,
    odin::{self, LocationType, TripDirections},
    options::DirectionsOptions,
    FOUND_ROUTE,
};
use serde::Serialize;
use serde_json::value::RawValue;


fn is_false(value: &bool) -> bool {
    !value
}

#[derive(Serialize)]
struct Location<'a> {
    r#type: &'static str,
    lat: Box<RawValue>,
    lon: Box<RawValue>,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    street: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    city: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    state: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    postal_code: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    country: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading: Option<u32>,
    #[serde(skip_serializing_if = "str::is_empty")]
    date_time: &'a str,
}

impl<'a> TryFrom<&'a odin::Location> for Location<'a> {
    type Error = Error;

    fn try_from(location: &'a odin::Location) -> Result<Self> {
        let (lat, lng) = location
            .ll
            .as_ref()
            .map_or((0.0, 0.0), |ll| (ll.lat, ll.lng));

        Ok(Location {
            r#type: match LocationType::from_i32(location.r#type) {
                Some(LocationType::KThrough) => "through",
                _ => "break",
            },
            lat: format::coordinate(lat)?,
            lon: format::coordinate(lng)?,
            name: &location.name,
            street: &location.street,
            city: &location.city,
            state: &location.state,
            postal_code: &location.postal_code,
            country: &location.country,
            heading: location.heading,
            date_time: &location.date_time,
        })
    }
}

#[derive(Serialize)]
struct Summary {
    time: u64,
    length: Box<RawValue>,
}

impl TryFrom<Option<&odin::Summary>> for Summary {
    type Error = Error;

    fn try_from(summary: Option<&odin::Summary>) -> Result<Self> {
        let (time, length) = summary.map_or((0, 0.0), |s| (s.time, s.length));
        Ok(Summary {
            time: u64::from(time),
            length: format::length(length)?,
        })
    }
}

#[derive(Serialize)]
struct Maneuver<'a> {
    r#type: i32,
    instruction: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    street_names: &'a [String],
    time: u64,
    length: Box<RawValue>,
    begin_shape_index: u64,
    end_shape_index: u64,
    #[serde(skip_serializing_if = "is_false")]
    toll: bool,
    #[serde(skip_serializing_if = "is_false")]
    rough: bool,
}

impl<'a> TryFrom<&'a odin::Maneuver> for Maneuver<'a> {
    type Error = Error;

    fn try_from(maneuver: &'a odin::Maneuver) -> Result<Self> {
        Ok(Maneuver {
            r#type: maneuver.r#type,
            instruction: &maneuver.text_instruction,
            street_names: &maneuver.street_name,
            time: u64::from(maneuver.time),
            length: format::length(maneuver.length)?,
            begin_shape_index: u64::from(maneuver.begin_shape_index),
            end_shape_index: u64::from(maneuver.end_shape_index),
            toll: maneuver.portions_toll,
            rough: maneuver.portions_unpaved,
        })
    }
}

#[derive(Serialize)]
struct Leg<'a> {
    maneuvers: Vec<Maneuver<'a>>,
    summary: Summary,
    shape: &'a str,
}

#[derive(Serialize)]
struct Trip<'a> {
    locations: Vec<Location<'a>>,
    summary: Summary,
    legs: Vec<Leg<'a>>,
    status_message: &'static str,
    status: u64,
    units: &'static str,
}

#[derive(Serialize)]
pub struct ValhallaRoute<'a> {
    trip: Trip<'a>,
}

impl<'a> ValhallaRoute<'a> {
    pub fn try_new(options: &DirectionsOptions, trip: &'a TripDirections) -> Result<Self> {
        let locations = trip
            .location
            .iter()
            .map(Location::try_from)
            .collect::<Result<Vec<_>>>()?;

        let maneuvers = trip
            .maneuver
            .iter()
            .map(Maneuver::try_from)
            .collect::<Result<Vec<_>>>()?;

        // Only ever one leg until multi point routes are supported.
        let leg = Leg {
            maneuvers,
            summary: Summary::try_from(trip.summary.as_ref())?,
            shape: &trip.shape,
        };

        Ok(ValhallaRoute {
            trip: Trip {
                locations,
                summary: Summary::try_from(trip.summary.as_ref())?,
                legs: vec![leg],
                status_message: FOUND_ROUTE,
                status: 0,
                units: format::units_name(options.units),
            },
        })
    }
}

pub fn serialize(options: &DirectionsOptions, trip: &TripDirections) -> Result<String> {
    let route = ValhallaRoute::try_new(options, trip)?;
    serde_json::to_string(&route).map_err(Error::Serialize)
}
