use super::odin::{
    CardinalDirection, LatLng, Location, LocationType, Maneuver, ManeuverType, Summary,
    TripDirections,
};
use prost::Message;

pub const SHAPE: &str = "ozyulA~p_clCfc@ywApTar@li@ybBqe@c[ue@e[ue@i[ci@dcB}^rkA";

pub fn location(lat: f32, lng: f32) -> Location {
    Location {
        ll: Some(LatLng { lat, lng }),
        ..Default::default()
    }
}

pub fn maneuver(
    maneuver_type: ManeuverType,
    street: Option<&str>,
    length: f32,
    time: u32,
) -> Maneuver {
    Maneuver {
        r#type: maneuver_type as i32,
        street_name: street.into_iter().map(str::to_owned).collect(),
        length,
        time,
        begin_cardinal_direction: CardinalDirection::KNorth as i32,
        ..Default::default()
    }
}

/// The depart/arrive pair every client has seen a thousand times.
pub fn main_street() -> TripDirections {
    let mut depart = maneuver(ManeuverType::KStart, Some("Main St"), 0.633, 41);
    depart.text_instruction = "Start out going west on Main St.".to_owned();
    depart.begin_cardinal_direction = CardinalDirection::KWest as i32;
    depart.begin_heading = 268;
    depart.end_shape_index = 7;

    let mut arrive = maneuver(ManeuverType::KDestination, None, 0.0, 0);
    arrive.text_instruction = "You have arrived at your destination.".to_owned();
    arrive.begin_shape_index = 7;
    arrive.end_shape_index = 7;

    let mut start = location(40.744377, -73.990433);
    start.city = "New York".to_owned();
    let mut end = location(40.745811, -73.988075);
    end.r#type = LocationType::KThrough as i32;

    TripDirections {
        location: vec![start, end],
        summary: Some(Summary {
            length: 0.633,
            time: 41,
        }),
        maneuver: vec![depart, arrive],
        shape: SHAPE.to_owned(),
        ..Default::default()
    }
}

pub fn job(control: &str, trip: &TripDirections) -> Vec<Vec<u8>> {
    vec![control.as_bytes().to_vec(), trip.encode_to_vec()]
}
