use super::serialize;
use crate::service::{
    error::Error,
    fixture::{self, SHAPE},
    odin::{ManeuverType, TripDirections},
    options::DirectionsOptions,
};
use serde_json::{json, Value};

fn osrm(trip: &TripDirections) -> Value {
    let text = serialize(&DirectionsOptions::default(), trip).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn main_street_renders_exactly() {
    let text = serialize(&DirectionsOptions::default(), &fixture::main_street()).unwrap();

    let expected = String::from(r#"{"hint_data":{"locations":["",""],"checksum":0},"#)
        + r#""route_name":["Main St"],"via_indices":[0,1],"found_alternative":false,"#
        + r#""route_summary":{"start_point":"Main St","end_point":"","total_time":41,"total_distance":633},"#
        + r#""via_points":[[40.744377,-73.990433],[40.745811,-73.988075]],"#
        + r#""route_instructions":[["14","Main St",633,0,41,"633m","W",268],["15","",0,7,0,"0m","N",0]],"#
        + r#""route_geometry":""# + SHAPE + r#"","#
        + r#""status_message":"Found route between points","status":0}"#;
    assert_eq!(expected, text);
}

#[test]
fn depart_and_arrive() {
    let route = osrm(&fixture::main_street());

    assert_eq!(json!(["Main St"]), route["route_name"]);
    assert_eq!(2, route["route_instructions"].as_array().unwrap().len());
    assert_eq!(json!(""), route["route_instructions"][1][1]);
    assert_eq!(json!(633), route["route_summary"]["total_distance"]);
    assert_eq!(json!(41), route["route_summary"]["total_time"]);
}

#[test]
fn unmapped_maneuvers_are_dropped_in_order() {
    let mut trip = fixture::main_street();
    let transit = fixture::maneuver(ManeuverType::KTransit, Some("Red Line"), 2.0, 300);
    let mut unknown = fixture::maneuver(ManeuverType::KLeft, Some("Nowhere"), 0.1, 10);
    unknown.r#type = 77;
    let left = fixture::maneuver(ManeuverType::KRampLeft, Some("I-95 S"), 0.5, 30);
    trip.maneuver.splice(1..1, [transit, unknown, left]);

    let route = osrm(&trip);
    let instructions = route["route_instructions"].as_array().unwrap();

    let codes: Vec<&str> = instructions.iter().map(|i| i[0].as_str().unwrap()).collect();
    assert_eq!(vec!["14", "7", "15"], codes);
    assert_eq!(json!("I-95 S"), instructions[1][1]);

    // dropped maneuvers still count toward the totals and the via indices
    assert_eq!(json!([0, 4]), route["via_indices"]);
    assert_eq!(json!(41 + 300 + 10 + 30), route["route_summary"]["total_time"]);
    assert_eq!(json!(633 + 2000 + 100 + 500), route["route_summary"]["total_distance"]);
}

#[test]
fn total_distance_truncates_each_maneuver() {
    let trip = TripDirections {
        maneuver: vec![
            fixture::maneuver(ManeuverType::KStart, Some("A"), 0.2159, 1),
            fixture::maneuver(ManeuverType::KContinue, Some("B"), 1.2345, 1),
            fixture::maneuver(ManeuverType::KDestination, Some("C"), 0.0999, 1),
        ],
        ..Default::default()
    };

    let route = osrm(&trip);

    // 215 + 1234 + 99, where truncating the sum would give 1550
    assert_eq!(json!(1548), route["route_summary"]["total_distance"]);
    let meters: Vec<u64> = route["route_instructions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i[2].as_u64().unwrap())
        .collect();
    assert_eq!(vec![215, 1234, 99], meters);
    assert_eq!(json!("1234m"), route["route_instructions"][1][5]);
}

#[test]
fn route_name_uses_last_street_when_present() {
    let mut trip = fixture::main_street();
    trip.maneuver[1].street_name = vec!["Elm St".to_owned(), "Route 9".to_owned()];

    let route = osrm(&trip);

    assert_eq!(json!(["Main St", "Elm St"]), route["route_name"]);
    assert_eq!(json!("Elm St"), route["route_summary"]["end_point"]);
}

#[test]
fn single_maneuver_names_the_route_once() {
    let trip = TripDirections {
        maneuver: vec![fixture::maneuver(ManeuverType::KStart, Some("Main St"), 0.1, 5)],
        ..Default::default()
    };

    let route = osrm(&trip);

    assert_eq!(json!(["Main St"]), route["route_name"]);
    assert_eq!(json!([0, 0]), route["via_indices"]);
    assert_eq!(json!("Main St"), route["route_summary"]["start_point"]);
    assert_eq!(json!("Main St"), route["route_summary"]["end_point"]);
}

#[test]
fn empty_trip() {
    let route = osrm(&TripDirections::default());

    assert_eq!(json!([]), route["route_name"]);
    assert_eq!(json!([]), route["via_indices"]);
    assert_eq!(json!([]), route["via_points"]);
    assert_eq!(json!([]), route["route_instructions"]);
    assert_eq!(
        json!({ "total_time": 0, "total_distance": 0 }),
        route["route_summary"]
    );
    assert_eq!(json!(false), route["found_alternative"]);
    assert_eq!(json!(0), route["status"]);
}

#[test]
fn unknown_cardinal_direction_fails() {
    let mut trip = fixture::main_street();
    trip.maneuver[0].begin_cardinal_direction = 12;

    let result = serialize(&DirectionsOptions::default(), &trip);

    assert!(matches!(result, Err(Error::UnknownCardinalDirection(12))));
}

#[test]
fn huge_lengths_wrap_total_distance() {
    let trip = TripDirections {
        maneuver: vec![
            fixture::maneuver(ManeuverType::KStart, Some("Main St"), 1.0e30, 10),
            fixture::maneuver(ManeuverType::KDestination, None, 1.0e30, 20),
        ],
        ..Default::default()
    };

    let route = osrm(&trip);

    assert_eq!(json!(u64::MAX - 1), route["route_summary"]["total_distance"]);
    assert_eq!(json!(30), route["route_summary"]["total_time"]);
}
