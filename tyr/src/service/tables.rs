use super::{
    error::{Error, Result},
    odin::{CardinalDirection, ManeuverType},
};

/// The OSRM turn instruction code for a maneuver type.
///
/// OSRM knows nothing of transit, and a handful of its own codes
/// (9 reach via location, 13 stay on roundabout, 16/17 enter/leave
/// against allowed direction) have no maneuver producing them. `None`
/// means the maneuver cannot be described in that format at all.
pub const fn osrm_maneuver_code(maneuver_type: ManeuverType) -> Option<&'static str> {
    use ManeuverType::*;

    match maneuver_type {
        KNone => Some("0"),
        KContinue | KBecomes | KRampStraight | KStayStraight | KMerge | KFerryEnter
        | KFerryExit => Some("1"),
        KSlightRight => Some("2"),
        KRight | KRampRight | KExitRight | KStayRight => Some("3"),
        KSharpRight => Some("4"),
        KUturnLeft | KUturnRight => Some("5"),
        KSharpLeft => Some("6"),
        KLeft | KRampLeft | KExitLeft | KStayLeft => Some("7"),
        KSlightLeft => Some("8"),
        KRoundaboutEnter => Some("11"),
        KRoundaboutExit => Some("12"),
        KStart | KStartRight | KStartLeft => Some("14"),
        KDestination | KDestinationRight | KDestinationLeft => Some("15"),
        KTransit
        | KTransitTransfer
        | KTransitRemainOn
        | KTransitConnectionStart
        | KTransitConnectionTransfer
        | KTransitConnectionDestination
        | KPostTransitConnectionDestination => None,
    }
}

/// Same as [`osrm_maneuver_code`] but from the raw wire value. Values the
/// enumeration doesn't know about have no code either.
pub fn osrm_maneuver_code_raw(raw: i32) -> Option<&'static str> {
    ManeuverType::from_i32(raw).and_then(osrm_maneuver_code)
}

pub const fn compass_abbreviation(direction: CardinalDirection) -> &'static str {
    match direction {
        CardinalDirection::KNorth => "N",
        CardinalDirection::KNorthEast => "NE",
        CardinalDirection::KEast => "E",
        CardinalDirection::KSouthEast => "SE",
        CardinalDirection::KSouth => "S",
        CardinalDirection::KSouthWest => "SW",
        CardinalDirection::KWest => "W",
        CardinalDirection::KNorthWest => "NW",
    }
}

/// Every maneuver must carry one of the eight octants, so a raw value
/// outside of them is an error rather than something to skip.
pub fn compass_abbreviation_raw(raw: i32) -> Result<&'static str> {
    CardinalDirection::from_i32(raw)
        .map(compass_abbreviation)
        .ok_or(Error::UnknownCardinalDirection(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_variants_share_a_code() {
        for maneuver_type in [
            ManeuverType::KContinue,
            ManeuverType::KBecomes,
            ManeuverType::KRampStraight,
            ManeuverType::KStayStraight,
            ManeuverType::KMerge,
            ManeuverType::KFerryEnter,
            ManeuverType::KFerryExit,
        ] {
            assert_eq!(Some("1"), osrm_maneuver_code(maneuver_type));
        }
    }

    #[test]
    fn left_and_uturn_variants_collapse() {
        assert_eq!(Some("7"), osrm_maneuver_code(ManeuverType::KRampLeft));
        assert_eq!(Some("7"), osrm_maneuver_code(ManeuverType::KExitLeft));
        assert_eq!(Some("7"), osrm_maneuver_code(ManeuverType::KStayLeft));
        assert_eq!(Some("5"), osrm_maneuver_code(ManeuverType::KUturnLeft));
        assert_eq!(Some("5"), osrm_maneuver_code(ManeuverType::KUturnRight));
        assert_eq!(Some("14"), osrm_maneuver_code(ManeuverType::KStartLeft));
        assert_eq!(Some("15"), osrm_maneuver_code(ManeuverType::KDestinationRight));
    }

    #[test]
    fn transit_and_unknown_types_have_no_code() {
        assert_eq!(None, osrm_maneuver_code(ManeuverType::KTransit));
        assert_eq!(None, osrm_maneuver_code_raw(ManeuverType::KTransitRemainOn as i32));
        assert_eq!(None, osrm_maneuver_code_raw(99));
        assert_eq!(None, osrm_maneuver_code_raw(-1));
        assert_eq!(Some("12"), osrm_maneuver_code_raw(27));
    }

    #[test]
    fn every_octant_has_an_abbreviation() {
        let abbreviations: Vec<&str> = (0..8)
            .map(|raw| compass_abbreviation_raw(raw).unwrap())
            .collect();
        assert_eq!(vec!["N", "NE", "E", "SE", "S", "SW", "W", "NW"], abbreviations);
    }

    #[test]
    fn octant_out_of_range_is_an_error() {
        assert!(matches!(
            compass_abbreviation_raw(8),
            Err(Error::UnknownCardinalDirection(8))
        ));
    }
}
