#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LatLng {
    #[prost(float, tag = "1")]
    pub lat: f32,
    #[prost(float, tag = "2")]
    pub lng: f32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TripDirections {
    #[prost(uint64, tag = "1")]
    pub trip_id: u64,
    #[prost(uint32, tag = "2")]
    pub leg_id: u32,
    #[prost(uint32, tag = "3")]
    pub leg_count: u32,
    #[prost(message, repeated, tag = "4")]
    pub location: ::prost::alloc::vec::Vec<trip_directions::Location>,
    #[prost(message, optional, tag = "5")]
    pub summary: ::core::option::Option<trip_directions::Summary>,
    #[prost(message, repeated, tag = "6")]
    pub maneuver: ::prost::alloc::vec::Vec<trip_directions::Maneuver>,
    #[prost(string, tag = "7")]
    pub shape: ::prost::alloc::string::String,
}
/// Nested message and enum types in `TripDirections`.
pub mod trip_directions {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Location {
        #[prost(message, optional, tag = "1")]
        pub ll: ::core::option::Option<super::LatLng>,
        #[prost(enumeration = "location::Type", tag = "2")]
        pub r#type: i32,
        #[prost(uint32, optional, tag = "3")]
        pub heading: ::core::option::Option<u32>,
        #[prost(string, tag = "4")]
        pub name: ::prost::alloc::string::String,
        #[prost(string, tag = "5")]
        pub street: ::prost::alloc::string::String,
        #[prost(string, tag = "6")]
        pub city: ::prost::alloc::string::String,
        #[prost(string, tag = "7")]
        pub state: ::prost::alloc::string::String,
        #[prost(string, tag = "8")]
        pub postal_code: ::prost::alloc::string::String,
        #[prost(string, tag = "9")]
        pub country: ::prost::alloc::string::String,
        #[prost(string, tag = "10")]
        pub date_time: ::prost::alloc::string::String,
        #[prost(enumeration = "location::SideOfStreet", tag = "11")]
        pub side_of_street: i32,
    }
    /// Nested message and enum types in `Location`.
    pub mod location {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Type {
            KBreak = 0,
            KThrough = 1,
        }
        impl Type {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Type::KBreak => "kBreak",
                    Type::KThrough => "kThrough",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "kBreak" => Some(Self::KBreak),
                    "kThrough" => Some(Self::KThrough),
                    _ => None,
                }
            }
        }
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum SideOfStreet {
            KNone = 0,
            KLeft = 1,
            KRight = 2,
        }
        impl SideOfStreet {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    SideOfStreet::KNone => "kNone",
                    SideOfStreet::KLeft => "kLeft",
                    SideOfStreet::KRight => "kRight",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "kNone" => Some(Self::KNone),
                    "kLeft" => Some(Self::KLeft),
                    "kRight" => Some(Self::KRight),
                    _ => None,
                }
            }
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Summary {
        /// kilometers
        #[prost(float, tag = "1")]
        pub length: f32,
        /// seconds
        #[prost(uint32, tag = "2")]
        pub time: u32,
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Maneuver {
        #[prost(enumeration = "maneuver::Type", tag = "1")]
        pub r#type: i32,
        #[prost(string, tag = "2")]
        pub text_instruction: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "3")]
        pub street_name: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        /// kilometers
        #[prost(float, tag = "4")]
        pub length: f32,
        /// seconds
        #[prost(uint32, tag = "5")]
        pub time: u32,
        #[prost(enumeration = "maneuver::CardinalDirection", tag = "6")]
        pub begin_cardinal_direction: i32,
        #[prost(uint32, tag = "7")]
        pub begin_heading: u32,
        #[prost(uint32, tag = "8")]
        pub begin_shape_index: u32,
        #[prost(uint32, tag = "9")]
        pub end_shape_index: u32,
        #[prost(bool, tag = "10")]
        pub portions_toll: bool,
        #[prost(bool, tag = "11")]
        pub portions_unpaved: bool,
    }
    /// Nested message and enum types in `Maneuver`.
    pub mod maneuver {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum CardinalDirection {
            KNorth = 0,
            KNorthEast = 1,
            KEast = 2,
            KSouthEast = 3,
            KSouth = 4,
            KSouthWest = 5,
            KWest = 6,
            KNorthWest = 7,
        }
        impl CardinalDirection {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    CardinalDirection::KNorth => "kNorth",
                    CardinalDirection::KNorthEast => "kNorthEast",
                    CardinalDirection::KEast => "kEast",
                    CardinalDirection::KSouthEast => "kSouthEast",
                    CardinalDirection::KSouth => "kSouth",
                    CardinalDirection::KSouthWest => "kSouthWest",
                    CardinalDirection::KWest => "kWest",
                    CardinalDirection::KNorthWest => "kNorthWest",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "kNorth" => Some(Self::KNorth),
                    "kNorthEast" => Some(Self::KNorthEast),
                    "kEast" => Some(Self::KEast),
                    "kSouthEast" => Some(Self::KSouthEast),
                    "kSouth" => Some(Self::KSouth),
                    "kSouthWest" => Some(Self::KSouthWest),
                    "kWest" => Some(Self::KWest),
                    "kNorthWest" => Some(Self::KNorthWest),
                    _ => None,
                }
            }
        }
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Type {
            KNone = 0,
            KStart = 1,
            KStartRight = 2,
            KStartLeft = 3,
            KDestination = 4,
            KDestinationRight = 5,
            KDestinationLeft = 6,
            KBecomes = 7,
            KContinue = 8,
            KSlightRight = 9,
            KRight = 10,
            KSharpRight = 11,
            KUturnRight = 12,
            KUturnLeft = 13,
            KSharpLeft = 14,
            KLeft = 15,
            KSlightLeft = 16,
            KRampStraight = 17,
            KRampRight = 18,
            KRampLeft = 19,
            KExitRight = 20,
            KExitLeft = 21,
            KStayStraight = 22,
            KStayRight = 23,
            KStayLeft = 24,
            KMerge = 25,
            KRoundaboutEnter = 26,
            KRoundaboutExit = 27,
            KFerryEnter = 28,
            KFerryExit = 29,
            KTransit = 30,
            KTransitTransfer = 31,
            KTransitRemainOn = 32,
            KTransitConnectionStart = 33,
            KTransitConnectionTransfer = 34,
            KTransitConnectionDestination = 35,
            KPostTransitConnectionDestination = 36,
        }
        impl Type {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Type::KNone => "kNone",
                    Type::KStart => "kStart",
                    Type::KStartRight => "kStartRight",
                    Type::KStartLeft => "kStartLeft",
                    Type::KDestination => "kDestination",
                    Type::KDestinationRight => "kDestinationRight",
                    Type::KDestinationLeft => "kDestinationLeft",
                    Type::KBecomes => "kBecomes",
                    Type::KContinue => "kContinue",
                    Type::KSlightRight => "kSlightRight",
                    Type::KRight => "kRight",
                    Type::KSharpRight => "kSharpRight",
                    Type::KUturnRight => "kUturnRight",
                    Type::KUturnLeft => "kUturnLeft",
                    Type::KSharpLeft => "kSharpLeft",
                    Type::KLeft => "kLeft",
                    Type::KSlightLeft => "kSlightLeft",
                    Type::KRampStraight => "kRampStraight",
                    Type::KRampRight => "kRampRight",
                    Type::KRampLeft => "kRampLeft",
                    Type::KExitRight => "kExitRight",
                    Type::KExitLeft => "kExitLeft",
                    Type::KStayStraight => "kStayStraight",
                    Type::KStayRight => "kStayRight",
                    Type::KStayLeft => "kStayLeft",
                    Type::KMerge => "kMerge",
                    Type::KRoundaboutEnter => "kRoundaboutEnter",
                    Type::KRoundaboutExit => "kRoundaboutExit",
                    Type::KFerryEnter => "kFerryEnter",
                    Type::KFerryExit => "kFerryExit",
                    Type::KTransit => "kTransit",
                    Type::KTransitTransfer => "kTransitTransfer",
                    Type::KTransitRemainOn => "kTransitRemainOn",
                    Type::KTransitConnectionStart => "kTransitConnectionStart",
                    Type::KTransitConnectionTransfer => "kTransitConnectionTransfer",
                    Type::KTransitConnectionDestination => "kTransitConnectionDestination",
                    Type::KPostTransitConnectionDestination => {
                        "kPostTransitConnectionDestination"
                    }
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "kNone" => Some(Self::KNone),
                    "kStart" => Some(Self::KStart),
                    "kStartRight" => Some(Self::KStartRight),
                    "kStartLeft" => Some(Self::KStartLeft),
                    "kDestination" => Some(Self::KDestination),
                    "kDestinationRight" => Some(Self::KDestinationRight),
                    "kDestinationLeft" => Some(Self::KDestinationLeft),
                    "kBecomes" => Some(Self::KBecomes),
                    "kContinue" => Some(Self::KContinue),
                    "kSlightRight" => Some(Self::KSlightRight),
                    "kRight" => Some(Self::KRight),
                    "kSharpRight" => Some(Self::KSharpRight),
                    "kUturnRight" => Some(Self::KUturnRight),
                    "kUturnLeft" => Some(Self::KUturnLeft),
                    "kSharpLeft" => Some(Self::KSharpLeft),
                    "kLeft" => Some(Self::KLeft),
                    "kSlightLeft" => Some(Self::KSlightLeft),
                    "kRampStraight" => Some(Self::KRampStraight),
                    "kRampRight" => Some(Self::KRampRight),
                    "kRampLeft" => Some(Self::KRampLeft),
                    "kExitRight" => Some(Self::KExitRight),
                    "kExitLeft" => Some(Self::KExitLeft),
                    "kStayStraight" => Some(Self::KStayStraight),
                    "kStayRight" => Some(Self::KStayRight),
                    "kStayLeft" => Some(Self::KStayLeft),
                    "kMerge" => Some(Self::KMerge),
                    "kRoundaboutEnter" => Some(Self::KRoundaboutEnter),
                    "kRoundaboutExit" => Some(Self::KRoundaboutExit),
                    "kFerryEnter" => Some(Self::KFerryEnter),
                    "kFerryExit" => Some(Self::KFerryExit),
                    "kTransit" => Some(Self::KTransit),
                    "kTransitTransfer" => Some(Self::KTransitTransfer),
                    "kTransitRemainOn" => Some(Self::KTransitRemainOn),
                    "kTransitConnectionStart" => Some(Self::KTransitConnectionStart),
                    "kTransitConnectionTransfer" => Some(Self::KTransitConnectionTransfer),
                    "kTransitConnectionDestination" => Some(Self::KTransitConnectionDestination),
                    "kPostTransitConnectionDestination" => {
                        Some(Self::KPostTransitConnectionDestination)
                    }
                    _ => None,
                }
            }
        }
    }
}
