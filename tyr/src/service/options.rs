use super::error::Error;
use serde::{de::IgnoredAny, Deserialize, Deserializer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Units {
    #[default]
    Kilometers,
    Miles,
}

impl From<String> for Units {
    fn from(value: String) -> Self {
        match value.as_str() {
            "miles" | "mi" => Units::Miles,
            _ => Units::Kilometers,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DirectionsOptions {
    pub units: Units,
}

/// The textual half of a job: how the caller wants the directions rendered.
///
/// ```json
/// { "directions_options": { "units": "miles" }, "jsonp": "callback", "osrm": true }
/// ```
///
/// `osrm` only has to be present to select the OSRM format, whatever its
/// value, `null` included. The block arrives as JSON text rather than the
/// boost INFO text older pipeline stages produced.
#[derive(Debug, Default, Deserialize)]
pub struct ControlBlock {
    #[serde(default)]
    pub directions_options: DirectionsOptions,
    pub jsonp: Option<String>,
    #[serde(default, deserialize_with = "present")]
    osrm: bool,
}

fn present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

impl ControlBlock {
    pub fn osrm(&self) -> bool {
        self.osrm
    }
}

impl TryFrom<&[u8]> for ControlBlock {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(value).map_err(Error::ControlBlock)
    }
}
