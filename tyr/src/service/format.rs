use super::{
    error::{Error, Result},
    options::Units,
};
use serde_json::value::RawValue;

pub const COORDINATE_PRECISION: usize = 6;
pub const LENGTH_PRECISION: usize = 3;

/// Kilometers to whole meters. The multiplication stays in single
/// precision and the result is truncated, never rounded.
pub fn meters(length_km: f32) -> u64 {
    (length_km * 1000.0_f32) as u64
}

pub fn meters_string(length_km: f32) -> String {
    format!("{}m", meters(length_km))
}

/// A JSON number printed with exactly `precision` digits after the point,
/// trailing zeros included.
pub fn fixed(value: f64, precision: usize) -> Result<Box<RawValue>> {
    RawValue::from_string(format!("{value:.precision$}")).map_err(Error::Serialize)
}

pub fn coordinate(degrees: f32) -> Result<Box<RawValue>> {
    fixed(f64::from(degrees), COORDINATE_PRECISION)
}

pub fn length(length: f32) -> Result<Box<RawValue>> {
    fixed(f64::from(length), LENGTH_PRECISION)
}

pub fn units_name(units: Units) -> &'static str {
    match units {
        Units::Kilometers => "kilometers",
        Units::Miles => "miles",
    }
}
