pub mod coerce;

use crate::error::{CarscoreError, Result};
use crate::types::record::SpecificationRecord;
use coerce::{coerce_bool, coerce_number};
use serde_json::{Map, Value};
use tracing::trace;

const HP_TO_KW: f64 = 0.7457;

/// Converts mechanical horsepower to kW for extractors that only see bhp.
pub fn horsepower_to_kw(hp: f64) -> f64 {
    hp * HP_TO_KW
}

/// Parses a JSON document into a normalized record. Only the document shape
/// can fail; field-level problems are absorbed as absent values.
pub fn normalize_value(value: &Value) -> Result<SpecificationRecord> {
    match value {
        Value::Object(raw) => Ok(normalize_record(raw)),
        other => Err(CarscoreError::InvalidRecord(format!(
            "expected a JSON object, found {}",
            json_kind(other)
        ))),
    }
}

/// Coerces a raw attribute bag into a [`SpecificationRecord`].
///
/// Numeric fields go through [`coerce_number`], boolean fields through
/// [`coerce_bool`], `fuelType` is lowercased, other strings are kept as
/// given and unknown keys are carried over untouched.
pub fn normalize_record(raw: &Map<String, Value>) -> SpecificationRecord {
    let mut record = SpecificationRecord::default();

    for (key, value) in raw {
        match key.as_str() {
            "name" => record.name = text(value),
            "fuelType" => record.fuel_type = text(value).map(|fuel| fuel.trim().to_lowercase()),
            "transmissionType" => record.transmission_type = text(value),
            "bodyType" => record.body_type = text(value),

            "mileage" => record.mileage = number(key, value),
            "range" => record.range = number(key, value),
            "batteryCapacity" => record.battery_capacity = number(key, value),
            "displacement" => record.displacement = number(key, value),
            "cylinders" => record.cylinders = number(key, value),
            "power" => record.power = number(key, value),
            "torque" => record.torque = number(key, value),
            "gears" => record.gears = number(key, value),
            "kerbWeight" => record.kerb_weight = number(key, value),
            "length" => record.length = number(key, value),
            "width" => record.width = number(key, value),
            "height" => record.height = number(key, value),
            "groundClearance" => record.ground_clearance = number(key, value),
            "ncapStars" => record.ncap_stars = number(key, value),
            "airbags" => record.airbags = number(key, value),
            "price" => record.price = number(key, value),

            "esc" => record.esc = Some(coerce_bool(value)),
            "isofix" => record.isofix = Some(coerce_bool(value)),

            _ => {
                record.extra.insert(key.clone(), value.clone());
            }
        }
    }

    record
}

fn number(key: &str, value: &Value) -> Option<f64> {
    let parsed = coerce_number(value);
    if parsed.is_none() && !value.is_null() {
        trace!(field = key, raw = %value, "dropping unparseable numeric field");
    }
    parsed
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
