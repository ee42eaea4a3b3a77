use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One vehicle trim as scraped from a specification page.
///
/// Every field is optional. Numeric fields hold finite, non-negative values
/// once the record has gone through [`crate::normalize::normalize_record`].
/// Enum-like fields keep their source text and are resolved lazily by the
/// scoring functions, so an unrecognized value never fails a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_capacity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cylinders: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torque: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gears: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kerb_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_clearance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ncap_stars: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airbags: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isofix: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Keys the record does not model, kept as-is for diagnostics.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

macro_rules! fill_fields {
    ($target:expr, $overlay:expr, $filled:expr, $($field:ident => $key:literal),+ $(,)?) => {
        $(
            if $target.$field.is_none() && $overlay.$field.is_some() {
                $target.$field = $overlay.$field.clone();
                $filled.push($key);
            }
        )+
    };
}

impl SpecificationRecord {
    /// Fills absent fields from a lower-confidence record, such as an AI
    /// enrichment pass. Fields already present are never overwritten.
    /// Returns the camelCase names of the fields that were filled.
    pub fn fill_missing_from(&mut self, overlay: &SpecificationRecord) -> Vec<&'static str> {
        let mut filled = Vec::new();
        fill_fields!(self, overlay, filled,
            name => "name",
            fuel_type => "fuelType",
            mileage => "mileage",
            range => "range",
            battery_capacity => "batteryCapacity",
            displacement => "displacement",
            cylinders => "cylinders",
            power => "power",
            torque => "torque",
            transmission_type => "transmissionType",
            gears => "gears",
            kerb_weight => "kerbWeight",
            length => "length",
            width => "width",
            height => "height",
            ground_clearance => "groundClearance",
            body_type => "bodyType",
            ncap_stars => "ncapStars",
            airbags => "airbags",
            esc => "esc",
            isofix => "isofix",
            price => "price",
        );
        filled
    }

    pub fn fuel(&self) -> Option<FuelType> {
        self.fuel_type.as_deref().and_then(FuelType::parse)
    }

    /// Power-to-weight in kW per tonne, when both inputs are usable.
    pub fn power_to_weight(&self) -> Option<f64> {
        match (positive(self.power), positive(self.kerb_weight)) {
            (Some(power), Some(kerb_weight)) => Some(power / (kerb_weight / 1000.0)),
            _ => None,
        }
    }
}

/// Treats zero like an absent value, matching how the scraped data uses 0
/// as "not listed".
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Cng,
    Electric,
}

impl FuelType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "petrol" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            "hybrid" => Some(Self::Hybrid),
            "cng" => Some(Self::Cng),
            "electric" => Some(Self::Electric),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransmissionType {
    Manual,
    Amt,
    Cvt,
    Dct,
    Automatic,
    Hybrid,
}

impl TransmissionType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "amt" => Some(Self::Amt),
            "cvt" => Some(Self::Cvt),
            "dct" => Some(Self::Dct),
            "automatic" => Some(Self::Automatic),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Hatchback,
    Sedan,
    Suv,
    Mpv,
    Crossover,
    Coupe,
    Convertible,
}

impl BodyType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "hatchback" => Some(Self::Hatchback),
            "sedan" => Some(Self::Sedan),
            "suv" => Some(Self::Suv),
            "mpv" => Some(Self::Mpv),
            "crossover" => Some(Self::Crossover),
            "coupe" => Some(Self::Coupe),
            "convertible" => Some(Self::Convertible),
            _ => None,
        }
    }
}
