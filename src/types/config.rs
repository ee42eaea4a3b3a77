use crate::error::CarscoreError;
use crate::types::record::FuelType;
use serde::{Deserialize, Serialize};

/// Scoring settings. Every field has a built-in default so a partial
/// `carscore.toml` only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub fuel_prices: FuelPriceConfig,
}

/// Integer weights applied to the four sub-scores. Expected to sum to 100;
/// the engine uses them as given and only [`ScoringConfig::validate`]
/// enforces the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub efficiency: u32,
    pub safety: u32,
    pub value_for_money: u32,
    pub performance_per_efficiency: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            efficiency: 40,
            safety: 25,
            value_for_money: 20,
            performance_per_efficiency: 15,
        }
    }
}

impl WeightsConfig {
    pub fn total(&self) -> u64 {
        [
            self.efficiency,
            self.safety,
            self.value_for_money,
            self.performance_per_efficiency,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }
}

/// Price per litre (petrol, diesel), per kg (cng) or per kWh (electricity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPriceConfig {
    pub petrol: f64,
    pub diesel: f64,
    pub cng: f64,
    pub electricity: f64,
}

impl Default for FuelPriceConfig {
    fn default() -> Self {
        Self {
            petrol: 103.0,
            diesel: 90.0,
            cng: 76.0,
            electricity: 8.0,
        }
    }
}

impl FuelPriceConfig {
    /// Hybrids have no price of their own in the table.
    pub fn price_for(&self, fuel: FuelType) -> Option<f64> {
        match fuel {
            FuelType::Petrol => Some(self.petrol),
            FuelType::Diesel => Some(self.diesel),
            FuelType::Cng => Some(self.cng),
            FuelType::Electric => Some(self.electricity),
            FuelType::Hybrid => None,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), CarscoreError> {
        let total = self.weights.total();
        if total != 100 {
            return Err(CarscoreError::ConfigParse(format!(
                "weights must sum to 100 (found {total})"
            )));
        }

        for (key, price) in [
            ("petrol", self.fuel_prices.petrol),
            ("diesel", self.fuel_prices.diesel),
            ("cng", self.fuel_prices.cng),
            ("electricity", self.fuel_prices.electricity),
        ] {
            if !price.is_finite() || price <= 0.0 {
                return Err(CarscoreError::ConfigParse(format!(
                    "fuel_prices.{key} must be a positive number (found {price})"
                )));
            }
        }

        Ok(())
    }
}
