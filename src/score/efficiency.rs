use crate::types::record::FuelType;
use crate::types::scoring::{RealWorldEfficiency, Score};

/// Fuel-specific efficiency bands, in the fuel's own distance unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyThresholds {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub poor: f64,
}

impl EfficiencyThresholds {
    pub const fn new(excellent: f64, good: f64, average: f64, poor: f64) -> Self {
        Self {
            excellent,
            good,
            average,
            poor,
        }
    }

    pub fn for_fuel(fuel: Option<FuelType>) -> Self {
        match fuel {
            Some(FuelType::Diesel) => Self::new(25.0, 22.0, 19.0, 16.0),
            Some(FuelType::Hybrid) => Self::new(28.0, 24.0, 20.0, 17.0),
            Some(FuelType::Cng) => Self::new(30.0, 26.0, 22.0, 18.0),
            Some(FuelType::Electric) => Self::new(8.0, 6.5, 5.0, 3.5),
            Some(FuelType::Petrol) | None => Self::new(20.0, 17.0, 14.0, 11.0),
        }
    }

    /// Piecewise-linear position of `efficiency` across the bands.
    pub fn grade(&self, efficiency: f64) -> Score {
        let Self {
            excellent,
            good,
            average,
            poor,
        } = *self;

        if efficiency >= excellent {
            0.75 + ((efficiency - excellent) / (excellent * 0.3)).min(1.0) * 0.15
        } else if efficiency >= good {
            0.55 + (efficiency - good) / (excellent - good) * 0.20
        } else if efficiency >= average {
            0.35 + (efficiency - average) / (good - average) * 0.20
        } else if efficiency >= poor {
            0.20 + (efficiency - poor) / (average - poor) * 0.15
        } else {
            (0.20 * efficiency / poor).max(0.05)
        }
    }
}

/// Efficiency sub-score. `measured` is the estimate built from claimed
/// figures only; without it the score is derived from the design penalty.
///
/// Measured figures still receive the penalty adjustment on top of the
/// graded score.
pub fn efficiency_score(
    measured: Option<&RealWorldEfficiency>,
    fuel: Option<FuelType>,
    penalty: f64,
) -> Score {
    let Some(measured) = measured else {
        return (0.60 - (penalty * 0.02).min(0.45)).max(0.15);
    };

    let graded = EfficiencyThresholds::for_fuel(fuel).grade(measured.value);
    (graded - (penalty * 0.012).min(0.25)).clamp(0.05, 1.0)
}
