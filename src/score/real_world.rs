use crate::types::record::{positive, FuelType, SpecificationRecord};
use crate::types::scoring::{EfficiencySource, RealWorldEfficiency};

const EV_RANGE_FACTOR: f64 = 0.75;
const MIN_PENALTY_FACTOR: f64 = 0.4;
const PENALTY_FACTOR_SLOPE: f64 = 0.015;

/// Real-world correction applied to claimed figures.
pub fn correction_factor(fuel: Option<FuelType>) -> f64 {
    match fuel {
        Some(FuelType::Hybrid) => 0.85,
        _ => 0.8,
    }
}

/// Nominal efficiency for a typical vehicle of the given fuel, in km/l,
/// km/kg or km/kWh.
pub fn baseline_efficiency(fuel: Option<FuelType>) -> f64 {
    match fuel {
        Some(FuelType::Diesel) => 20.0,
        Some(FuelType::Hybrid) => 23.0,
        Some(FuelType::Cng) => 25.0,
        Some(FuelType::Electric) => 6.0,
        Some(FuelType::Petrol) | None => 16.0,
    }
}

/// Estimate from measured data only: claimed mileage, or EV range over
/// battery capacity.
pub fn measured_efficiency(record: &SpecificationRecord) -> Option<RealWorldEfficiency> {
    let fuel = record.fuel();

    if let Some(mileage) = positive(record.mileage) {
        return Some(RealWorldEfficiency {
            value: mileage * correction_factor(fuel),
            source: EfficiencySource::MeasuredMileage,
        });
    }

    if fuel == Some(FuelType::Electric) {
        if let (Some(range), Some(battery)) =
            (positive(record.range), positive(record.battery_capacity))
        {
            return Some(RealWorldEfficiency {
                value: range * EV_RANGE_FACTOR / battery,
                source: EfficiencySource::ElectricRange,
            });
        }
    }

    None
}

/// Best-effort real-world efficiency: measured data when available,
/// otherwise the fuel baseline scaled down by the design penalty.
pub fn real_world_efficiency(record: &SpecificationRecord, penalty: f64) -> RealWorldEfficiency {
    if let Some(measured) = measured_efficiency(record) {
        return measured;
    }

    let fuel = record.fuel();
    let penalty_factor = (1.0 - penalty * PENALTY_FACTOR_SLOPE).max(MIN_PENALTY_FACTOR);
    RealWorldEfficiency {
        value: baseline_efficiency(fuel) * penalty_factor * correction_factor(fuel),
        source: EfficiencySource::ModelledBaseline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fuel: &str) -> SpecificationRecord {
        SpecificationRecord {
            fuel_type: Some(fuel.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn petrol_mileage_is_corrected_by_eighty_percent() {
        let mut spec = record("petrol");
        spec.mileage = Some(20.0);
        let estimate = real_world_efficiency(&spec, 12.0);
        assert_eq!(estimate.value, 16.0);
        assert_eq!(estimate.source, EfficiencySource::MeasuredMileage);
    }

    #[test]
    fn hybrid_mileage_uses_hybrid_correction() {
        let mut spec = record("hybrid");
        spec.mileage = Some(20.0);
        assert!((real_world_efficiency(&spec, 0.0).value - 17.0).abs() < 1e-9);
    }

    #[test]
    fn electric_range_over_battery() {
        let mut spec = record("electric");
        spec.range = Some(300.0);
        spec.battery_capacity = Some(40.0);
        let estimate = real_world_efficiency(&spec, 0.0);
        assert_eq!(estimate.value, 5.625);
        assert_eq!(estimate.source, EfficiencySource::ElectricRange);
    }

    #[test]
    fn electric_without_battery_falls_back_to_baseline() {
        let mut spec = record("electric");
        spec.range = Some(300.0);
        assert!(measured_efficiency(&spec).is_none());
        let estimate = real_world_efficiency(&spec, 0.0);
        assert!((estimate.value - 4.8).abs() < 1e-9);
        assert_eq!(estimate.source, EfficiencySource::ModelledBaseline);
    }

    #[test]
    fn range_is_ignored_for_non_electric_fuel() {
        let mut spec = record("petrol");
        spec.range = Some(500.0);
        spec.battery_capacity = Some(40.0);
        assert!(measured_efficiency(&spec).is_none());
    }

    #[test]
    fn modelled_estimate_scales_with_penalty() {
        let spec = record("petrol");
        assert!((real_world_efficiency(&spec, 2.0).value - 12.416).abs() < 1e-9);
        // The penalty factor floors at 0.4.
        assert!((real_world_efficiency(&spec, 80.0).value - 5.12).abs() < 1e-9);
    }

    #[test]
    fn unknown_fuel_uses_petrol_baseline() {
        let spec = record("lpg");
        assert!((real_world_efficiency(&spec, 0.0).value - 12.8).abs() < 1e-9);
    }
}
