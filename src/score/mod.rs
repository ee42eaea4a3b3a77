pub mod efficiency;
pub mod penalty;
pub mod performance;
pub mod real_world;
pub mod safety;
pub mod value;

use crate::types::config::{FuelPriceConfig, ScoringConfig, WeightsConfig};
use crate::types::record::SpecificationRecord;
use crate::types::scoring::{
    Metrics, RealWorldEfficiency, ScoreBreakdown, ScoreResult, SubScores,
};
use tracing::debug;

/// Scores a normalized record. Total over all inputs: missing fields fall
/// back to defaults or produce `None` metrics, never an error.
pub fn score_record(record: &SpecificationRecord, config: &ScoringConfig) -> ScoreResult {
    let fuel = record.fuel();
    let penalty = penalty::efficiency_penalty(record);
    let measured = real_world::measured_efficiency(record);
    let estimate = real_world::real_world_efficiency(record, penalty);
    debug!(
        penalty,
        efficiency = estimate.value,
        source = ?estimate.source,
        "estimated real-world efficiency"
    );

    let efficiency = efficiency::efficiency_score(measured.as_ref(), fuel, penalty);
    let safety = safety::safety_score(record);
    let sub_scores = SubScores {
        efficiency,
        safety,
        value_for_money: value::value_for_money_score(record.price, efficiency, safety),
        performance_per_efficiency: performance::performance_per_efficiency_score(
            record, efficiency,
        ),
    };
    debug!(?sub_scores, "computed sub-scores");

    let (composite, breakdown) = aggregate(&sub_scores, &config.weights);
    ScoreResult {
        composite,
        breakdown,
        metrics: metrics(record, &estimate, &config.fuel_prices),
        penalty,
        efficiency_source: estimate.source,
    }
}

/// Weighted composite and integer breakdown. Weights are used as given;
/// a set that does not sum to 100 scales the composite accordingly.
pub fn aggregate(sub_scores: &SubScores, weights: &WeightsConfig) -> (u32, ScoreBreakdown) {
    let weighted = sub_scores.efficiency * f64::from(weights.efficiency)
        + sub_scores.safety * f64::from(weights.safety)
        + sub_scores.value_for_money * f64::from(weights.value_for_money)
        + sub_scores.performance_per_efficiency * f64::from(weights.performance_per_efficiency);

    let breakdown = ScoreBreakdown {
        efficiency: to_percent(sub_scores.efficiency),
        safety: to_percent(sub_scores.safety),
        value_for_money: to_percent(sub_scores.value_for_money),
        performance_per_efficiency: to_percent(sub_scores.performance_per_efficiency),
    };
    (round_non_negative(weighted), breakdown)
}

/// Display metrics. Cost per km needs both an efficiency figure and a
/// configured price for the record's fuel.
pub fn metrics(
    record: &SpecificationRecord,
    estimate: &RealWorldEfficiency,
    fuel_prices: &FuelPriceConfig,
) -> Metrics {
    let real_world_efficiency =
        Some(estimate.value).filter(|value| value.is_finite() && *value > 0.0);
    let cost_per_km = match (real_world_efficiency, record.fuel()) {
        (Some(efficiency), Some(fuel)) => fuel_prices
            .price_for(fuel)
            .map(|price| price / efficiency),
        _ => None,
    };

    Metrics {
        cost_per_km,
        power_to_weight: record.power_to_weight(),
        real_world_efficiency,
    }
}

fn to_percent(score: f64) -> u32 {
    round_non_negative(score * 100.0)
}

fn round_non_negative(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::EfficiencySource;
    use proptest::prelude::*;

    fn hatchback() -> SpecificationRecord {
        SpecificationRecord {
            fuel_type: Some("petrol".to_string()),
            displacement: Some(1197.0),
            kerb_weight: Some(950.0),
            cylinders: Some(4.0),
            transmission_type: Some("manual".to_string()),
            body_type: Some("hatchback".to_string()),
            gears: Some(5.0),
            ..Default::default()
        }
    }

    #[test]
    fn hatchback_without_mileage_uses_fallback_efficiency() {
        let result = score_record(&hatchback(), &ScoringConfig::default());

        assert_eq!(result.penalty, 2.0);
        assert_eq!(
            result.efficiency_source,
            EfficiencySource::ModelledBaseline
        );
        assert_eq!(result.breakdown.efficiency, 56);
        assert_eq!(result.breakdown.safety, 0);
        assert_eq!(result.breakdown.value_for_money, 0);
        assert_eq!(result.breakdown.performance_per_efficiency, 56);
        let efficiency = result
            .metrics
            .real_world_efficiency
            .expect("baseline estimate should exist");
        assert!((efficiency - 12.416).abs() < 1e-9);
        // 0.56 * 40 + 0.56 * 15
        assert_eq!(result.composite, 31);
    }

    #[test]
    fn empty_record_still_scores() {
        let result = score_record(&SpecificationRecord::default(), &ScoringConfig::default());
        assert!(result.composite <= 100);
        assert_eq!(result.metrics.cost_per_km, None);
        assert_eq!(result.metrics.power_to_weight, None);
        assert!(result.metrics.real_world_efficiency.is_some());
    }

    #[test]
    fn well_specified_diesel_sedan() {
        let record = SpecificationRecord {
            name: Some("Verna CRDi".to_string()),
            fuel_type: Some("diesel".to_string()),
            mileage: Some(25.0),
            displacement: Some(1493.0),
            kerb_weight: Some(1200.0),
            cylinders: Some(4.0),
            power: Some(84.0),
            transmission_type: Some("manual".to_string()),
            gears: Some(6.0),
            body_type: Some("sedan".to_string()),
            ncap_stars: Some(5.0),
            price: Some(14.0),
            ..Default::default()
        };
        let result = score_record(&record, &ScoringConfig::default());

        // 4.395 + 4 + 5 - 1
        assert!((result.penalty - 12.395).abs() < 1e-9);
        assert_eq!(
            result.efficiency_source,
            EfficiencySource::MeasuredMileage
        );
        assert_eq!(result.metrics.real_world_efficiency, Some(20.0));
        assert_eq!(result.metrics.cost_per_km, Some(4.5));
        let power_to_weight = result
            .metrics
            .power_to_weight
            .expect("power and weight are present");
        assert!((power_to_weight - 70.0).abs() < 1e-9);
        assert_eq!(result.breakdown.safety, 100);
        // 0.35 + 1/3 * 0.20 - 0.14874
        assert_eq!(result.breakdown.efficiency, 27);
    }

    #[test]
    fn hybrid_has_no_cost_per_km() {
        let record = SpecificationRecord {
            fuel_type: Some("hybrid".to_string()),
            mileage: Some(27.0),
            ..Default::default()
        };
        let result = score_record(&record, &ScoringConfig::default());
        assert_eq!(result.metrics.cost_per_km, None);
        assert!(result.metrics.real_world_efficiency.is_some());
    }

    #[test]
    fn electric_cost_uses_electricity_price() {
        let record = SpecificationRecord {
            fuel_type: Some("electric".to_string()),
            range: Some(300.0),
            battery_capacity: Some(40.0),
            ..Default::default()
        };
        let result = score_record(&record, &ScoringConfig::default());
        let cost = result.metrics.cost_per_km.expect("electric cost should exist");
        assert!((cost - 8.0 / 5.625).abs() < 1e-9);
    }

    #[test]
    fn aggregate_does_not_enforce_weight_sum() {
        let sub_scores = SubScores {
            efficiency: 1.0,
            safety: 1.0,
            value_for_money: 1.0,
            performance_per_efficiency: 1.0,
        };
        let weights = WeightsConfig {
            efficiency: 50,
            safety: 50,
            value_for_money: 50,
            performance_per_efficiency: 0,
        };
        let (composite, _) = aggregate(&sub_scores, &weights);
        assert_eq!(composite, 150);
    }

    #[test]
    fn value_score_of_one_rounds_to_hundred() {
        let sub_scores = SubScores {
            efficiency: 1.0,
            safety: 1.0,
            value_for_money: value::value_for_money_score(Some(6.0), 1.0, 1.0),
            performance_per_efficiency: 1.0,
        };
        let (composite, breakdown) = aggregate(&sub_scores, &WeightsConfig::default());
        assert_eq!(breakdown.value_for_money, 100);
        assert_eq!(composite, 100);
    }

    fn weights_summing_to_hundred() -> impl Strategy<Value = WeightsConfig> {
        (0u32..=100, 0u32..=100, 0u32..=100).prop_map(|(a, b, c)| {
            let efficiency = a;
            let safety = b.min(100 - efficiency);
            let value_for_money = c.min(100 - efficiency - safety);
            WeightsConfig {
                efficiency,
                safety,
                value_for_money,
                performance_per_efficiency: 100 - efficiency - safety - value_for_money,
            }
        })
    }

    proptest! {
        #[test]
        fn composite_is_bounded_weighted_sum(
            weights in weights_summing_to_hundred(),
            e in 0.0f64..=1.0,
            s in 0.0f64..=1.0,
            v in 0.0f64..=1.0,
            p in 0.0f64..=1.0,
        ) {
            let sub_scores = SubScores {
                efficiency: e,
                safety: s,
                value_for_money: v,
                performance_per_efficiency: p,
            };
            let (composite, _) = aggregate(&sub_scores, &weights);
            let expected = (e * f64::from(weights.efficiency)
                + s * f64::from(weights.safety)
                + v * f64::from(weights.value_for_money)
                + p * f64::from(weights.performance_per_efficiency))
            .round();
            prop_assert!(composite <= 100);
            prop_assert_eq!(f64::from(composite), expected);
        }

        #[test]
        fn any_record_scores_within_bounds(
            mileage in proptest::option::of(0.0f64..60.0),
            price in proptest::option::of(0.0f64..200.0),
            power in proptest::option::of(0.0f64..600.0),
            kerb_weight in proptest::option::of(0.0f64..3000.0),
            stars in proptest::option::of(0.0f64..5.0),
            fuel in proptest::option::of("petrol|diesel|hybrid|cng|electric|lpg"),
        ) {
            let record = SpecificationRecord {
                mileage,
                price,
                power,
                kerb_weight,
                ncap_stars: stars,
                fuel_type: fuel,
                ..Default::default()
            };
            let result = score_record(&record, &ScoringConfig::default());
            prop_assert!(result.composite <= 100);
            prop_assert!(result.breakdown.efficiency <= 100);
            prop_assert!(result.breakdown.performance_per_efficiency <= 100);
        }
    }
}
