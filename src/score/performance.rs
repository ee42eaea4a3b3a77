use super::value::normalize;
use crate::types::record::SpecificationRecord;
use crate::types::scoring::Score;

const POWER_TO_WEIGHT_MIN: f64 = 50.0;
const POWER_TO_WEIGHT_MAX: f64 = 120.0;

/// Rewards performance that does not come at the cost of efficiency.
/// Without power and kerb weight the efficiency score passes through.
pub fn performance_per_efficiency_score(record: &SpecificationRecord, efficiency: Score) -> Score {
    let Some(power_to_weight) = record.power_to_weight() else {
        return efficiency;
    };
    let power_score = normalize(power_to_weight, POWER_TO_WEIGHT_MIN, POWER_TO_WEIGHT_MAX);
    power_score * 0.7 + efficiency * 0.3
}
