use serde::Serialize;

pub type Score = f64;

/// Raw sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub efficiency: Score,
    pub safety: Score,
    pub value_for_money: Score,
    pub performance_per_efficiency: Score,
}

/// Sub-scores rounded to integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub efficiency: u32,
    pub safety: u32,
    pub value_for_money: u32,
    pub performance_per_efficiency: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub cost_per_km: Option<f64>,
    pub power_to_weight: Option<f64>,
    pub real_world_efficiency: Option<f64>,
}

/// Which branch of the estimator produced the real-world efficiency figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencySource {
    MeasuredMileage,
    ElectricRange,
    ModelledBaseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealWorldEfficiency {
    pub value: f64,
    pub source: EfficiencySource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub composite: u32,
    pub breakdown: ScoreBreakdown,
    pub metrics: Metrics,
    pub penalty: f64,
    pub efficiency_source: EfficiencySource,
}
