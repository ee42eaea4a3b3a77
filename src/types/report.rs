use super::record::SpecificationRecord;
use super::scoring::ScoreResult;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub generated_at: String,
    pub name: Option<String>,
    pub record: SpecificationRecord,
    pub result: ScoreResult,
    pub enriched_fields: Vec<String>,
}

impl ScoreReport {
    pub fn new(
        record: SpecificationRecord,
        result: ScoreResult,
        enriched_fields: Vec<String>,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            name: record.name.clone(),
            record,
            result,
            enriched_fields,
        }
    }
}
