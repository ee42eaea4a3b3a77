use crate::types::record::SpecificationRecord;
use crate::types::scoring::Score;

const FEATURE_SCORE_CAP: f64 = 0.6;

/// Crash-test rating when available, otherwise a capped tally of listed
/// safety equipment.
pub fn safety_score(record: &SpecificationRecord) -> Score {
    if let Some(stars) = record.ncap_stars.filter(|stars| *stars > 0.0) {
        return (stars / 5.0).min(1.0);
    }

    let mut score: f64 = 0.0;
    match record.airbags {
        Some(airbags) if airbags >= 6.0 => score += 0.4,
        Some(airbags) if airbags >= 2.0 => score += 0.2,
        _ => {}
    }
    if record.esc == Some(true) {
        score += 0.2;
    }
    if record.isofix == Some(true) {
        score += 0.2;
    }
    score.min(FEATURE_SCORE_CAP)
}
