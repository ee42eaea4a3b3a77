use crate::types::record::positive;
use crate::types::scoring::Score;

pub const PRICE_FLOOR: f64 = 6.0;
pub const PRICE_CEILING: f64 = 50.0;

/// Linear position of `value` in `[min, max]`, clamped to `[0, 1]`.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Blends how much the car offers (efficiency and safety) with how little
/// it costs. Scores zero when the price is unknown.
pub fn value_for_money_score(price: Option<f64>, efficiency: Score, safety: Score) -> Score {
    let Some(price) = positive(price) else {
        return 0.0;
    };
    let price_score = 1.0 - normalize(price, PRICE_FLOOR, PRICE_CEILING);
    let features_score = (efficiency + safety) / 2.0;
    features_score * 0.6 + price_score * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cheapest_car_with_perfect_features_scores_one() {
        assert_eq!(value_for_money_score(Some(6.0), 1.0, 1.0), 1.0);
    }

    #[test]
    fn missing_price_scores_zero() {
        assert_eq!(value_for_money_score(None, 0.9, 0.9), 0.0);
        assert_eq!(value_for_money_score(Some(0.0), 0.9, 0.9), 0.0);
    }

    #[test]
    fn price_beyond_ceiling_contributes_nothing() {
        let score = value_for_money_score(Some(120.0), 0.5, 0.7);
        assert!((score - 0.36).abs() < 1e-9);
    }

    #[test]
    fn mid_range_price_interpolates() {
        let score = value_for_money_score(Some(28.0), 0.5, 0.5);
        assert!((score - (0.3 + 0.5 * 0.4)).abs() < 1e-9);
    }
}
