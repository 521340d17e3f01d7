//! Average absolute percentage move across predictions.

use crate::domain::prediction::Prediction;

/// Mean of `|pct_change|` over predictions that are not Neutral and whose
/// percentage parses. Returns `0.0` when nothing qualifies, which downstream
/// treats as "no usable data".
pub fn average_abs_pct_change<'a, I>(predictions: I) -> f64
where
    I: IntoIterator<Item = &'a Prediction>,
{
    let (sum, count) = predictions
        .into_iter()
        .filter(|p| !p.direction.is_neutral())
        .filter_map(|p| match p.pct_value() {
            Ok(v) => Some(v.abs()),
            Err(e) => {
                tracing::debug!(date = %p.specific_date, "Excluding from average: {}", e);
                None
            }
        })
        .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sequence::SequenceData;
    use crate::shared::Direction;
    use chrono::NaiveDate;

    fn p(direction: Direction, pct: &str) -> Prediction {
        Prediction {
            specific_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            future_date: None,
            direction,
            pct_change: pct.to_string(),
            confidence: String::new(),
            was_correct: None,
            sequence: SequenceData::default(),
        }
    }

    #[test]
    fn test_mean_of_absolute_values() {
        let preds = vec![
            p(Direction::Up, "3%"),
            p(Direction::Down, "-5%"),
            p(Direction::Up, "+1%"),
        ];
        assert_eq!(average_abs_pct_change(&preds), 3.0);
    }

    #[test]
    fn test_neutral_entries_excluded() {
        let preds = vec![p(Direction::Up, "2%"), p(Direction::Neutral, "-40%")];
        assert_eq!(average_abs_pct_change(&preds), 2.0);
    }

    #[test]
    fn test_unparsable_entries_excluded() {
        let preds = vec![
            p(Direction::Down, "-4%"),
            p(Direction::Error, "N/A"),
            p(Direction::Up, "soon"),
        ];
        assert_eq!(average_abs_pct_change(&preds), 4.0);
    }

    #[test]
    fn test_no_usable_data_is_zero_not_nan() {
        assert_eq!(average_abs_pct_change(&Vec::<Prediction>::new()), 0.0);
        let preds = vec![p(Direction::Neutral, "1%"), p(Direction::Error, "N/A")];
        let avg = average_abs_pct_change(&preds);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }
}
