//! Prediction board — app-owned snapshot of all known predictions.

use super::Prediction;
use crate::analytics::average_abs_pct_change;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// All predictions from the last fetch, keyed by their response date.
///
/// The app owns instances of this type. Each `/predictions` fetch produces a
/// fresh board; [`PredictionBoard::apply_snapshot`] swaps it in wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionBoard {
    entries: BTreeMap<NaiveDate, Prediction>,
}

impl PredictionBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a newer snapshot.
    pub fn apply_snapshot(&mut self, snapshot: PredictionBoard) {
        self.entries = snapshot.entries;
    }

    /// Insert keyed by the prediction's own date.
    pub fn insert(&mut self, prediction: Prediction) {
        self.entries.insert(prediction.specific_date, prediction);
    }

    /// Insert under an explicit response key.
    pub fn insert_at(&mut self, key: NaiveDate, prediction: Prediction) {
        self.entries.insert(key, prediction);
    }

    pub fn get(&self, key: NaiveDate) -> Option<&Prediction> {
        self.entries.get(&key)
    }

    /// `(key, prediction)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Prediction)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn predictions(&self) -> impl Iterator<Item = &Prediction> {
        self.entries.values()
    }

    /// Display order: newest `specific_date` first.
    pub fn sorted_desc(&self) -> Vec<(NaiveDate, &Prediction)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_by(|(ka, a), (kb, b)| {
            b.specific_date
                .cmp(&a.specific_date)
                .then_with(|| kb.cmp(ka))
        });
        rows
    }

    /// Mean absolute percentage move over non-neutral, parsable predictions;
    /// `0.0` when there are none.
    pub fn average_pct_change(&self) -> f64 {
        average_abs_pct_change(self.predictions())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<Prediction> for PredictionBoard {
    fn from_iter<I: IntoIterator<Item = Prediction>>(iter: I) -> Self {
        let mut board = PredictionBoard::new();
        for prediction in iter {
            board.insert(prediction);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sequence::SequenceData;
    use crate::shared::Direction;

    fn prediction(day: &str, direction: Direction, pct: &str) -> Prediction {
        Prediction {
            specific_date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            future_date: None,
            direction,
            pct_change: pct.to_string(),
            confidence: "0.5".to_string(),
            was_correct: None,
            sequence: SequenceData::default(),
        }
    }

    #[test]
    fn test_sorted_desc_by_specific_date() {
        let board: PredictionBoard = [
            prediction("2024-01-01", Direction::Up, "1%"),
            prediction("2024-01-03", Direction::Down, "-2%"),
            prediction("2024-01-02", Direction::Neutral, "0%"),
        ]
        .into_iter()
        .collect();

        let order: Vec<String> = board
            .sorted_desc()
            .iter()
            .map(|(_, p)| p.specific_date.to_string())
            .collect();
        assert_eq!(order, ["2024-01-03", "2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn test_apply_snapshot_replaces() {
        let mut board: PredictionBoard = [prediction("2024-01-01", Direction::Up, "1%")]
            .into_iter()
            .collect();
        let newer: PredictionBoard = [
            prediction("2024-01-08", Direction::Down, "-3%"),
            prediction("2024-01-15", Direction::Up, "2%"),
        ]
        .into_iter()
        .collect();
        board.apply_snapshot(newer);
        assert_eq!(board.len(), 2);
        assert!(board
            .get(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .is_none());
    }

    #[test]
    fn test_average_pct_change_on_board() {
        let board: PredictionBoard = [
            prediction("2024-01-01", Direction::Up, "4%"),
            prediction("2024-01-08", Direction::Down, "-2%"),
            prediction("2024-01-15", Direction::Neutral, "10%"),
            prediction("2024-01-22", Direction::Error, "N/A"),
        ]
        .into_iter()
        .collect();
        assert_eq!(board.average_pct_change(), 3.0);
        assert_eq!(PredictionBoard::new().average_pct_change(), 0.0);
    }
}
