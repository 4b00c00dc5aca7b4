//! Exponential-averaging burst predictor for predictive SJF.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::{
    core::{Pid, Ticks},
    error::{Result, SchedError},
};

/// Prediction given to a pid with no history.
pub const DEFAULT_PREDICTION: f64 = 5.0;

/// Predicted burst length, totally ordered so it can key a ready heap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction(pub f64);

impl Eq for Prediction {}

impl PartialOrd for Prediction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prediction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRecord {
    /// Burst of the most recently completed instance, if any has completed
    pub last_burst: Option<Ticks>,
    pub predicted: f64,
}

/// Per-pid prediction table for one simulation run.
#[derive(Debug)]
pub struct Predictor {
    alpha: f64,
    records: FxHashMap<Pid, PredictionRecord>,
}

impl Predictor {
    /// `alpha` weights the last observed burst against the prior prediction
    /// and must lie in `[0, 1]`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SchedError::invalid_parameter(
                "alpha",
                format!("smoothing constant must be within [0, 1], got {alpha}"),
            ));
        }

        Ok(Self {
            alpha,
            records: FxHashMap::default(),
        })
    }

    /// Register an arrival of `pid` and return its current prediction.
    ///
    /// A first arrival seeds [`DEFAULT_PREDICTION`]. A repeat arrival folds
    /// in the last completed burst: `alpha * last + (1 - alpha) * previous`.
    /// With no completed burst yet, the previous prediction stands.
    pub fn on_arrival(&mut self, pid: Pid) -> Prediction {
        let alpha = self.alpha;
        let record = self
            .records
            .entry(pid)
            .and_modify(|record| {
                if let Some(last) = record.last_burst {
                    record.predicted = alpha * last as f64 + (1.0 - alpha) * record.predicted;
                }
            })
            .or_insert(PredictionRecord {
                last_burst: None,
                predicted: DEFAULT_PREDICTION,
            });

        Prediction(record.predicted)
    }

    /// Record the actual burst of a completed instance of `pid`.
    pub fn on_completion(&mut self, pid: Pid, burst: Ticks) {
        match self.records.get_mut(&pid) {
            Some(record) => record.last_burst = Some(burst),
            None => debug_assert!(false, "Completed pid {pid} never arrived"),
        }
    }

    pub fn record(&self, pid: Pid) -> Option<&PredictionRecord> {
        self.records.get(&pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_arrival_seeds_default() {
        let mut predictor = Predictor::new(0.5).unwrap();
        assert_eq!(predictor.on_arrival(3), Prediction(DEFAULT_PREDICTION));
        assert_eq!(
            predictor.record(3),
            Some(&PredictionRecord {
                last_burst: None,
                predicted: DEFAULT_PREDICTION
            })
        );
    }

    #[test]
    fn test_repeat_arrival_smooths_last_burst() {
        let mut predictor = Predictor::new(0.5).unwrap();
        predictor.on_arrival(1);
        predictor.on_completion(1, 9);

        // 0.5 * 9 + 0.5 * 5
        assert_eq!(predictor.on_arrival(1), Prediction(7.0));
        predictor.on_completion(1, 3);
        // 0.5 * 3 + 0.5 * 7
        assert_eq!(predictor.on_arrival(1), Prediction(5.0));
        assert_eq!(predictor.record(1).and_then(|r| r.last_burst), Some(3));
    }

    #[test]
    fn test_repeat_arrival_without_completion_keeps_prediction() {
        let mut predictor = Predictor::new(0.25).unwrap();
        predictor.on_arrival(4);
        assert_eq!(predictor.on_arrival(4), Prediction(DEFAULT_PREDICTION));
    }

    #[test]
    fn test_alpha_extremes() {
        let mut latest_only = Predictor::new(1.0).unwrap();
        latest_only.on_arrival(1);
        latest_only.on_completion(1, 12);
        assert_eq!(latest_only.on_arrival(1), Prediction(12.0));

        let mut history_only = Predictor::new(0.0).unwrap();
        history_only.on_arrival(1);
        history_only.on_completion(1, 12);
        assert_eq!(history_only.on_arrival(1), Prediction(DEFAULT_PREDICTION));
    }

    #[test]
    fn test_rejects_alpha_outside_unit_interval() {
        for alpha in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = Predictor::new(alpha).unwrap_err();
            assert!(err.is_invalid_parameter(), "alpha {alpha} accepted");
        }
    }

    #[test]
    fn test_prediction_ordering() {
        let mut values = vec![Prediction(7.5), Prediction(2.0), Prediction(5.0)];
        values.sort();
        assert_eq!(values, vec![Prediction(2.0), Prediction(5.0), Prediction(7.5)]);
    }
}
