use serde::{Deserialize, Serialize};

use super::domain::{round2, ScoreBreakdown};

/// A scored entry with its 1-based position in the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry<K> {
    pub key: K,
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
}

/// Order by total score, highest first, and number the result from 1.
///
/// Equal totals fall back to key order so repeated runs rank identically.
pub fn rank_scores<K: Ord>(mut entries: Vec<(K, ScoreBreakdown)>) -> Vec<RankedEntry<K>> {
    entries.sort_by(|(left_key, left), (right_key, right)| {
        right
            .total_score
            .total_cmp(&left.total_score)
            .then_with(|| left_key.cmp(right_key))
    });

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (key, breakdown))| RankedEntry {
            key,
            rank: index + 1,
            breakdown,
        })
        .collect()
}

/// Summary of the total scores produced for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    #[serde(skip)]
    scores: Vec<f64>,
}

impl PoolStatistics {
    pub fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self {
                count: 0,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                scores: Vec::new(),
            };
        }

        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;

        Self {
            count: scores.len(),
            min,
            max,
            mean: round2(mean),
            scores: scores.to_vec(),
        }
    }

    /// Share of the pool scoring at or below `score`, as a percentage.
    pub fn percentile_of(&self, score: f64) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let at_or_below = self.scores.iter().filter(|value| **value <= score).count();
        round2(at_or_below as f64 / self.scores.len() as f64 * 100.0)
    }
}
