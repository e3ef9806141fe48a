use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::generator::{MatchRecord, SamplingRanges};

/// Weighted split of the composite score: offensive contribution (goals,
/// assists) counts more than defensive contribution (tackles,
/// interceptions). Applied uniformly to every record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub goals: f64,
    pub assists: f64,
    pub tackles: f64,
    pub interceptions: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            goals: 4.0,
            assists: 2.0,
            tackles: 1.0,
            interceptions: 0.5,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<()> {
        let all = [self.goals, self.assists, self.tackles, self.interceptions];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            bail!("score weights must be finite and non-negative");
        }
        Ok(())
    }

    // The normalization ceiling comes from the configured metric ranges,
    // never from the sampled data.
    pub fn max_raw(&self, ranges: &SamplingRanges) -> f64 {
        self.goals * f64::from(ranges.goals.max)
            + self.assists * f64::from(ranges.assists.max)
            + self.tackles * f64::from(ranges.tackles.max)
            + self.interceptions * f64::from(ranges.interceptions.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: MatchRecord,
    pub performance_score: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn score_raw(record: &MatchRecord, weights: &ScoreWeights) -> f64 {
    weights.goals * f64::from(record.goals)
        + weights.assists * f64::from(record.assists)
        + weights.tackles * f64::from(record.tackles)
        + weights.interceptions * f64::from(record.interceptions)
}

/// Composite score in [0, 10], a pure function of the four core raw
/// metrics. All-zero metrics score 0.0.
pub fn performance_score(
    record: &MatchRecord,
    weights: &ScoreWeights,
    ranges: &SamplingRanges,
) -> f64 {
    round2(10.0 * score_raw(record, weights) / weights.max_raw(ranges))
}

pub fn derive_scores(
    records: Vec<MatchRecord>,
    weights: &ScoreWeights,
    ranges: &SamplingRanges,
) -> Result<Vec<ScoredRecord>> {
    weights.validate()?;
    ranges.validate()?;
    let max_raw = weights.max_raw(ranges);
    if max_raw <= 0.0 {
        bail!("score normalization ceiling is {max_raw}; weights and ranges admit no spread");
    }

    // Pure per-record map; parallelism changes nothing but wall time.
    Ok(records
        .into_par_iter()
        .map(|record| {
            let performance_score = round2(10.0 * score_raw(&record, weights) / max_raw);
            ScoredRecord {
                record,
                performance_score,
            }
        })
        .collect())
}
