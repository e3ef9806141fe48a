use anyhow::{Result, bail};

use crate::catalog::OpponentStrength;
use crate::generator::MatchRecord;
use crate::score::ScoredRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EfficiencyTier {
    Poor,
    Average,
    Good,
    Excellent,
}

impl EfficiencyTier {
    pub fn label(self) -> &'static str {
        match self {
            EfficiencyTier::Poor => "Poor",
            EfficiencyTier::Average => "Average",
            EfficiencyTier::Good => "Good",
            EfficiencyTier::Excellent => "Excellent",
        }
    }
}

/// Cut points partitioning [0, 10] into four half-open intervals. A score
/// exactly on a cut takes the higher tier; 10.0 is Excellent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierCuts {
    pub poor_to_average: f64,
    pub average_to_good: f64,
    pub good_to_excellent: f64,
}

impl Default for TierCuts {
    fn default() -> Self {
        Self {
            poor_to_average: 2.5,
            average_to_good: 5.0,
            good_to_excellent: 7.5,
        }
    }
}

impl TierCuts {
    pub fn validate(&self) -> Result<()> {
        let cuts = [
            self.poor_to_average,
            self.average_to_good,
            self.good_to_excellent,
        ];
        if cuts.iter().any(|c| !c.is_finite()) {
            bail!("tier cut points must be finite");
        }
        if !(0.0 < cuts[0] && cuts[0] < cuts[1] && cuts[1] < cuts[2] && cuts[2] < 10.0) {
            bail!(
                "tier cut points must be strictly increasing within (0, 10), got {:?}",
                cuts
            );
        }
        Ok(())
    }
}

pub fn classify(score: f64, cuts: &TierCuts) -> Result<EfficiencyTier> {
    if !score.is_finite() || score < 0.0 || score > 10.0 {
        bail!("performance score {score} is outside [0, 10]; derivation is inconsistent");
    }
    Ok(if score < cuts.poor_to_average {
        EfficiencyTier::Poor
    } else if score < cuts.average_to_good {
        EfficiencyTier::Average
    } else if score < cuts.good_to_excellent {
        EfficiencyTier::Good
    } else {
        EfficiencyTier::Excellent
    })
}

/// Final fact row: raw observation plus both derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FactRecord {
    pub record: MatchRecord,
    pub performance_score: f64,
    pub efficiency_tier: EfficiencyTier,
}

impl FactRecord {
    pub fn player_id(&self) -> &str {
        &self.record.player_id
    }

    pub fn opponent_strength(&self) -> OpponentStrength {
        self.record.opponent_strength
    }
}

pub fn classify_all(scored: Vec<ScoredRecord>, cuts: &TierCuts) -> Result<Vec<FactRecord>> {
    cuts.validate()?;
    scored
        .into_iter()
        .map(|scored| {
            let efficiency_tier = classify(scored.performance_score, cuts)?;
            Ok(FactRecord {
                record: scored.record,
                performance_score: scored.performance_score,
                efficiency_tier,
            })
        })
        .collect()
}
