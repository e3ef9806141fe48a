use std::collections::HashMap;

use crate::catalog::OpponentStrength;
use crate::score::round2;
use crate::tier::FactRecord;

/// One pivoted dimension row per player: mean performance score against
/// each opponent strength. A bucket the player never faced stays `None`
/// and exports as an empty cell, not a zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummaryRow {
    pub player_id: String,
    pub avg_vs_strong: Option<f64>,
    pub avg_vs_average: Option<f64>,
    pub avg_vs_weak: Option<f64>,
}

impl PlayerSummaryRow {
    pub fn bucket(&self, strength: OpponentStrength) -> Option<f64> {
        match strength {
            OpponentStrength::Strong => self.avg_vs_strong,
            OpponentStrength::Average => self.avg_vs_average,
            OpponentStrength::Weak => self.avg_vs_weak,
        }
    }
}

pub fn summarize(facts: &[FactRecord]) -> Vec<PlayerSummaryRow> {
    let mut groups: HashMap<(&str, OpponentStrength), (f64, usize)> = HashMap::new();
    for fact in facts {
        let entry = groups
            .entry((fact.player_id(), fact.opponent_strength()))
            .or_insert((0.0, 0));
        entry.0 += fact.performance_score;
        entry.1 += 1;
    }

    let mut players: Vec<&str> = facts.iter().map(|fact| fact.player_id()).collect();
    players.sort_unstable();
    players.dedup();

    players
        .into_iter()
        .map(|player| {
            let mean = |strength: OpponentStrength| {
                groups
                    .get(&(player, strength))
                    .map(|(sum, n)| round2(sum / *n as f64))
            };
            PlayerSummaryRow {
                player_id: player.to_string(),
                avg_vs_strong: mean(OpponentStrength::Strong),
                avg_vs_average: mean(OpponentStrength::Average),
                avg_vs_weak: mean(OpponentStrength::Weak),
            }
        })
        .collect()
}
