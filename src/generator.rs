use anyhow::{Context, Result, bail};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, OPPONENT_STRENGTHS, OpponentStrength, POSITIONS, Position};
use crate::score::round2;

/// Inclusive integer sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            bail!("{name} range is inverted ({}..={})", self.min, self.max);
        }
        Ok(())
    }

    fn sample(&self, rng: &mut StdRng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRanges {
    pub match_id: IntRange,
    pub minutes_played: IntRange,
    pub goals: IntRange,
    pub assists: IntRange,
    pub shots_on_target: IntRange,
    pub tackles: IntRange,
    pub interceptions: IntRange,
    // Half-open, as a (low, high) pair.
    pub pass_completion: (f64, f64),
}

impl Default for SamplingRanges {
    fn default() -> Self {
        Self {
            match_id: IntRange::new(100, 299),
            minutes_played: IntRange::new(1, 90),
            goals: IntRange::new(0, 5),
            assists: IntRange::new(0, 5),
            shots_on_target: IntRange::new(0, 5),
            tackles: IntRange::new(0, 10),
            interceptions: IntRange::new(0, 10),
            pass_completion: (0.65, 0.95),
        }
    }
}

impl SamplingRanges {
    pub fn validate(&self) -> Result<()> {
        self.match_id.validate("match id")?;
        self.minutes_played.validate("minutes played")?;
        self.goals.validate("goals")?;
        self.assists.validate("assists")?;
        self.shots_on_target.validate("shots on target")?;
        self.tackles.validate("tackles")?;
        self.interceptions.validate("interceptions")?;
        let (low, high) = self.pass_completion;
        if low >= high {
            bail!("pass completion range is empty ({low}..{high})");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub seed: u64,
    pub ranges: SamplingRanges,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 1000,
            seed: 42,
            ranges: SamplingRanges::default(),
        }
    }
}

/// One raw match-level observation, before any derived columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub match_id: u32,
    pub player_id: String,
    pub team_name: String,
    pub position: Position,
    pub opponent_strength: OpponentStrength,
    pub minutes_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub shots_on_target: u32,
    pub pass_completion_rate: f64,
    pub tackles: u32,
    pub interceptions: u32,
}

pub fn generate(catalog: &Catalog, cfg: &GeneratorConfig) -> Result<Vec<MatchRecord>> {
    catalog.validate()?;
    cfg.ranges.validate()?;
    if cfg.rows == 0 {
        bail!("record count must be positive (got 0)");
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let position_dist =
        WeightedIndex::new(&catalog.position_weights).context("invalid position weights")?;
    let (pass_low, pass_high) = cfg.ranges.pass_completion;

    let mut records = Vec::with_capacity(cfg.rows);
    for _ in 0..cfg.rows {
        let player_idx = rng.gen_range(0..catalog.players.len());
        let position = POSITIONS[position_dist.sample(&mut rng)];
        let strength = OPPONENT_STRENGTHS[rng.gen_range(0..OPPONENT_STRENGTHS.len())];

        let mut record = MatchRecord {
            match_id: cfg.ranges.match_id.sample(&mut rng),
            player_id: catalog.players[player_idx].clone(),
            team_name: catalog.team_for_player(player_idx).to_string(),
            position,
            opponent_strength: strength,
            minutes_played: cfg.ranges.minutes_played.sample(&mut rng),
            goals: cfg.ranges.goals.sample(&mut rng),
            assists: cfg.ranges.assists.sample(&mut rng),
            shots_on_target: cfg.ranges.shots_on_target.sample(&mut rng),
            pass_completion_rate: round2(rng.gen_range(pass_low..pass_high)),
            tackles: cfg.ranges.tackles.sample(&mut rng),
            interceptions: cfg.ranges.interceptions.sample(&mut rng),
        };

        // Goalkeepers keep minutes and pass completion; the countable
        // outfield metrics are zeroed.
        if record.position == Position::Goalkeeper {
            record.goals = 0;
            record.assists = 0;
            record.shots_on_target = 0;
            record.tackles = 0;
            record.interceptions = 0;
        }

        records.push(record);
    }

    Ok(records)
}
