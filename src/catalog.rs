use anyhow::{Result, bail};
use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

pub const POSITIONS: [Position; 4] = [
    Position::Forward,
    Position::Midfielder,
    Position::Defender,
    Position::Goalkeeper,
];

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpponentStrength {
    Strong,
    Average,
    Weak,
}

pub const OPPONENT_STRENGTHS: [OpponentStrength; 3] = [
    OpponentStrength::Strong,
    OpponentStrength::Average,
    OpponentStrength::Weak,
];

impl OpponentStrength {
    pub fn label(self) -> &'static str {
        match self {
            OpponentStrength::Strong => "Strong",
            OpponentStrength::Average => "Average",
            OpponentStrength::Weak => "Weak",
        }
    }
}

/// Fixed sampling universe: player ids, team names and the position draw
/// weights. Players are assigned to teams by index, so a player id resolves
/// to the same team for the whole run.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub players: Vec<String>,
    pub teams: Vec<String>,
    // Aligned with POSITIONS.
    pub position_weights: [f64; 4],
}

const N_PLAYERS: usize = 50;
const N_TEAMS: usize = 10;

static DEFAULT_CATALOG: OnceCell<Catalog> = OnceCell::new();

pub fn default_catalog() -> &'static Catalog {
    DEFAULT_CATALOG.get_or_init(Catalog::default_universe)
}

impl Catalog {
    pub fn default_universe() -> Self {
        let players = (1..=N_PLAYERS).map(|i| format!("P{i:03}")).collect();
        let teams = (0..N_TEAMS)
            .map(|i| format!("Team {}", char::from(b'A' + i as u8)))
            .collect();
        Self {
            players,
            teams,
            position_weights: [0.25, 0.35, 0.30, 0.10],
        }
    }

    pub fn team_for_player(&self, player_idx: usize) -> &str {
        let per_team = self.players.len() / self.teams.len();
        &self.teams[player_idx / per_team]
    }

    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            bail!("catalog has no players");
        }
        if self.teams.is_empty() {
            bail!("catalog has no teams");
        }
        if self.players.len() % self.teams.len() != 0 {
            bail!(
                "player count {} does not split evenly across {} teams",
                self.players.len(),
                self.teams.len()
            );
        }
        if self.position_weights.iter().any(|w| *w < 0.0) {
            bail!("position weights must be non-negative");
        }
        let total: f64 = self.position_weights.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            bail!("position weights sum to {total}, expected 1.0");
        }
        Ok(())
    }
}
