use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Deck primitives
// ---------------------------------------------------------------------------

/// One deck slot: `1` is a copy of the tracked card, `0` is anything else.
pub type Marker = u8;

// ---------------------------------------------------------------------------
// Sampler request / response types
// ---------------------------------------------------------------------------

/// Configuration for one batch of deal trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Total cards in the deck (a standard list is 60).
    pub deck_size: usize,
    /// Copies of the tracked card in the deck.
    pub num_marked: usize,
    /// Enforce the standard 4-copy limit. Turn off for cards exempt from it
    /// (basic energy, or counting a whole category such as supporters).
    pub enforce_copy_limit: bool,
    /// Number of independent deals to run.
    pub trials: usize,
    /// Fix the RNG seed to reproduce the exact same batch — useful for tests.
    pub rng_seed: Option<u64>,
}

/// Cumulative prize-count percentages for one deck composition.
///
/// `at_least[k - 1]` is the percentage of trials where `k` or more copies of
/// the tracked card ended up in the six prize cards. Cumulative, not a
/// per-exact-count histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeOdds {
    pub copies_in_deck: usize,
    pub at_least: Vec<f64>,
}

/// Opening-hand result: percentage of trials where the hand held at least one
/// copy of the tracked card after seven draws, six prizes set aside, and the
/// first turn draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHandOdds {
    pub copies_in_deck: usize,
    pub hit_percent: f64,
}

// ---------------------------------------------------------------------------
// Win-rate records
// ---------------------------------------------------------------------------

/// One historical matchup row: `deck_a`'s win percentage over `deck_b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub deck_a: String,
    pub deck_b: String,
    /// 0..=100, validated when the table is built.
    pub win_percent: u8,
}

// ---------------------------------------------------------------------------
// Tournament roster types
// ---------------------------------------------------------------------------

/// One entrant. `id` is the player's index in the roster, assigned by roster
/// order and stable for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub deck_name: String,
    /// Running match points: 3 per win, 1 per bye.
    pub score: u32,
    /// One entry per round played, in round order.
    pub rounds: Vec<RoundRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
    Bye,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Win  => write!(f, "Win"),
            RoundOutcome::Loss => write!(f, "Lose"),
            RoundOutcome::Bye  => write!(f, "Bye"),
        }
    }
}

/// What happened to one player in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Opponent's player id, or `None` for a bye.
    pub opponent: Option<usize>,
    pub opponent_deck: Option<String>,
    pub outcome: RoundOutcome,
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.opponent, &self.opponent_deck) {
            (Some(id), Some(deck)) => {
                write!(f, "Player {} (Deck: {}): {}", id, deck, self.outcome)
            }
            _ => write!(f, "No opponent: {}", self.outcome),
        }
    }
}

/// Configuration for one simulated tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentRequest {
    /// `(deck name, player count)` in roster order. Order determines player
    /// ids, so keep it stable across runs you want to compare.
    pub entrants: Vec<(String, usize)>,
    /// Fix the RNG seed to reproduce pairings and outcomes exactly.
    pub rng_seed: Option<u64>,
}

/// Final roster after all Swiss rounds, plus the round count that was played.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResult {
    pub players: Vec<Player>,
    pub rounds: u32,
}

// ---------------------------------------------------------------------------
// Standings reduction rows
// ---------------------------------------------------------------------------

/// Total match points accumulated by every player on one deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPoints {
    pub deck_name: String,
    pub total_points: u32,
}

/// Share of one deck's players that finished at one score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreShare {
    pub deck_name: String,
    pub score: u32,
    pub proportion: f64,
}
