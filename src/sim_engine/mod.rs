//! Core simulation engine — prize-card sampling and Swiss bracket play.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: deck markers, players, records, result rows |
//! | `error`     | `SimError` — every precondition violation the engine reports |
//! | `deck`      | Cursor-based marker deck with Fisher-Yates shuffle |
//! | `sampler`   | Deal-trial batches and their percentage aggregations |
//! | `win_rates` | Validated matchup table with symmetric lookup |
//! | `swiss`     | Round count, score-tier pairings, match resolution |
//! | `standings` | Pure reductions over a finished roster |

pub mod deck;
pub mod error;
pub mod models;
pub mod sampler;
pub mod standings;
pub mod swiss;
pub mod win_rates;

// Re-export the public API surface so callers can use
// `sim_engine::run_tournament` without reaching into sub-modules.
pub use deck::{count_marked, PrizeDeck, HAND_SIZE, MAX_COPIES, PRIZE_COUNT};
pub use error::SimError;
pub use models::{
    DeckPoints, Marker, MatchupRecord, OpeningHandOdds, Player, PrizeOdds,
    RoundOutcome, RoundRecord, ScoreShare, TournamentRequest, TournamentResult,
    TrialConfig,
};
pub use sampler::{run_opening_hand_trials, run_prize_grid, run_prize_trials};
pub use standings::{points_per_deck, score_distribution, top_n};
pub use swiss::{
    build_round_pairings, build_roster, play_round, rounds_for, run_tournament,
    RoundPairings, BYE_POINTS, MATCH_WIN_POINTS,
};
pub use win_rates::{resolve_match, WinRateTable, UNKNOWN_MATCHUP_PERCENT};
