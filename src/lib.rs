//! # tcg_sim
//!
//! Monte-Carlo odds and Swiss tournament simulation for a trading-card game.
//!
//! Two independent subsystems, sharing no runtime state:
//!
//! 1. **Deal sampling** — how often copies of a card end up locked in the six
//!    prize cards, and how often the opening hand (plus the first draw after
//!    prizes) contains a card of interest. Estimated by repeated randomized
//!    deals over a 0/1-marked deck.
//! 2. **Swiss bracket play** — given a roster of decks and a table of
//!    historical matchup win rates, simulate a full Swiss tournament:
//!    round count from entrant count, score-tier pairings with bye handling,
//!    weighted coin-flip match resolution, and final standings.
//!
//! The crate consumes and returns plain data only. Reading files, rendering
//! charts, and driving a UI are the caller's job; everything here is pure
//! in-memory simulation.
//!
//! ## Determinism
//!
//! Every entry point takes `rng_seed: Option<u64>`. Pass `Some(seed)` to
//! reproduce an entire batch or bracket exactly — useful for tests and for
//! comparing scenarios; pass `None` for fresh entropy per run.
//!
//! ## Quick start
//!
//! ```rust
//! use tcg_sim::{
//!     points_per_deck, run_prize_trials, run_tournament, top_n,
//!     MatchupRecord, TournamentRequest, TrialConfig, WinRateTable,
//! };
//!
//! // How often is a 4-of locked in the prizes?
//! let odds = run_prize_trials(&TrialConfig {
//!     deck_size: 60,
//!     num_marked: 4,
//!     enforce_copy_limit: true,
//!     trials: 10_000,
//!     rng_seed: Some(42),
//! })
//! .unwrap();
//! println!("at least one copy prized: {:.1}%", odds.at_least[0]);
//!
//! // Simulate a 9-player Swiss event from one recorded matchup.
//! let table = WinRateTable::new(vec![MatchupRecord {
//!     deck_a: "Charizard".to_string(),
//!     deck_b: "Gardevoir".to_string(),
//!     win_percent: 60,
//! }])
//! .unwrap();
//!
//! let result = run_tournament(
//!     &TournamentRequest {
//!         entrants: vec![
//!             ("Charizard".to_string(), 5),
//!             ("Gardevoir".to_string(), 4),
//!         ],
//!         rng_seed: Some(7),
//!     },
//!     &table,
//! )
//! .unwrap();
//!
//! assert_eq!(result.rounds, 4);
//! for deck in points_per_deck(&result.players) {
//!     println!("{}: {} points", deck.deck_name, deck.total_points);
//! }
//! for player in top_n(&result.players, 8) {
//!     println!("Player {} ({}): {}", player.id, player.deck_name, player.score);
//! }
//! ```

pub mod sim_engine;

// Convenience re-exports so callers can use `tcg_sim::run_tournament`
// directly without reaching into `sim_engine::`.
pub use sim_engine::{
    build_round_pairings, build_roster, count_marked, play_round,
    points_per_deck, resolve_match, rounds_for, run_opening_hand_trials,
    run_prize_grid, run_prize_trials, run_tournament, score_distribution,
    top_n, DeckPoints, Marker, MatchupRecord, OpeningHandOdds, Player,
    PrizeDeck, PrizeOdds, RoundOutcome, RoundPairings, RoundRecord, ScoreShare,
    SimError, TournamentRequest, TournamentResult, TrialConfig, WinRateTable,
    BYE_POINTS, HAND_SIZE, MATCH_WIN_POINTS, MAX_COPIES, PRIZE_COUNT,
    UNKNOWN_MATCHUP_PERCENT,
};
