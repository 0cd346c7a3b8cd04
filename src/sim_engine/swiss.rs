//! Swiss bracket simulation: round count, score-group pairings, match
//! resolution against the win-rate table, and round-by-round bookkeeping.

use std::collections::BTreeMap;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::sim_engine::{
    error::SimError,
    models::{Player, RoundOutcome, RoundRecord, TournamentRequest, TournamentResult},
    win_rates::{resolve_match, WinRateTable},
};

/// Match points for winning a played match.
pub const MATCH_WIN_POINTS: u32 = 3;
/// Match points for an unpaired round. Not the same as a played win.
pub const BYE_POINTS: u32 = 1;

/// `(max players, rounds)` for single-phase Swiss. Monotonic in both columns;
/// events above the last threshold are out of range, not rounded.
const ROUND_TABLE: [(usize, u32); 11] = [
    (8, 3),
    (16, 4),
    (32, 6),
    (64, 7),
    (128, 8),
    (256, 9),
    (512, 10),
    (1024, 11),
    (2048, 12),
    (4096, 13),
    (8192, 14),
];

/// Pairings for one round, one inner list per score tier in descending score
/// order. `(id, None)` is a bye.
pub type RoundPairings = Vec<Vec<(usize, Option<usize>)>>;

/// Number of Swiss rounds for `player_count` entrants.
///
/// Picks the smallest table threshold that fits. The table has no fallback:
/// counts above 8192 players error with
/// [`SimError::UnsupportedPlayerCount`], never a guessed round count.
pub fn rounds_for(player_count: usize) -> Result<u32, SimError> {
    ROUND_TABLE
        .iter()
        .find(|(max_players, _)| *max_players >= player_count)
        .map(|(_, rounds)| *rounds)
        .ok_or(SimError::UnsupportedPlayerCount(player_count))
}

/// Expand `(deck name, player count)` entries into a roster.
///
/// Ids are assigned by roster order and double as indices into the returned
/// vec; the engine relies on that equivalence.
pub fn build_roster<I>(entrants: I) -> Vec<Player>
where
    I: IntoIterator<Item = (String, usize)>,
{
    let mut players = Vec::new();
    for (deck_name, count) in entrants {
        for _ in 0..count {
            players.push(Player {
                id: players.len(),
                deck_name: deck_name.clone(),
                score: 0,
                rounds: Vec::new(),
            });
        }
    }
    players
}

/// Pair the roster for one round from the current scores.
///
/// Players are grouped into score tiers, highest first. Each tier is
/// shuffled, then paired off consecutively; a tier with an odd count leaves
/// one player unpaired. Every unpaired player is appended as a bye to the
/// **lowest** tier's list, in the order the tiers were processed. Unpaired
/// players float to the bottom tier, not to the nearest lower tier.
pub fn build_round_pairings<R: Rng>(players: &[Player], rng: &mut R) -> RoundPairings {
    let mut tiers: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for player in players {
        tiers.entry(player.score).or_default().push(player.id);
    }

    let mut groups: RoundPairings = Vec::new();
    let mut deferred: Vec<usize> = Vec::new();

    for (_score, mut ids) in tiers.into_iter().rev() {
        shuffle_ids(&mut ids, rng);
        let mut matches = Vec::new();
        for pair in ids.chunks(2) {
            match pair {
                [a, b] => matches.push((*a, Some(*b))),
                [odd] => deferred.push(*odd),
                _ => unreachable!("chunks(2) yields 1- or 2-element slices"),
            }
        }
        groups.push(matches);
    }

    if let Some(bottom) = groups.last_mut() {
        for id in deferred {
            bottom.push((id, None));
        }
    }

    groups
}

/// Play one round: pair everyone, resolve every match, apply points, and
/// append a [`RoundRecord`] to both sides of every pairing.
///
/// A match is decided by one uniform draw in `[0, 1)`: below
/// `win_percent / 100` the first-listed player wins [`MATCH_WIN_POINTS`] and
/// the opponent gets nothing. There is no drawn-game outcome.
pub fn play_round<R: Rng>(players: &mut [Player], table: &WinRateTable, rng: &mut R) {
    let pairings = build_round_pairings(players, rng);

    for tier in pairings {
        for (first, opponent) in tier {
            let Some(second) = opponent else {
                let player = &mut players[first];
                player.score += BYE_POINTS;
                player.rounds.push(RoundRecord {
                    opponent: None,
                    opponent_deck: None,
                    outcome: RoundOutcome::Bye,
                });
                continue;
            };

            let first_deck = players[first].deck_name.clone();
            let second_deck = players[second].deck_name.clone();
            let win_percent = resolve_match(&first_deck, &second_deck, table);
            let first_wins = rng.gen::<f64>() < f64::from(win_percent) / 100.0;

            let winner = if first_wins { first } else { second };
            players[winner].score += MATCH_WIN_POINTS;

            players[first].rounds.push(RoundRecord {
                opponent: Some(second),
                opponent_deck: Some(second_deck),
                outcome: if first_wins { RoundOutcome::Win } else { RoundOutcome::Loss },
            });
            players[second].rounds.push(RoundRecord {
                opponent: Some(first),
                opponent_deck: Some(first_deck),
                outcome: if first_wins { RoundOutcome::Loss } else { RoundOutcome::Win },
            });
        }
    }
}

/// Simulate a whole Swiss tournament.
///
/// The round count comes from [`rounds_for`] on the total entrant count and
/// is validated before any round is played. One RNG drives every shuffle and
/// match draw in a fixed order, so a seeded request reproduces the entire
/// bracket.
pub fn run_tournament(
    request: &TournamentRequest,
    table: &WinRateTable,
) -> Result<TournamentResult, SimError> {
    let total_players: usize = request.entrants.iter().map(|(_, count)| count).sum();
    let rounds = rounds_for(total_players)?;

    let mut players = build_roster(request.entrants.iter().cloned());
    let mut rng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    for _ in 0..rounds {
        play_round(&mut players, table, &mut rng);
    }

    Ok(TournamentResult { players, rounds })
}

fn shuffle_ids<R: Rng>(ids: &mut [usize], rng: &mut R) {
    // Fisher-Yates shuffle
    for i in (1..ids.len()).rev() {
        let j = rng.gen_range(0..=i);
        ids.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim_engine::models::MatchupRecord;

    fn roster_of(scores: &[u32]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(id, &score)| Player {
                id,
                deck_name: format!("deck_{id}"),
                score,
                rounds: Vec::new(),
            })
            .collect()
    }

    fn even_table() -> WinRateTable {
        WinRateTable::new(vec![]).unwrap()
    }

    #[test]
    fn round_table_boundaries() {
        assert_eq!(rounds_for(0).unwrap(), 3);
        assert_eq!(rounds_for(8).unwrap(), 3);
        assert_eq!(rounds_for(9).unwrap(), 4);
        assert_eq!(rounds_for(16).unwrap(), 4);
        assert_eq!(rounds_for(17).unwrap(), 6);
        assert_eq!(rounds_for(8192).unwrap(), 14);
        assert_eq!(
            rounds_for(8193),
            Err(SimError::UnsupportedPlayerCount(8193))
        );
    }

    #[test]
    fn five_player_tier_yields_two_pairs_and_one_bye() {
        let players = roster_of(&[0, 0, 0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(42);
        let pairings = build_round_pairings(&players, &mut rng);

        assert_eq!(pairings.len(), 1, "five equal scores form a single tier");
        let tier = &pairings[0];
        assert_eq!(tier.len(), 3);
        assert_eq!(tier.iter().filter(|(_, opp)| opp.is_some()).count(), 2);
        assert_eq!(tier.iter().filter(|(_, opp)| opp.is_none()).count(), 1);

        // Each player appears exactly once across the round.
        let mut seen: Vec<usize> = tier
            .iter()
            .flat_map(|&(a, b)| std::iter::once(a).chain(b))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn all_distinct_scores_float_everyone_to_the_bottom_tier() {
        let players = roster_of(&[4, 3, 2, 1, 0]);
        let mut rng = StdRng::seed_from_u64(7);
        let pairings = build_round_pairings(&players, &mut rng);

        assert_eq!(pairings.len(), 5, "each distinct score is its own tier");
        for tier in &pairings[..4] {
            assert!(tier.is_empty(), "a size-1 tier produces no pairs");
        }
        // All five byes land in the lowest tier, highest score first.
        let bottom = &pairings[4];
        assert_eq!(
            bottom,
            &vec![(0, None), (1, None), (2, None), (3, None), (4, None)]
        );
    }

    #[test]
    fn empty_roster_pairs_to_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let pairings = build_round_pairings(&[], &mut rng);
        assert!(pairings.is_empty());
    }

    #[test]
    fn pairings_are_deterministic_given_a_seed() {
        let players = roster_of(&[3, 3, 0, 0, 0, 3, 0]);
        let pair = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            build_round_pairings(&players, &mut rng)
        };
        assert_eq!(pair(5), pair(5));
    }

    #[test]
    fn bye_and_match_win_award_different_points() {
        let mut players = roster_of(&[0, 0, 0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(42);
        play_round(&mut players, &even_table(), &mut rng);

        let mut scores: Vec<u32> = players.iter().map(|p| p.score).collect();
        scores.sort_unstable();
        // Two losers, one bye, two winners.
        assert_eq!(scores, vec![0, 0, BYE_POINTS, MATCH_WIN_POINTS, MATCH_WIN_POINTS]);

        let bye = players.iter().find(|p| p.score == BYE_POINTS).unwrap();
        assert_eq!(bye.rounds[0].opponent, None);
        assert_eq!(bye.rounds[0].outcome, RoundOutcome::Bye);
        assert_eq!(bye.rounds[0].to_string(), "No opponent: Bye");
    }

    #[test]
    fn round_records_cross_reference_both_sides() {
        let mut players = build_roster(vec![
            ("Charizard".to_string(), 2),
            ("Gardevoir".to_string(), 2),
        ]);
        let table = even_table();
        let mut rng = StdRng::seed_from_u64(9);
        play_round(&mut players, &table, &mut rng);

        for player in &players {
            assert_eq!(player.rounds.len(), 1);
            let record = &player.rounds[0];
            let opponent = record.opponent.expect("four players, no byes");
            let opposite = &players[opponent].rounds[0];
            assert_eq!(opposite.opponent, Some(player.id));
            match record.outcome {
                RoundOutcome::Win  => assert_eq!(opposite.outcome, RoundOutcome::Loss),
                RoundOutcome::Loss => assert_eq!(opposite.outcome, RoundOutcome::Win),
                RoundOutcome::Bye  => panic!("no byes expected with four players"),
            }
            assert_eq!(
                record.opponent_deck.as_deref(),
                Some(players[opponent].deck_name.as_str())
            );
        }
    }

    #[test]
    fn one_sided_table_always_beats_the_mirror_listing() {
        // A 100% record decides every resolved match in favor of whichever
        // side was listed first in the pairing; the stored percentage is used
        // unchanged from both orientations.
        let table = WinRateTable::new(vec![MatchupRecord {
            deck_a: "X".to_string(),
            deck_b: "Y".to_string(),
            win_percent: 100,
        }])
        .unwrap();

        let mut players = build_roster(vec![("X".to_string(), 1), ("Y".to_string(), 1)]);
        let mut rng = StdRng::seed_from_u64(2);
        play_round(&mut players, &table, &mut rng);

        let winner = players.iter().find(|p| p.score == MATCH_WIN_POINTS).unwrap();
        assert_eq!(winner.rounds[0].outcome, RoundOutcome::Win);
        let label = winner.rounds[0].to_string();
        assert!(label.ends_with(": Win"), "unexpected label {label:?}");
    }

    #[test]
    fn tournament_plays_the_looked_up_round_count() {
        let table = even_table();
        let request = TournamentRequest {
            entrants: vec![
                ("Charizard".to_string(), 5),
                ("Gardevoir".to_string(), 4),
            ],
            rng_seed: Some(42),
        };
        let result = run_tournament(&request, &table).unwrap();

        assert_eq!(result.rounds, 4, "9 players plays 4 rounds");
        assert_eq!(result.players.len(), 9);
        for player in &result.players {
            assert_eq!(player.rounds.len(), 4);
            let replayed: u32 = player
                .rounds
                .iter()
                .map(|r| match r.outcome {
                    RoundOutcome::Win  => MATCH_WIN_POINTS,
                    RoundOutcome::Bye  => BYE_POINTS,
                    RoundOutcome::Loss => 0,
                })
                .sum();
            assert_eq!(player.score, replayed, "score must match the round log");
        }

        // An odd field byes someone every round; tier sizes sum to 9, so the
        // number of odd tiers (= byes) is odd too.
        for round in 0..result.rounds as usize {
            let byes = result
                .players
                .iter()
                .filter(|p| p.rounds[round].opponent.is_none())
                .count();
            assert_eq!(byes % 2, 1, "round {round}: expected an odd bye count");
        }
    }

    #[test]
    fn seeded_tournaments_reproduce_exactly() {
        let table = WinRateTable::new(vec![MatchupRecord {
            deck_a: "Charizard".to_string(),
            deck_b: "Gardevoir".to_string(),
            win_percent: 65,
        }])
        .unwrap();
        let request = TournamentRequest {
            entrants: vec![
                ("Charizard".to_string(), 6),
                ("Gardevoir".to_string(), 6),
            ],
            rng_seed: Some(1234),
        };

        let a = run_tournament(&request, &table).unwrap();
        let b = run_tournament(&request, &table).unwrap();
        for (x, y) in a.players.iter().zip(b.players.iter()) {
            assert_eq!(x.score, y.score);
            assert_eq!(x.rounds, y.rounds);
        }
    }

    #[test]
    fn oversized_field_is_rejected_before_any_round() {
        let request = TournamentRequest {
            entrants: vec![("Charizard".to_string(), 8193)],
            rng_seed: Some(1),
        };
        assert_eq!(
            run_tournament(&request, &even_table()).unwrap_err(),
            SimError::UnsupportedPlayerCount(8193)
        );
    }

    #[test]
    fn empty_field_still_resolves() {
        let request = TournamentRequest { entrants: vec![], rng_seed: Some(1) };
        let result = run_tournament(&request, &even_table()).unwrap();
        assert_eq!(result.rounds, 3);
        assert!(result.players.is_empty());
    }
}
