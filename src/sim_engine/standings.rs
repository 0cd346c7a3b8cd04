//! Pure reductions over a finished roster. Nothing here mutates players or
//! touches randomness — these are the tables a results view renders.

use crate::sim_engine::models::{DeckPoints, Player, ScoreShare};

/// Total match points per deck, highest first.
///
/// Ties keep first-appearance order (stable sort), so two decks on equal
/// points rank in roster order run after run.
pub fn points_per_deck(players: &[Player]) -> Vec<DeckPoints> {
    let mut totals: Vec<DeckPoints> = Vec::new();
    for player in players {
        match totals.iter_mut().find(|d| d.deck_name == player.deck_name) {
            Some(deck) => deck.total_points += player.score,
            None => totals.push(DeckPoints {
                deck_name: player.deck_name.clone(),
                total_points: player.score,
            }),
        }
    }
    totals.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    totals
}

/// The `n` highest-scoring players, ties broken by roster order.
pub fn top_n(players: &[Player], n: usize) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(n);
    ranked
}

/// How each deck's players spread across final scores.
///
/// For every `(deck, score)` seen in the roster, reports the fraction of that
/// deck's entrants who finished there. `entrants` supplies the per-deck
/// denominators; decks missing from it are skipped.
pub fn score_distribution(players: &[Player], entrants: &[(String, usize)]) -> Vec<ScoreShare> {
    let mut counts: Vec<(String, u32, usize)> = Vec::new();
    for player in players {
        match counts
            .iter_mut()
            .find(|(deck, score, _)| *deck == player.deck_name && *score == player.score)
        {
            Some((_, _, count)) => *count += 1,
            None => counts.push((player.deck_name.clone(), player.score, 1)),
        }
    }

    counts
        .into_iter()
        .filter_map(|(deck_name, score, count)| {
            let total = entrants
                .iter()
                .find(|(deck, _)| *deck == deck_name)
                .map(|(_, total)| *total)?;
            if total == 0 {
                return None;
            }
            Some(ScoreShare {
                deck_name,
                score,
                proportion: count as f64 / total as f64,
            })
        })
        .collect()
}
