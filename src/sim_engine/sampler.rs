//! Monte-Carlo deal trials and their caller-facing aggregations.
//!
//! Every entry point validates its configuration before the first deal, runs
//! the full batch off one RNG advanced in a fixed order, and propagates any
//! mid-batch error immediately. A failed trial aborts the batch; it is never
//! skipped or counted as zero.

use rand::{rngs::StdRng, SeedableRng};

use crate::sim_engine::{
    deck::{count_marked, PrizeDeck, HAND_SIZE, MAX_COPIES, PRIZE_COUNT},
    error::SimError,
    models::{OpeningHandOdds, PrizeOdds, TrialConfig},
};

impl TrialConfig {
    fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }

    /// Reject configurations that could not complete a single trial.
    fn validate(&self, cards_needed: usize) -> Result<(), SimError> {
        if self.trials == 0 {
            return Err(SimError::InvalidConfiguration(
                "trial count must be at least 1".into(),
            ));
        }
        // Surfaces the short-deck case before the loop instead of on trial 0.
        if self.deck_size < cards_needed {
            return Err(SimError::InsufficientCards {
                needed: cards_needed,
                remaining: self.deck_size,
            });
        }
        PrizeDeck::build(self.deck_size, self.num_marked, self.enforce_copy_limit)?;
        Ok(())
    }
}

/// Estimate how often copies of a card land in the six prize cards.
///
/// Each trial deals a fresh shuffled deck: opening hand first, prizes second,
/// then counts the marked cards among the prizes. The result is cumulative:
/// `at_least[k - 1]` is `100 * (trials with >= k copies prized) / trials`.
pub fn run_prize_trials(config: &TrialConfig) -> Result<PrizeOdds, SimError> {
    config.validate(HAND_SIZE + PRIZE_COUNT)?;
    let mut rng = config.rng();

    let mut prized_counts = Vec::with_capacity(config.trials);
    for _ in 0..config.trials {
        let mut deck = PrizeDeck::new_shuffled(
            config.deck_size,
            config.num_marked,
            config.enforce_copy_limit,
            &mut rng,
        )?;
        deck.draw_opening_hand()?;
        let prizes = deck.set_prizes()?;
        prized_counts.push(count_marked(&prizes)?);
    }

    Ok(PrizeOdds {
        copies_in_deck: config.num_marked,
        at_least: cumulative_at_least(&prized_counts, config.num_marked, config.trials),
    })
}

/// Estimate how often the opening hand holds at least one copy of a card.
///
/// Matches the first-turn sequence: seven-card hand, six prizes set aside,
/// then one draw into the hand. Reports the percentage of trials where the
/// eight-card hand contained one or more marked cards.
pub fn run_opening_hand_trials(config: &TrialConfig) -> Result<OpeningHandOdds, SimError> {
    config.validate(HAND_SIZE + PRIZE_COUNT + 1)?;
    let mut rng = config.rng();

    let mut hits = 0usize;
    for _ in 0..config.trials {
        let mut deck = PrizeDeck::new_shuffled(
            config.deck_size,
            config.num_marked,
            config.enforce_copy_limit,
            &mut rng,
        )?;
        let mut hand = deck.draw_opening_hand()?;
        deck.set_prizes()?;
        deck.draw_one(&mut hand)?;
        if count_marked(&hand)? > 0 {
            hits += 1;
        }
    }

    Ok(OpeningHandOdds {
        copies_in_deck: config.num_marked,
        hit_percent: 100.0 * hits as f64 / config.trials as f64,
    })
}

/// Prize odds for every copy count from 1 up to `max_copies`.
///
/// One row per composition, each row its own batch of `trials` deals. This is
/// the data behind the "1 copy / 2 copies / 3 copies / 4 copies" comparison
/// table.
pub fn run_prize_grid(
    deck_size: usize,
    max_copies: usize,
    trials: usize,
    rng_seed: Option<u64>,
) -> Result<Vec<PrizeOdds>, SimError> {
    let mut grid = Vec::with_capacity(max_copies);
    for copies in 1..=max_copies {
        let config = TrialConfig {
            deck_size,
            num_marked: copies,
            enforce_copy_limit: max_copies <= MAX_COPIES,
            trials,
            // Derive a distinct stream per row so rows stay independent while
            // the grid as a whole stays reproducible.
            rng_seed: rng_seed.map(|seed| seed.wrapping_add(copies as u64)),
        };
        grid.push(run_prize_trials(&config)?);
    }
    Ok(grid)
}

/// `100 * (count of trials with hit-count >= k) / trials` for each
/// `k in 1..=num_marked`.
fn cumulative_at_least(counts: &[usize], num_marked: usize, trials: usize) -> Vec<f64> {
    (1..=num_marked)
        .map(|k| {
            let at_least_k = counts.iter().filter(|&&c| c >= k).count();
            100.0 * at_least_k as f64 / trials as f64
        })
        .collect()
}
