use rand::Rng;
use crate::sim_engine::error::SimError;
use crate::sim_engine::models::Marker;

/// Cards drawn for the opening hand.
pub const HAND_SIZE: usize = 7;
/// Cards set aside as prizes after the opening hand.
pub const PRIZE_COUNT: usize = 6;
/// Standard per-card copy limit.
pub const MAX_COPIES: usize = 4;

/// A deck of 0/1 markers that can be shuffled and dealt from.
///
/// The shuffled sequence is never mutated after the first deal; zones are
/// consumed by advancing a cursor, so hand, prizes, and remaining deck are
/// always disjoint slices of the same permutation.
pub struct PrizeDeck {
    cards: Vec<Marker>,
    cursor: usize,
}

impl PrizeDeck {
    /// Build an unshuffled deck with `num_marked` copies of the tracked card.
    ///
    /// Errors with [`SimError::InvalidConfiguration`] when `num_marked` is
    /// zero, exceeds the deck size, or (with `enforce_copy_limit`) exceeds
    /// [`MAX_COPIES`].
    pub fn build(
        deck_size: usize,
        num_marked: usize,
        enforce_copy_limit: bool,
    ) -> Result<Self, SimError> {
        if num_marked == 0 {
            return Err(SimError::InvalidConfiguration(
                "deck must contain at least 1 copy of the tracked card".into(),
            ));
        }
        if num_marked > deck_size {
            return Err(SimError::InvalidConfiguration(format!(
                "{num_marked} copies cannot fit in a {deck_size}-card deck"
            )));
        }
        if enforce_copy_limit && num_marked > MAX_COPIES {
            return Err(SimError::InvalidConfiguration(format!(
                "{num_marked} copies exceeds the {MAX_COPIES}-copy limit"
            )));
        }

        let mut cards = vec![1; num_marked];
        cards.resize(deck_size, 0);
        Ok(PrizeDeck { cards, cursor: 0 })
    }

    /// Build a deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(
        deck_size: usize,
        num_marked: usize,
        enforce_copy_limit: bool,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let mut deck = Self::build(deck_size, num_marked, enforce_copy_limit)?;
        deck.shuffle(rng);
        Ok(deck)
    }

    /// Uniform in-place permutation. Only meaningful before the first deal.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        // Fisher-Yates shuffle
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the opening hand ([`HAND_SIZE`] cards).
    pub fn draw_opening_hand(&mut self) -> Result<Vec<Marker>, SimError> {
        Ok(self.take(HAND_SIZE)?.to_vec())
    }

    /// Remove and return the prize cards ([`PRIZE_COUNT`] cards).
    ///
    /// Call after [`draw_opening_hand`](Self::draw_opening_hand): the order
    /// shuffle → hand → prizes → extra draw is what the measured
    /// probabilities assume.
    pub fn set_prizes(&mut self) -> Result<Vec<Marker>, SimError> {
        Ok(self.take(PRIZE_COUNT)?.to_vec())
    }

    /// Draw one more card into `hand`, returning the drawn marker.
    pub fn draw_one(&mut self, hand: &mut Vec<Marker>) -> Result<Marker, SimError> {
        let card = self.take(1)?[0];
        hand.push(card);
        Ok(card)
    }

    /// Cards not yet assigned to any zone.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// The not-yet-dealt suffix of the shuffled deck.
    pub fn remaining_cards(&self) -> &[Marker] {
        &self.cards[self.cursor..]
    }

    fn take(&mut self, n: usize) -> Result<&[Marker], SimError> {
        if self.remaining() < n {
            return Err(SimError::InsufficientCards {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let zone = &self.cards[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(zone)
    }
}

/// Count copies of the tracked card in a zone.
///
/// Any element other than 0 or 1 means the zone was not produced by
/// [`PrizeDeck`]; that is reported as [`SimError::TypeMismatch`] rather than
/// silently counted.
pub fn count_marked(zone: &[Marker]) -> Result<usize, SimError> {
    let mut counter = 0;
    for &card in zone {
        match card {
            1 => counter += 1,
            0 => {}
            other => return Err(SimError::TypeMismatch(other)),
        }
    }
    Ok(counter)
}
