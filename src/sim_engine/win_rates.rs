//! Historical matchup win rates, loaded once and immutable for a whole
//! tournament run.

use serde::{Deserialize, Serialize};

use crate::sim_engine::error::SimError;
use crate::sim_engine::models::MatchupRecord;

/// Default applied when two decks have no recorded matchup: treat it as even.
pub const UNKNOWN_MATCHUP_PERCENT: u8 = 50;

/// Lookup table of per-matchup win percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinRateTable {
    records: Vec<MatchupRecord>,
}

impl WinRateTable {
    /// Validate and wrap a set of matchup records.
    ///
    /// Every `win_percent` must be 0..=100; the first out-of-range record is
    /// reported as [`SimError::MalformedRecord`].
    pub fn new(records: Vec<MatchupRecord>) -> Result<Self, SimError> {
        for record in &records {
            if record.win_percent > 100 {
                return Err(SimError::MalformedRecord(format!(
                    "{} vs {}: win percent {} is outside 0..=100",
                    record.deck_a, record.deck_b, record.win_percent
                )));
            }
        }
        Ok(WinRateTable { records })
    }

    /// Load records from a JSON array of `{deck_a, deck_b, win_percent}`
    /// objects. The caller reads the file; this validates the shape.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let records: Vec<MatchupRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Win percentage for `deck_a` against `deck_b`.
    ///
    /// The lookup is symmetric: a record stored as `(b, a, p)` also matches,
    /// and `p` is returned unchanged either way. An asymmetric matchup is
    /// therefore applied identically from both sides; callers who need
    /// per-side rates must store both orientations. Unknown pairings fall
    /// back to [`UNKNOWN_MATCHUP_PERCENT`].
    pub fn win_percent(&self, deck_a: &str, deck_b: &str) -> u8 {
        for record in &self.records {
            if (record.deck_a == deck_a && record.deck_b == deck_b)
                || (record.deck_a == deck_b && record.deck_b == deck_a)
            {
                return record.win_percent;
            }
        }
        UNKNOWN_MATCHUP_PERCENT
    }

    /// Unique deck names across all records, in first-appearance order.
    pub fn deck_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.deck_a) {
                names.push(record.deck_a.clone());
            }
            if !names.contains(&record.deck_b) {
                names.push(record.deck_b.clone());
            }
        }
        names
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Win percentage of `deck_a` over `deck_b` per the table, defaulting to even.
pub fn resolve_match(deck_a: &str, deck_b: &str, table: &WinRateTable) -> u8 {
    table.win_percent(deck_a, deck_b)
}
