use thiserror::Error;

/// Everything that can go wrong inside the simulation core.
///
/// All variants are deterministic precondition violations: a configuration is
/// rejected before a loop starts, or a mid-loop failure aborts the whole
/// batch. Nothing here is transient, so there is no retry path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid deck configuration: {0}")]
    InvalidConfiguration(String),

    #[error("insufficient cards: needed {needed}, only {remaining} remaining")]
    InsufficientCards { needed: usize, remaining: usize },

    #[error("zone element {0} is not a 0/1 card marker")]
    TypeMismatch(u8),

    #[error("no Swiss round count defined for {0} players")]
    UnsupportedPlayerCount(usize),

    #[error("malformed win-rate record: {0}")]
    MalformedRecord(String),
}

impl From<serde_json::Error> for SimError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedRecord(value.to_string())
    }
}
