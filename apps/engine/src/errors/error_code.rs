//! Reason codes exposed to the presentation layer and the authoritative peer.
//!
//! Add new codes here; never pass ad-hoc strings as reason codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in rejections.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Centralized reason codes for rejected intents and refused snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Card not in hand or not in the legal set
    InvalidCard,
    /// Announcement skips a level or repeats one
    OutOfOrder,
    /// Announcement precondition flag is false
    NotPermitted,
    /// Operation issued against a superseded snapshot
    StaleState,
    /// Seat index outside 0..=3
    InvalidSeat,
    /// Snapshot violates a structural invariant
    InvalidSnapshot,
    /// Card token could not be parsed
    ParseCard,
    /// The authoritative peer refused an intent without a more specific code
    RejectedByPeer,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidCard => "INVALID_CARD",
            ErrorCode::OutOfOrder => "OUT_OF_ORDER",
            ErrorCode::NotPermitted => "NOT_PERMITTED",
            ErrorCode::StaleState => "STALE_STATE",
            ErrorCode::InvalidSeat => "INVALID_SEAT",
            ErrorCode::InvalidSnapshot => "INVALID_SNAPSHOT",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::RejectedByPeer => "REJECTED_BY_PEER",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
