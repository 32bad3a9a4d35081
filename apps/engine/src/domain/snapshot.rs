//! Authoritative state received from the peer, and the peer's answers to
//! intents.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::announcements::{AnnounceFlags, AnnouncementLevels};
use crate::domain::rules::TRICK_SIZE;
use crate::domain::state::{require_seat, PlayerId};
use crate::domain::teams::RevealEvent;
use crate::domain::{Card, GameVariant};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;

/// Full state for the local seat at one peer version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Monotonically increasing peer state version.
    #[serde(default)]
    pub version: u64,
    pub hand: Vec<Card>,
    #[serde(default)]
    pub current_trick: Vec<Card>,
    pub current_player: PlayerId,
    pub variant: GameVariant,
    #[serde(default)]
    pub legal_card_ids: Vec<String>,
    #[serde(default)]
    pub announce_flags: AnnounceFlags,
    /// Announcement levels as the peer sees them. Absent on peers that do
    /// not report them; local levels are then kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcements: Option<AnnouncementLevels>,
    #[serde(default)]
    pub revealed: Vec<RevealEvent>,
}

impl GameSnapshot {
    /// Snapshot for the start of trick play: empty trick, every hand card legal.
    pub fn opening(hand: Vec<Card>, current_player: PlayerId, variant: GameVariant) -> Self {
        let legal_card_ids = hand.iter().map(|c| c.id.clone()).collect();
        Self {
            version: 0,
            hand,
            current_trick: Vec::new(),
            current_player,
            variant,
            legal_card_ids,
            announce_flags: AnnounceFlags::default(),
            announcements: None,
            revealed: Vec::new(),
        }
    }

    /// Structural checks; the peer is trusted for everything else.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_seat(self.current_player)?;
        if self.current_trick.len() > TRICK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidSnapshot,
                format!(
                    "trick holds {} cards, at most {TRICK_SIZE} allowed",
                    self.current_trick.len()
                ),
            ));
        }
        let mut ids = HashSet::new();
        for card in self.hand.iter().chain(self.current_trick.iter()) {
            if !ids.insert(card.id.as_str()) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidSnapshot,
                    format!("card id {} appears twice", card.id),
                ));
            }
        }
        for reveal in &self.revealed {
            require_seat(reveal.player)?;
        }
        Ok(())
    }
}

/// The peer's answer to an intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PeerResponse {
    Accepted { snapshot: GameSnapshot },
    Rejected { code: ErrorCode, detail: String },
}
