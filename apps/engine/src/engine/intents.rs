//! Intents forwarded to the authoritative peer, and the inverse the engine
//! keeps for each one until the peer answers.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::announcements::{AnnounceSide, AnnouncementLevel, Transition};
use crate::domain::{Card, PlayerId};
use crate::errors::ErrorCode;

/// Handle the caller passes back to [`Engine::resolve`](super::Engine::resolve).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntentAction {
    PlayCard {
        card_id: String,
    },
    Announce {
        side: AnnounceSide,
        level: AnnouncementLevel,
    },
}

/// A locally validated request, ready to send to the peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub ticket: Ticket,
    /// Snapshot version the intent was validated against.
    pub base_version: u64,
    pub action: IntentAction,
}

/// How a resolved intent ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The peer accepted; its snapshot replaced local state.
    Confirmed,
    /// The peer refused; the listed tickets were rolled back, the resolved
    /// one first.
    RolledBack {
        code: ErrorCode,
        tickets: Vec<Ticket>,
    },
}

/// State needed to undo one optimistic mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Undo {
    Play {
        card: Card,
        hand_index: usize,
        previous_player: PlayerId,
        legal_card_ids: Vec<String>,
    },
    Announce(Transition),
}

#[derive(Debug, Clone)]
pub(crate) struct PendingIntent {
    pub intent: Intent,
    /// `None` when optimistic updates are off.
    pub undo: Option<Undo>,
}

impl PendingIntent {
    pub fn ticket(&self) -> Ticket {
        self.intent.ticket
    }

    /// Side of a pending optimistic announcement, if this is one.
    pub fn announced_side(&self) -> Option<AnnounceSide> {
        match &self.undo {
            Some(Undo::Announce(t)) => Some(t.side),
            _ => None,
        }
    }
}
