//! Change notifications and the observer registry.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::intents::{IntentAction, Ticket};
use crate::domain::announcements::{AnnounceSide, AnnouncementLevel};
use crate::domain::rules::PLAYERS;
use crate::domain::{PlayerId, TeamSide};
use crate::errors::ErrorCode;

/// Typed notification emitted after every engine state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    SnapshotApplied {
        version: u64,
    },
    HandChanged {
        size: usize,
    },
    TrickChanged {
        length: usize,
    },
    TeamRevealed {
        player: PlayerId,
        side: TeamSide,
    },
    TeamsResolved {
        sides: [TeamSide; PLAYERS],
    },
    AnnouncementChanged {
        side: AnnounceSide,
        from: AnnouncementLevel,
        to: AnnouncementLevel,
    },
    IntentIssued {
        ticket: Ticket,
        action: IntentAction,
    },
    IntentRolledBack {
        ticket: Ticket,
        code: ErrorCode,
    },
    Reset,
}

/// Receives engine notifications. Any `FnMut(&EngineEvent)` qualifies.
pub trait EngineObserver {
    fn notify(&mut self, event: &EngineEvent);
}

impl<F> EngineObserver for F
where
    F: FnMut(&EngineEvent),
{
    fn notify(&mut self, event: &EngineEvent) {
        self(event)
    }
}

/// Subscribers keyed by the token handed out at registration.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(Uuid, Box<dyn EngineObserver>)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Box<dyn EngineObserver>) -> Uuid {
        let token = Uuid::new_v4();
        self.observers.push((token, observer));
        debug!(%token, subscribers = self.observers.len(), "observer registered");
        token
    }

    /// Returns whether the token was registered.
    pub fn unregister(&mut self, token: Uuid) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(t, _)| *t != token);
        let removed = self.observers.len() != before;
        debug!(%token, removed, "observer unregistered");
        removed
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `event` to every subscriber in registration order.
    pub fn broadcast(&mut self, event: &EngineEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.notify(event);
        }
    }
}

impl core::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
