//! Per-game engine: owns the local view of one game, answers presentation
//! queries, validates intents against optimistic local state and reconciles
//! with the authoritative peer.
//!
//! All entry points are synchronous. Every optimistic mutation is stored with
//! its inverse until the peer answers; a snapshot overwrites everything and
//! discards whatever was still pending.

pub mod events;
pub mod intents;

use tracing::{debug, info, warn};
use uuid::Uuid;

pub use events::{EngineEvent, EngineObserver, ObserverRegistry};
pub use intents::{Intent, IntentAction, Resolution, Ticket};

use self::intents::{PendingIntent, Undo};
use crate::config::EngineConfig;
use crate::domain::announcements::AnnouncementLevels;
use crate::domain::rules::PLAYERS;
use crate::domain::state::next_player;
use crate::domain::tricks::{seat_view, seat_views};
use crate::domain::{
    is_trump, is_trump_opt, sort_hand, trick_winner, AnnounceFlags, AnnounceSide,
    AnnouncementLevel, AnnouncementTracks, Card, GameSnapshot, GameVariant, PeerResponse,
    PlayerId, RevealOutcome, SeatView, TeamSide, TeamTracker, Trick, TrickRotation,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    variant: GameVariant,
    hand: Vec<Card>,
    trick: Trick,
    current_player: PlayerId,
    legal_card_ids: Vec<String>,
    flags: AnnounceFlags,
    announcements: AnnouncementTracks,
    teams: TeamTracker,
    /// Version of the last applied snapshot; `None` before the first one.
    version: Option<u64>,
    pending: Vec<PendingIntent>,
    next_ticket: u64,
    observers: ObserverRegistry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            variant: GameVariant::default(),
            hand: Vec::new(),
            trick: Trick::new(),
            current_player: 0,
            legal_card_ids: Vec::new(),
            flags: AnnounceFlags::default(),
            announcements: AnnouncementTracks::new(),
            teams: TeamTracker::new(),
            version: None,
            pending: Vec::new(),
            next_ticket: 1,
            observers: ObserverRegistry::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn current_trick(&self) -> &Trick {
        &self.trick
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn legal_card_ids(&self) -> &[String] {
        &self.legal_card_ids
    }

    pub fn announce_flags(&self) -> &AnnounceFlags {
        &self.flags
    }

    /// Intents still waiting for the peer, oldest first.
    pub fn pending_intents(&self) -> impl Iterator<Item = &Intent> {
        self.pending.iter().map(|p| &p.intent)
    }

    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.pending.iter().any(|p| p.ticket() == ticket)
    }

    // ---- queries ---------------------------------------------------------

    pub fn classify_trump(&self, card: &Card) -> bool {
        is_trump(card, self.variant)
    }

    /// Absent cards are never trump.
    pub fn classify_trump_opt(&self, card: Option<&Card>) -> bool {
        is_trump_opt(card, self.variant)
    }

    pub fn sort_hand(&self, cards: &[Card]) -> Vec<Card> {
        sort_hand(cards, self.variant)
    }

    pub fn sorted_hand(&self) -> Vec<Card> {
        sort_hand(&self.hand, self.variant)
    }

    pub fn rotation(&self) -> TrickRotation {
        TrickRotation::for_trick(self.current_player, &self.trick)
    }

    pub fn trick_seat(&self, player: PlayerId) -> Result<SeatView, DomainError> {
        seat_view(&self.trick, &self.rotation(), player)
    }

    pub fn trick_seats(&self) -> [SeatView; PLAYERS] {
        seat_views(&self.trick, &self.rotation())
    }

    /// Player currently holding the trick in progress.
    pub fn trick_holder(&self) -> Option<PlayerId> {
        let idx = trick_winner(self.trick.cards(), self.variant)?;
        Some(self.rotation().player_at(idx as u8))
    }

    pub fn team_of(&self, player: PlayerId) -> Result<TeamSide, DomainError> {
        self.teams.side_of(player)
    }

    pub fn teams(&self) -> [TeamSide; PLAYERS] {
        self.teams.sides()
    }

    pub fn announcement_level(&self, side: AnnounceSide) -> AnnouncementLevel {
        self.announcements.level(side)
    }

    pub fn announcement_levels(&self) -> AnnouncementLevels {
        self.announcements.levels()
    }

    pub fn announcement_options(&self, side: AnnounceSide) -> Vec<AnnouncementLevel> {
        self.announcements.options(side, &self.flags)
    }

    // ---- intents ---------------------------------------------------------

    /// Validate a play for the local seat and, when optimistic updates are
    /// on, move the card into the trick right away.
    pub fn request_play(&mut self, card_id: &str) -> Result<Intent, DomainError> {
        let hand_index = self
            .hand
            .iter()
            .position(|c| c.id == card_id)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidCard,
                    format!("card {card_id} is not in hand"),
                )
            })?;
        if self.current_player != self.config.local_seat {
            return Err(DomainError::validation(
                ValidationKind::NotPermitted,
                format!(
                    "seat {} is to play, local seat is {}",
                    self.current_player, self.config.local_seat
                ),
            ));
        }
        if self.trick.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::NotPermitted,
                "trick is complete; waiting for the next snapshot",
            ));
        }
        if !self.legal_card_ids.iter().any(|id| id == card_id) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCard,
                format!("card {card_id} is not in the legal set"),
            ));
        }

        let mut events = Vec::new();
        let undo = if self.config.optimistic_updates {
            let card = self.hand[hand_index].clone();
            self.trick.push(card.clone())?;
            self.hand.remove(hand_index);
            let previous_player = self.current_player;
            self.current_player = next_player(previous_player);
            let legal_card_ids = std::mem::take(&mut self.legal_card_ids);
            events.push(EngineEvent::HandChanged {
                size: self.hand.len(),
            });
            events.push(EngineEvent::TrickChanged {
                length: self.trick.len(),
            });
            Some(Undo::Play {
                card,
                hand_index,
                previous_player,
                legal_card_ids,
            })
        } else {
            None
        };

        let intent = self.issue(
            IntentAction::PlayCard {
                card_id: card_id.to_string(),
            },
            undo,
            &mut events,
        );
        self.publish(events);
        Ok(intent)
    }

    /// Validate an announcement and, when optimistic updates are on, advance
    /// the side's level right away.
    pub fn request_announcement(
        &mut self,
        side: AnnounceSide,
        level: AnnouncementLevel,
    ) -> Result<Intent, DomainError> {
        let mut events = Vec::new();
        let undo = if self.config.optimistic_updates {
            let transition = self.announcements.request(side, level, &self.flags)?;
            events.push(EngineEvent::AnnouncementChanged {
                side,
                from: transition.from,
                to: transition.to,
            });
            Some(Undo::Announce(transition))
        } else {
            self.announcements.check(side, level, &self.flags)?;
            None
        };

        let intent = self.issue(IntentAction::Announce { side, level }, undo, &mut events);
        self.publish(events);
        Ok(intent)
    }

    fn issue(
        &mut self,
        action: IntentAction,
        undo: Option<Undo>,
        events: &mut Vec<EngineEvent>,
    ) -> Intent {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        let intent = Intent {
            ticket,
            base_version: self.version.unwrap_or(0),
            action,
        };
        info!(
            %ticket,
            base_version = intent.base_version,
            optimistic = undo.is_some(),
            action = ?intent.action,
            "intent issued"
        );
        events.push(EngineEvent::IntentIssued {
            ticket,
            action: intent.action.clone(),
        });
        self.pending.push(PendingIntent {
            intent: intent.clone(),
            undo,
        });
        intent
    }

    // ---- reconciliation --------------------------------------------------

    /// Overwrite local state with an authoritative snapshot. Pending intents
    /// are discarded; their tickets become stale.
    pub fn apply_snapshot(&mut self, snapshot: GameSnapshot) -> Result<(), DomainError> {
        snapshot.validate()?;
        if self.config.strict_versions {
            if let Some(current) = self.version {
                if snapshot.version < current {
                    warn!(
                        version = snapshot.version,
                        current, "refusing snapshot older than applied state"
                    );
                    return Err(DomainError::stale(format!(
                        "snapshot version {} is older than applied version {current}",
                        snapshot.version
                    )));
                }
            }
        }

        let GameSnapshot {
            version,
            hand,
            current_trick,
            current_player,
            variant,
            legal_card_ids,
            announce_flags,
            announcements,
            revealed,
        } = snapshot;
        let trick = Trick::from_cards(current_trick)?;
        if self.version.is_some()
            && variant != self.variant
            && !(self.trick.is_empty() && trick.is_empty())
        {
            warn!(from = ?self.variant, to = ?variant, "refusing variant change mid-trick");
            return Err(DomainError::validation(
                ValidationKind::InvalidSnapshot,
                format!(
                    "variant cannot change from {:?} to {:?} while a trick is in progress",
                    self.variant, variant
                ),
            ));
        }

        let mut events = Vec::new();
        if !self.pending.is_empty() {
            debug!(
                discarded = self.pending.len(),
                version, "snapshot supersedes pending intents"
            );
            // Without peer levels, optimistic announcements would outlive
            // their intents; unwind them newest first.
            if announcements.is_none() {
                for pending in self.pending.iter().rev() {
                    if let Some(Undo::Announce(transition)) = &pending.undo {
                        let side = transition.side;
                        if let Some(t) = self.announcements.reconcile(side, transition.from) {
                            debug!(?side, from = ?t.from, to = ?t.to, "announcement discarded");
                            events.push(EngineEvent::AnnouncementChanged {
                                side,
                                from: t.from,
                                to: t.to,
                            });
                        }
                    }
                }
            }
            self.pending.clear();
        }

        if self.hand != hand {
            events.push(EngineEvent::HandChanged { size: hand.len() });
        }
        if self.trick != trick {
            events.push(EngineEvent::TrickChanged {
                length: trick.len(),
            });
        }
        self.hand = hand;
        self.trick = trick;
        self.current_player = current_player;
        self.variant = variant;
        self.legal_card_ids = legal_card_ids;
        self.flags = announce_flags;

        if let Some(levels) = announcements {
            for (side, level) in [
                (AnnounceSide::Re, levels.re),
                (AnnounceSide::Kontra, levels.kontra),
            ] {
                if let Some(t) = self.announcements.reconcile(side, level) {
                    debug!(?side, from = ?t.from, to = ?t.to, "announcement reconciled");
                    events.push(EngineEvent::AnnouncementChanged {
                        side,
                        from: t.from,
                        to: t.to,
                    });
                }
            }
        }

        for reveal in revealed {
            match self.teams.reveal(reveal)? {
                RevealOutcome::Marked => events.push(EngineEvent::TeamRevealed {
                    player: reveal.player,
                    side: TeamSide::Re,
                }),
                RevealOutcome::MarkedAndResolved => {
                    events.push(EngineEvent::TeamRevealed {
                        player: reveal.player,
                        side: TeamSide::Re,
                    });
                    events.push(EngineEvent::TeamsResolved {
                        sides: self.teams.sides(),
                    });
                }
                RevealOutcome::AlreadyResolved | RevealOutcome::NoTeamInfo => {}
            }
        }

        self.version = Some(version);
        info!(
            version,
            ?variant,
            hand = self.hand.len(),
            trick = self.trick.len(),
            current_player,
            "snapshot applied"
        );
        events.push(EngineEvent::SnapshotApplied { version });
        self.publish(events);
        Ok(())
    }

    /// Feed the peer's answer to an intent back into the engine.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        response: PeerResponse,
    ) -> Result<Resolution, DomainError> {
        let Some(idx) = self.pending.iter().position(|p| p.ticket() == ticket) else {
            warn!(%ticket, "response for an intent that is no longer pending");
            return Err(DomainError::stale(format!(
                "intent {ticket} is no longer pending"
            )));
        };

        match response {
            PeerResponse::Accepted { snapshot } => {
                debug!(%ticket, version = snapshot.version, "intent accepted");
                self.apply_snapshot(snapshot)?;
                Ok(Resolution::Confirmed)
            }
            PeerResponse::Rejected { code, detail } => {
                warn!(%ticket, %code, %detail, "intent rejected by peer");
                let tickets = self.roll_back(idx, code);
                Ok(Resolution::RolledBack { code, tickets })
            }
        }
    }

    /// Undo the pending intent at `idx` plus any pending announcements that
    /// were stacked on top of it.
    fn roll_back(&mut self, idx: usize, code: ErrorCode) -> Vec<Ticket> {
        let pending = self.pending.remove(idx);
        let ticket = pending.ticket();
        let mut tickets = vec![ticket];
        let mut events = Vec::new();

        match pending.undo {
            Some(Undo::Play {
                card,
                hand_index,
                previous_player,
                legal_card_ids,
            }) => {
                if self.trick.take(&card.id).is_none() {
                    warn!(%ticket, card = %card.id, "rolled-back card missing from trick");
                }
                let at = hand_index.min(self.hand.len());
                self.hand.insert(at, card);
                self.current_player = previous_player;
                self.legal_card_ids = legal_card_ids;
                events.push(EngineEvent::HandChanged {
                    size: self.hand.len(),
                });
                events.push(EngineEvent::TrickChanged {
                    length: self.trick.len(),
                });
            }
            Some(Undo::Announce(transition)) => {
                let side = transition.side;
                let mut dependent = Vec::new();
                self.pending.retain(|p| {
                    let stacked = p.ticket() > ticket && p.announced_side() == Some(side);
                    if stacked {
                        dependent.push(p.ticket());
                    }
                    !stacked
                });
                if let Some(t) = self.announcements.reconcile(side, transition.from) {
                    events.push(EngineEvent::AnnouncementChanged {
                        side,
                        from: t.from,
                        to: t.to,
                    });
                }
                tickets.extend(dependent);
            }
            None => {}
        }

        for t in &tickets {
            debug!(ticket = %t, %code, "intent rolled back");
            events.push(EngineEvent::IntentRolledBack { ticket: *t, code });
        }
        self.publish(events);
        tickets
    }

    /// Forget the current game. Configuration and subscribers are kept;
    /// outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.variant = GameVariant::default();
        self.hand.clear();
        self.trick.clear();
        self.current_player = 0;
        self.legal_card_ids.clear();
        self.flags = AnnounceFlags::default();
        self.announcements.reset();
        self.teams.reset();
        self.version = None;
        self.pending.clear();
        info!("engine reset");
        self.publish(vec![EngineEvent::Reset]);
    }

    // ---- observers -------------------------------------------------------

    pub fn subscribe<O>(&mut self, observer: O) -> Uuid
    where
        O: EngineObserver + 'static,
    {
        self.observers.register(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, token: Uuid) -> bool {
        self.observers.unregister(token)
    }

    fn publish(&mut self, events: Vec<EngineEvent>) {
        for event in &events {
            self.observers.broadcast(event);
        }
    }
}
