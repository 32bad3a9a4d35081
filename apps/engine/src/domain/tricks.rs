//! Trick seat rotation: which player played which position, and who acts
//! next.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{PLAYERS, TRICK_SIZE};
use crate::domain::state::{
    next_player, nth_from, require_seat, seat_distance, seat_offset, PlayerId,
};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Rotation state of the trick in progress.
///
/// `current_player` is the player whose turn it is; `trick_length` is the
/// number of cards already placed. The leader is recovered from those two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrickRotation {
    current_player: PlayerId,
    trick_length: u8,
}

impl TrickRotation {
    pub fn new(current_player: PlayerId, trick_length: usize) -> Result<Self, DomainError> {
        let current_player = require_seat(current_player)?;
        if trick_length > TRICK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidSnapshot,
                format!("trick holds {trick_length} cards, at most {TRICK_SIZE} allowed"),
            ));
        }
        Ok(Self {
            current_player,
            trick_length: trick_length as u8,
        })
    }

    /// Rotation for a trick whose seat and length were already validated.
    pub(crate) fn for_trick(current_player: PlayerId, trick: &Trick) -> Self {
        Self {
            current_player,
            trick_length: trick.len() as u8,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn trick_length(&self) -> usize {
        self.trick_length as usize
    }

    /// The player who led the current trick.
    pub fn starting_player(&self) -> PlayerId {
        seat_offset(self.current_player, -(self.trick_length as i8))
    }

    /// 0-based play order of `player` within the current trick.
    pub fn position_of(&self, player: PlayerId) -> PlayerId {
        seat_distance(self.starting_player(), player)
    }

    /// Whether `player` has already placed a card in this trick.
    pub fn has_played(&self, player: PlayerId) -> bool {
        self.trick_length > self.position_of(player)
    }

    /// Player at trick index `position`.
    pub fn player_at(&self, position: u8) -> PlayerId {
        nth_from(self.starting_player(), position)
    }

    pub fn next_player(&self) -> PlayerId {
        next_player(self.current_player)
    }
}

/// Cards of the trick in progress, in play order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    cards: Vec<Card>,
}

impl Trick {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(TRICK_SIZE),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DomainError> {
        if cards.len() > TRICK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidSnapshot,
                format!("trick holds {} cards, at most {TRICK_SIZE} allowed", cards.len()),
            ));
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == TRICK_SIZE
    }

    pub fn push(&mut self, card: Card) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::InvalidCard,
                "trick already holds four cards",
            ));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the card with `card_id`, keeping the order of the rest.
    pub fn take(&mut self, card_id: &str) -> Option<Card> {
        let idx = self.cards.iter().position(|c| c.id == card_id)?;
        Some(self.cards.remove(idx))
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// `(player, card)` pairs in play order.
    pub fn plays(&self, rotation: &TrickRotation) -> Vec<(PlayerId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (rotation.player_at(i as u8), c))
            .collect()
    }
}

/// What one seat shows for the trick in progress.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub position: u8,
    pub card: Option<Card>,
}

impl SeatView {
    pub fn has_card(&self) -> bool {
        self.card.is_some()
    }
}

pub fn seat_view(
    trick: &Trick,
    rotation: &TrickRotation,
    player: PlayerId,
) -> Result<SeatView, DomainError> {
    let player = require_seat(player)?;
    Ok(view_for(trick, rotation, player))
}

/// All four seats in seat order, reported even when the trick is empty.
pub fn seat_views(trick: &Trick, rotation: &TrickRotation) -> [SeatView; PLAYERS] {
    [0u8, 1, 2, 3].map(|player| view_for(trick, rotation, player))
}

fn view_for(trick: &Trick, rotation: &TrickRotation, player: PlayerId) -> SeatView {
    let position = rotation.position_of(player);
    let card = if rotation.has_played(player) {
        trick.cards.get(position as usize).cloned()
    } else {
        None
    };
    SeatView {
        player,
        position,
        card,
    }
}
