//! Public RE/KONTRA team inference from reveal events.
//!
//! Two players are RE in every game this tracker is used for. Each RE
//! reveal marks one player; once two are known the remaining players are
//! closed to KONTRA. Sides only ever move away from `Unknown`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::rules::{PLAYERS, RE_PLAYERS};
use crate::domain::state::{require_seat, PlayerId};
use crate::domain::Card;
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamSide {
    Re,
    Kontra,
    #[default]
    Unknown,
}

/// A publicly observable play that may disclose team membership.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RevealEvent {
    pub player: PlayerId,
    pub is_queen_of_clubs: bool,
}

impl RevealEvent {
    pub fn queen_of_clubs(player: PlayerId) -> Self {
        Self {
            player,
            is_queen_of_clubs: true,
        }
    }

    /// The reveal carried by `player` placing `card` in a trick.
    pub fn from_play(player: PlayerId, card: &Card) -> Self {
        Self {
            player,
            is_queen_of_clubs: card.is_queen_of_clubs(),
        }
    }
}

/// What a reveal changed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RevealOutcome {
    /// The player is now known RE.
    Marked,
    /// The player is now known RE and the remaining players were closed to KONTRA.
    MarkedAndResolved,
    /// The player's side was already known; nothing changed.
    AlreadyResolved,
    /// The event carries no team information.
    NoTeamInfo,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TeamTracker {
    sides: [TeamSide; PLAYERS],
    re_revealed: usize,
}

impl TeamTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side_of(&self, player: PlayerId) -> Result<TeamSide, DomainError> {
        let player = require_seat(player)?;
        Ok(self.sides[player as usize])
    }

    pub fn sides(&self) -> [TeamSide; PLAYERS] {
        self.sides
    }

    pub fn re_revealed(&self) -> usize {
        self.re_revealed
    }

    /// Both teams are fully known.
    pub fn is_resolved(&self) -> bool {
        self.sides.iter().all(|s| *s != TeamSide::Unknown)
    }

    pub fn reveal(&mut self, event: RevealEvent) -> Result<RevealOutcome, DomainError> {
        let player = require_seat(event.player)?;
        if !event.is_queen_of_clubs {
            return Ok(RevealOutcome::NoTeamInfo);
        }

        match self.sides[player as usize] {
            TeamSide::Re => return Ok(RevealOutcome::AlreadyResolved),
            TeamSide::Kontra => {
                warn!(player, "RE reveal for a player already closed to KONTRA; ignored");
                return Ok(RevealOutcome::AlreadyResolved);
            }
            TeamSide::Unknown => {}
        }

        self.sides[player as usize] = TeamSide::Re;
        self.re_revealed += 1;
        debug!(player, re_revealed = self.re_revealed, "player revealed RE");

        if self.re_revealed == RE_PLAYERS {
            self.close_remaining_to_kontra();
            return Ok(RevealOutcome::MarkedAndResolved);
        }
        Ok(RevealOutcome::Marked)
    }

    fn close_remaining_to_kontra(&mut self) {
        for (player, side) in self.sides.iter_mut().enumerate() {
            if *side == TeamSide::Unknown {
                *side = TeamSide::Kontra;
                debug!(player, "closed to KONTRA");
            }
        }
    }

    /// New game: every player back to unknown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
