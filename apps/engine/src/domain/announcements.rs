//! Escalating announcement chain, one track per side.
//!
//! `None → Base (Re/Contra) → No90 → No60 → No30 → Black`. A side moves one
//! step at a time and only while the peer reports the matching
//! precondition flag as true; the deadline logic behind the flags lives
//! with the peer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementLevel {
    #[default]
    None,
    /// "Re" for the RE side, "Contra" for the KONTRA side.
    Base,
    No90,
    No60,
    No30,
    Black,
}

impl AnnouncementLevel {
    pub const CHAIN: [AnnouncementLevel; 6] = [
        AnnouncementLevel::None,
        AnnouncementLevel::Base,
        AnnouncementLevel::No90,
        AnnouncementLevel::No60,
        AnnouncementLevel::No30,
        AnnouncementLevel::Black,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            AnnouncementLevel::None => Some(AnnouncementLevel::Base),
            AnnouncementLevel::Base => Some(AnnouncementLevel::No90),
            AnnouncementLevel::No90 => Some(AnnouncementLevel::No60),
            AnnouncementLevel::No60 => Some(AnnouncementLevel::No30),
            AnnouncementLevel::No30 => Some(AnnouncementLevel::Black),
            AnnouncementLevel::Black => None,
        }
    }
}

/// The side an announcement is made for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnounceSide {
    Re,
    Kontra,
}

/// Precondition flags computed by the peer, one per level.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnounceFlags {
    pub re: bool,
    pub contra: bool,
    pub no90: bool,
    pub no60: bool,
    pub no30: bool,
    pub black: bool,
}

impl AnnounceFlags {
    pub fn permits(&self, side: AnnounceSide, level: AnnouncementLevel) -> bool {
        match level {
            AnnouncementLevel::None => false,
            AnnouncementLevel::Base => match side {
                AnnounceSide::Re => self.re,
                AnnounceSide::Kontra => self.contra,
            },
            AnnouncementLevel::No90 => self.no90,
            AnnouncementLevel::No60 => self.no60,
            AnnouncementLevel::No30 => self.no30,
            AnnouncementLevel::Black => self.black,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub side: AnnounceSide,
    pub from: AnnouncementLevel,
    pub to: AnnouncementLevel,
}

/// Authoritative levels as reported by the peer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementLevels {
    pub re: AnnouncementLevel,
    pub kontra: AnnouncementLevel,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct AnnouncementTracks {
    levels: AnnouncementLevels,
}

impl AnnouncementTracks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, side: AnnounceSide) -> AnnouncementLevel {
        match side {
            AnnounceSide::Re => self.levels.re,
            AnnounceSide::Kontra => self.levels.kontra,
        }
    }

    pub fn levels(&self) -> AnnouncementLevels {
        self.levels
    }

    fn slot(&mut self, side: AnnounceSide) -> &mut AnnouncementLevel {
        match side {
            AnnounceSide::Re => &mut self.levels.re,
            AnnounceSide::Kontra => &mut self.levels.kontra,
        }
    }

    /// Check a request without changing state.
    pub fn check(
        &self,
        side: AnnounceSide,
        target: AnnouncementLevel,
        flags: &AnnounceFlags,
    ) -> Result<Transition, DomainError> {
        let current = self.level(side);
        if current.next() != Some(target) {
            return Err(DomainError::validation(
                ValidationKind::OutOfOrder,
                format!("{side:?} is at {current:?}; {target:?} is not the next level"),
            ));
        }
        if !flags.permits(side, target) {
            return Err(DomainError::validation(
                ValidationKind::NotPermitted,
                format!("{target:?} is not currently permitted for {side:?}"),
            ));
        }
        Ok(Transition {
            side,
            from: current,
            to: target,
        })
    }

    /// Advance `side` to `target` if it is the next level and permitted.
    pub fn request(
        &mut self,
        side: AnnounceSide,
        target: AnnouncementLevel,
        flags: &AnnounceFlags,
    ) -> Result<Transition, DomainError> {
        let transition = self.check(side, target, flags)?;
        *self.slot(side) = target;
        debug!(?side, from = ?transition.from, to = ?target, "announcement advanced");
        Ok(transition)
    }

    /// Legal next levels for `side` (at most one, since levels cannot be skipped).
    pub fn options(&self, side: AnnounceSide, flags: &AnnounceFlags) -> Vec<AnnouncementLevel> {
        self.level(side)
            .next()
            .filter(|next| flags.permits(side, *next))
            .into_iter()
            .collect()
    }

    /// Overwrite with the peer's level. Returns the transition if it differed.
    pub fn reconcile(
        &mut self,
        side: AnnounceSide,
        authoritative: AnnouncementLevel,
    ) -> Option<Transition> {
        let slot = self.slot(side);
        let from = *slot;
        if from == authoritative {
            return None;
        }
        *slot = authoritative;
        Some(Transition {
            side,
            from,
            to: authoritative,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
