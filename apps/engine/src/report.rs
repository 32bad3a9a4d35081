//! Read-only view of an engine, as printed by `doko-inspect`.

use std::fmt::Write as _;

use serde::Serialize;

use crate::domain::announcements::AnnouncementLevels;
use crate::domain::rules::PLAYERS;
use crate::domain::{AnnounceSide, AnnouncementLevel, GameVariant, PlayerId, SeatView, TeamSide};
use crate::engine::Engine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandEntry {
    pub id: String,
    pub face: String,
    pub trump: bool,
    pub legal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementOptions {
    pub re: Vec<AnnouncementLevel>,
    pub kontra: Vec<AnnouncementLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub version: Option<u64>,
    pub variant: GameVariant,
    pub current_player: PlayerId,
    pub hand: Vec<HandEntry>,
    pub seats: [SeatView; PLAYERS],
    pub trick_holder: Option<PlayerId>,
    pub teams: [TeamSide; PLAYERS],
    pub announcements: AnnouncementLevels,
    pub options: AnnouncementOptions,
}

impl Report {
    pub fn from_engine(engine: &Engine) -> Self {
        let legal = engine.legal_card_ids();
        let hand = engine
            .sorted_hand()
            .into_iter()
            .map(|card| HandEntry {
                trump: engine.classify_trump(&card),
                legal: legal.iter().any(|id| *id == card.id),
                face: card.face().to_string(),
                id: card.id,
            })
            .collect();
        Self {
            version: engine.version(),
            variant: engine.variant(),
            current_player: engine.current_player(),
            hand,
            seats: engine.trick_seats(),
            trick_holder: engine.trick_holder(),
            teams: engine.teams(),
            announcements: engine.announcement_levels(),
            options: AnnouncementOptions {
                re: engine.announcement_options(AnnounceSide::Re),
                kontra: engine.announcement_options(AnnounceSide::Kontra),
            },
        }
    }

    /// Human-readable multi-line rendering. Trumps are marked with `*`,
    /// cards outside the legal set are bracketed.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let version = self
            .version
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        let _ = writeln!(
            out,
            "variant {:?}  version {version}  to play: seat {}",
            self.variant, self.current_player
        );

        let cards: Vec<String> = self
            .hand
            .iter()
            .map(|e| {
                let mark = if e.trump { "*" } else { "" };
                if e.legal {
                    format!("{}{mark}", e.face)
                } else {
                    format!("[{}{mark}]", e.face)
                }
            })
            .collect();
        let _ = writeln!(out, "hand: {}", cards.join(" "));

        for seat in &self.seats {
            let card = seat
                .card
                .as_ref()
                .map_or_else(|| "--".to_string(), |c| c.face().to_string());
            let holder = if self.trick_holder == Some(seat.player) {
                " (holds)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "seat {}  pos {}  {card}  {:?}{holder}",
                seat.player, seat.position, self.teams[seat.player as usize]
            );
        }

        let _ = writeln!(
            out,
            "announced: re {:?}, kontra {:?}",
            self.announcements.re, self.announcements.kontra
        );
        let _ = writeln!(
            out,
            "options: re {:?}, kontra {:?}",
            self.options.re, self.options.kontra
        );
        out
    }
}
