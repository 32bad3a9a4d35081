//! Domain layer: pure rules logic and the types it works on.

pub mod announcements;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod hand_sort;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod teams;
pub mod tricks;
pub mod variant;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_ordering;
#[cfg(test)]
mod tests_props_ordering;
#[cfg(test)]
mod tests_props_rotation;
#[cfg(test)]
mod tests_props_teams;
#[cfg(test)]
mod tests_props_trick_strength;
#[cfg(test)]
mod tests_trump_table;

// Re-exports for ergonomics
pub use announcements::{
    AnnounceFlags, AnnounceSide, AnnouncementLevel, AnnouncementLevels, AnnouncementTracks,
    Transition,
};
pub use cards_logic::{card_beats, display_cmp, display_key, is_trump, is_trump_opt, trick_winner};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Face, Rank, Suit};
pub use dealing::{deal_hands, doppelkopf_deck};
pub use hand_sort::sort_hand;
pub use snapshot::{GameSnapshot, PeerResponse};
pub use state::PlayerId;
pub use teams::{RevealEvent, RevealOutcome, TeamSide, TeamTracker};
pub use tricks::{SeatView, Trick, TrickRotation};
pub use variant::GameVariant;
