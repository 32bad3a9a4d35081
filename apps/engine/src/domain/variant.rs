//! Game variants and the single variant-indexed rule table.
//!
//! Both trump classification and display ordering read from
//! [`VariantRules`], so there is exactly one place that says which cards
//! are trump under which variant.

use serde::{Deserialize, Serialize};

use super::cards_types::{Rank, Suit};

/// The contract played for one game. Chosen before the first trick and
/// fixed until the game ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameVariant {
    #[default]
    Normal,
    Fleshless,
    JackSolo,
    QueenSolo,
    KingSolo,
    TrumpSolo,
    Hochzeit,
}

impl GameVariant {
    pub const ALL: [GameVariant; 7] = [
        GameVariant::Normal,
        GameVariant::Fleshless,
        GameVariant::JackSolo,
        GameVariant::QueenSolo,
        GameVariant::KingSolo,
        GameVariant::TrumpSolo,
        GameVariant::Hochzeit,
    ];

    pub fn rules(self) -> &'static VariantRules {
        match self {
            GameVariant::Normal | GameVariant::Hochzeit => &NORMAL_RULES,
            GameVariant::Fleshless => &FLESHLESS_RULES,
            GameVariant::JackSolo => &JACK_SOLO_RULES,
            GameVariant::QueenSolo => &QUEEN_SOLO_RULES,
            GameVariant::KingSolo => &KING_SOLO_RULES,
            GameVariant::TrumpSolo => &TRUMP_SOLO_RULES,
        }
    }
}

/// Trump layout of a variant.
#[derive(Debug, PartialEq, Eq)]
pub struct VariantRules {
    /// Ten of hearts is trump and outranks every other trump.
    pub heart_ten_trump: bool,
    /// Ranks that are trump in every suit, strongest rank first.
    pub trump_courts: &'static [Rank],
    /// Suit whose remaining cards are trump.
    pub trump_suit: Option<Suit>,
}

static NORMAL_RULES: VariantRules = VariantRules {
    heart_ten_trump: true,
    trump_courts: &[Rank::Queen, Rank::Jack],
    trump_suit: Some(Suit::Diamonds),
};

static FLESHLESS_RULES: VariantRules = VariantRules {
    heart_ten_trump: false,
    trump_courts: &[Rank::Queen, Rank::Jack],
    trump_suit: None,
};

static JACK_SOLO_RULES: VariantRules = VariantRules {
    heart_ten_trump: false,
    trump_courts: &[Rank::Jack],
    trump_suit: None,
};

static QUEEN_SOLO_RULES: VariantRules = VariantRules {
    heart_ten_trump: false,
    trump_courts: &[Rank::Queen],
    trump_suit: None,
};

static KING_SOLO_RULES: VariantRules = VariantRules {
    heart_ten_trump: false,
    trump_courts: &[Rank::King],
    trump_suit: None,
};

static TRUMP_SOLO_RULES: VariantRules = VariantRules {
    heart_ten_trump: false,
    trump_courts: &[Rank::Queen, Rank::Jack],
    trump_suit: Some(Suit::Diamonds),
};

impl VariantRules {
    /// Position of `rank` among the trump courts, strongest first.
    pub fn court_tier(&self, rank: Rank) -> Option<u8> {
        self.trump_courts
            .iter()
            .position(|&r| r == rank)
            .map(|i| i as u8)
    }
}
