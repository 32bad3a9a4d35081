//! Core card-related types: Card, Face, Rank, Suit

use serde::{Deserialize, Serialize};

/// Declaration order is the conventional suit order used for display
/// grouping and same-rank tie breaks: clubs, spades, hearts, diamonds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Position in the clubs < spades < hearts < diamonds order.
    pub const fn order(self) -> u8 {
        self as u8
    }
}

/// Ranks present in a Doppelkopf deck (with nines).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position in the ace < ten < king < queen < jack < nine order.
    ///
    /// Lower means displayed earlier and, inside a followed suit, stronger.
    pub const fn order(self) -> u8 {
        match self {
            Rank::Ace => 0,
            Rank::Ten => 1,
            Rank::King => 2,
            Rank::Queen => 3,
            Rank::Jack => 4,
            Rank::Nine => 5,
        }
    }
}

/// One of the 24 distinct card kinds; every face exists twice in the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Face {
    pub suit: Suit,
    pub rank: Rank,
}

impl Face {
    pub const QUEEN_OF_CLUBS: Face = Face::new(Suit::Clubs, Rank::Queen);
    pub const TEN_OF_HEARTS: Face = Face::new(Suit::Hearts, Rank::Ten);

    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// All 24 faces, suit-major in clubs..diamonds order.
    pub fn all() -> impl Iterator<Item = Face> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Face { suit, rank }))
    }
}

/// A physical card. `id` tells the two copies of a face apart and never
/// changes once dealt.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(id: impl Into<String>, suit: Suit, rank: Rank) -> Self {
        Self {
            id: id.into(),
            suit,
            rank,
        }
    }

    pub fn face(&self) -> Face {
        Face::new(self.suit, self.rank)
    }

    pub fn is_queen_of_clubs(&self) -> bool {
        self.face() == Face::QUEEN_OF_CLUBS
    }
}
