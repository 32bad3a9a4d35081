//! Card parsing from compact tokens (e.g., "QC", "TH", "9D")

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Face, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl Rank {
    pub const fn token(self) -> char {
        match self {
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl Suit {
    pub const fn token(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }
}

impl FromStr for Face {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_error(s));
        };
        let rank = match rank_ch {
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(parse_error(s)),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            _ => return Err(parse_error(s)),
        };
        Ok(Face { suit, rank })
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}

impl Card {
    /// Build a card from a face token and an explicit id.
    pub fn from_token(token: &str, id: impl Into<String>) -> Result<Self, DomainError> {
        let face: Face = token.parse()?;
        Ok(Card::new(id, face.suit, face.rank))
    }
}

/// Parse face tokens into cards with generated ids of the form
/// `"<token>-<copy>"`, so a repeated token yields the second physical copy.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut copies: HashMap<Face, u8> = HashMap::new();
    tokens
        .into_iter()
        .map(|s| {
            let face: Face = s.as_ref().parse()?;
            let copy = copies.entry(face).or_insert(0);
            let id = format!("{face}-{copy}");
            *copy += 1;
            Ok(Card::new(id, face.suit, face.rank))
        })
        .collect()
}
