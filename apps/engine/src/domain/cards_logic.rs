//! Card game logic: trump classification, display ordering, and the
//! separate trick-strength comparator.

use std::cmp::Ordering;

use super::cards_types::{Card, Face, Rank};
use super::variant::GameVariant;

impl From<&Card> for Face {
    fn from(card: &Card) -> Self {
        card.face()
    }
}

/// Whether a card is trump under `variant`.
pub fn is_trump<F: Into<Face>>(card: F, variant: GameVariant) -> bool {
    let face = card.into();
    let rules = variant.rules();
    (rules.heart_ten_trump && face == Face::TEN_OF_HEARTS)
        || rules.court_tier(face.rank).is_some()
        || rules.trump_suit == Some(face.suit)
}

/// Absent cards are never trump.
pub fn is_trump_opt(card: Option<&Card>, variant: GameVariant) -> bool {
    card.is_some_and(|c| is_trump(c, variant))
}

/// Sort key for conventional hand display: lower keys come first.
///
/// Trumps form the first block (heart ten, then trump courts by tier and
/// suit, then plain trump-suit cards by rank); non-trumps follow grouped
/// by suit, then by rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayKey {
    block: u8,
    primary: u8,
    secondary: u8,
}

impl DisplayKey {
    pub fn is_trump(&self) -> bool {
        self.block == 0
    }
}

pub fn display_key<F: Into<Face>>(card: F, variant: GameVariant) -> DisplayKey {
    let face = card.into();
    let rules = variant.rules();

    if rules.heart_ten_trump && face == Face::TEN_OF_HEARTS {
        return DisplayKey {
            block: 0,
            primary: 0,
            secondary: 0,
        };
    }
    if let Some(tier) = rules.court_tier(face.rank) {
        return DisplayKey {
            block: 0,
            primary: 1 + tier,
            secondary: face.suit.order(),
        };
    }
    if rules.trump_suit == Some(face.suit) {
        return DisplayKey {
            block: 0,
            primary: 1 + rules.trump_courts.len() as u8,
            secondary: face.rank.order(),
        };
    }
    DisplayKey {
        block: 1,
        primary: face.suit.order(),
        secondary: face.rank.order(),
    }
}

/// Display comparator. Not trick strength: see [`card_beats`].
pub fn display_cmp(a: &Card, b: &Card, variant: GameVariant) -> Ordering {
    display_key(a, variant).cmp(&display_key(b, variant))
}

/// Whether `challenger` takes the trick away from `holder`, the card
/// currently winning it, given the card that was led.
///
/// Identical faces never beat each other: the earlier card keeps the trick.
pub fn card_beats(challenger: &Card, holder: &Card, led: &Card, variant: GameVariant) -> bool {
    let challenger_trump = is_trump(challenger, variant);
    let holder_trump = is_trump(holder, variant);

    match (challenger_trump, holder_trump) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => display_key(challenger, variant) < display_key(holder, variant),
        (false, false) => {
            if is_trump(led, variant) {
                // Trump was led and neither card is trump: neither follows.
                return false;
            }
            let challenger_follows = challenger.suit == led.suit;
            let holder_follows = holder.suit == led.suit;
            match (challenger_follows, holder_follows) {
                (true, false) => true,
                (false, _) => false,
                (true, true) => stronger_plain_rank(challenger.rank, holder.rank),
            }
        }
    }
}

fn stronger_plain_rank(a: Rank, b: Rank) -> bool {
    a.order() < b.order()
}

/// Index of the winning card of a trick given in play order.
pub fn trick_winner(plays: &[Card], variant: GameVariant) -> Option<usize> {
    let led = plays.first()?;
    let mut best = 0usize;
    for (i, card) in plays.iter().enumerate().skip(1) {
        if card_beats(card, &plays[best], led, variant) {
            best = i;
        }
    }
    Some(best)
}
