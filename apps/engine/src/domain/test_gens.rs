// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::{doppelkopf_deck, Card, Face, GameVariant, PlayerId, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn face() -> impl Strategy<Value = Face> {
    (suit(), rank()).prop_map(|(suit, rank)| Face { suit, rank })
}

pub fn variant() -> impl Strategy<Value = GameVariant> {
    prop::sample::select(GameVariant::ALL.to_vec())
}

pub fn player_id() -> impl Strategy<Value = PlayerId> {
    0u8..=3u8
}

/// A card with a generated id.
pub fn card() -> impl Strategy<Value = Card> {
    (face(), 0u8..2).prop_map(|(f, copy)| Card::new(format!("{f}-{copy}"), f.suit, f.rank))
}

/// `count` distinct physical cards drawn from the 48-card deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(doppelkopf_deck())
        .prop_shuffle()
        .prop_map(move |mut deck| {
            deck.truncate(count);
            deck
        })
}

/// A hand of 0..=12 distinct cards.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (0usize..=12).prop_flat_map(unique_cards)
}
