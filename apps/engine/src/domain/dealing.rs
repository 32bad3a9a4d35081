//! Deck construction and deterministic dealing.
//!
//! The authoritative peer deals real games; these helpers build decks for
//! demos and tests.

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::{Card, Face};

/// The 48-card deck: every face twice, ids `"<face>-0"` and `"<face>-1"`.
pub fn doppelkopf_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for face in Face::all() {
        for copy in 0..2 {
            deck.push(Card::new(format!("{face}-{copy}"), face.suit, face.rank));
        }
    }
    deck
}

/// SplitMix64: small, well-distributed, deterministic.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Rejection sampling keeps the range free of modulo bias.
        let limit = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = SplitMix64::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_range(i + 1);
        deck.swap(i, j);
    }
}

/// Shuffle a fresh deck with `seed` and deal twelve cards to each seat.
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = doppelkopf_deck();
    shuffle_with_seed(&mut deck, seed);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        hands[i / HAND_SIZE].push(card);
    }
    hands
}
