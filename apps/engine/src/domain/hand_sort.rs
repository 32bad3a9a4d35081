//! Canonical hand order for display and selection.

use super::cards_logic::display_key;
use super::cards_types::Card;
use super::variant::GameVariant;

/// Sort cards into display order without touching the input.
///
/// The sort is stable: the two physical copies of a face keep their
/// relative order, so re-rendering never swaps them.
pub fn sort_hand(cards: &[Card], variant: GameVariant) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| display_key(c, variant));
    sorted
}

/// Whether `cards` is already in display order.
pub fn is_sorted(cards: &[Card], variant: GameVariant) -> bool {
    cards
        .windows(2)
        .all(|w| display_key(&w[0], variant) <= display_key(&w[1], variant))
}
