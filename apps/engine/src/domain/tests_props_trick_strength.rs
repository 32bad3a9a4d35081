//! Property tests for the trick-strength comparator, kept apart from
//! display ordering.

use proptest::prelude::*;

use crate::domain::{card_beats, is_trump, test_gens, test_prelude, trick_winner, Face, GameVariant};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: no card beats itself and two cards never beat each other.
    #[test]
    fn prop_beats_is_asymmetric(
        cards in test_gens::unique_cards(3),
        variant in test_gens::variant(),
    ) {
        let (a, b, led) = (&cards[0], &cards[1], &cards[2]);
        prop_assert!(!card_beats(a, a, led, variant));
        prop_assert!(!(card_beats(a, b, led, variant) && card_beats(b, a, led, variant)));
    }

    /// Property: a trump always beats a non-trump, whatever was led.
    #[test]
    fn prop_trump_beats_plain(
        cards in test_gens::unique_cards(3),
        variant in test_gens::variant(),
    ) {
        let (a, b, led) = (&cards[0], &cards[1], &cards[2]);
        if is_trump(a, variant) && !is_trump(b, variant) {
            prop_assert!(card_beats(a, b, led, variant));
            prop_assert!(!card_beats(b, a, led, variant));
        }
    }

    /// Property: the winner is never beaten by any other card of the trick.
    #[test]
    fn prop_winner_is_unbeaten(
        plays in test_gens::unique_cards(4),
        variant in test_gens::variant(),
    ) {
        let w = trick_winner(&plays, variant).unwrap();
        for (i, card) in plays.iter().enumerate() {
            if i > w {
                prop_assert!(!card_beats(card, &plays[w], &plays[0], variant));
            }
        }
    }
}

#[test]
fn heart_ten_beats_every_other_trump_in_normal_game() {
    let th = crate::domain::Card::from_token("TH", "th").unwrap();
    for face in Face::all().filter(|f| *f != Face::TEN_OF_HEARTS) {
        let other = crate::domain::Card::new("x", face.suit, face.rank);
        if is_trump(&other, GameVariant::Normal) {
            assert!(card_beats(&th, &other, &other, GameVariant::Normal), "{face}");
        }
    }
}
