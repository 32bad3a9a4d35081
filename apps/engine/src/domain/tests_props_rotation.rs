//! Property tests for trick seat rotation.

use proptest::prelude::*;

use crate::domain::state::nth_from;
use crate::domain::tricks::seat_views;
use crate::domain::{test_gens, test_prelude, Trick, TrickRotation};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: starting player plus position round-trips to the player.
    #[test]
    fn prop_position_round_trips(
        current in test_gens::player_id(),
        len in 0usize..=4,
        player in test_gens::player_id(),
    ) {
        let r = TrickRotation::new(current, len).unwrap();
        let pos = r.position_of(player);
        prop_assert!(pos < 4);
        prop_assert_eq!(nth_from(r.starting_player(), pos), player);
        prop_assert_eq!(r.player_at(pos), player);
    }

    /// Property: exactly `len` seats hold a card, and the current player's
    /// seat is free unless the trick is complete.
    #[test]
    fn prop_card_count_matches_length(
        current in test_gens::player_id(),
        cards in (0usize..=4).prop_flat_map(test_gens::unique_cards),
    ) {
        let len = cards.len();
        let trick = Trick::from_cards(cards).unwrap();
        let r = TrickRotation::new(current, len).unwrap();
        let seats = seat_views(&trick, &r);
        prop_assert_eq!(seats.iter().filter(|s| s.has_card()).count(), len);
        prop_assert_eq!(seats[current as usize].has_card(), len == 4);
        prop_assert_eq!(r.next_player(), (current + 1) % 4);
    }
}
