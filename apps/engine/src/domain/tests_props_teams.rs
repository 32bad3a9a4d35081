//! Property tests for team inference convergence.

use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude, RevealEvent, TeamSide, TeamTracker};

/// Two distinct RE players.
fn re_pair() -> impl Strategy<Value = (u8, u8)> {
    (test_gens::player_id(), test_gens::player_id()).prop_filter("distinct", |(a, b)| a != b)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any delivery order of two RE reveals (with repeats and noise)
    /// converges to the same 2 RE / 2 KONTRA partition.
    #[test]
    fn prop_partition_is_order_independent(
        (a, b) in re_pair(),
        noise in prop::collection::vec((test_gens::player_id(), any::<bool>()), 0..6),
        flip in any::<bool>(),
    ) {
        let mut events: Vec<RevealEvent> = noise
            .into_iter()
            .filter(|(p, q)| !*q || *p == a || *p == b)
            .map(|(player, is_queen_of_clubs)| RevealEvent { player, is_queen_of_clubs })
            .collect();
        let (first, second) = if flip { (b, a) } else { (a, b) };
        events.push(RevealEvent::queen_of_clubs(first));
        events.push(RevealEvent::queen_of_clubs(second));
        events.push(RevealEvent::queen_of_clubs(first));

        let mut forward = TeamTracker::new();
        for ev in &events {
            forward.reveal(*ev).unwrap();
        }
        let mut backward = TeamTracker::new();
        for ev in events.iter().rev() {
            backward.reveal(*ev).unwrap();
        }

        prop_assert_eq!(forward.sides(), backward.sides());
        let sides = forward.sides();
        prop_assert_eq!(sides.iter().filter(|s| **s == TeamSide::Re).count(), 2);
        prop_assert_eq!(sides.iter().filter(|s| **s == TeamSide::Kontra).count(), 2);
        prop_assert_eq!(sides[a as usize], TeamSide::Re);
        prop_assert_eq!(sides[b as usize], TeamSide::Re);
        prop_assert_eq!(forward.re_revealed(), 2);
    }

    /// Property: a single RE reveal never resolves anyone else.
    #[test]
    fn prop_one_reveal_leaves_others_unknown(p in test_gens::player_id()) {
        let mut t = TeamTracker::new();
        t.reveal(RevealEvent::queen_of_clubs(p)).unwrap();
        for (i, side) in t.sides().iter().enumerate() {
            let expected = if i == p as usize { TeamSide::Re } else { TeamSide::Unknown };
            prop_assert_eq!(*side, expected);
        }
    }
}
