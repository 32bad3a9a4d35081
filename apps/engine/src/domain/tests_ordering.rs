//! Display order scenarios per variant.

use crate::domain::{sort_hand, try_parse_cards, Card, GameVariant};

fn tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.face().to_string()).collect()
}

fn sorted_tokens(input: &[&str], variant: GameVariant) -> Vec<String> {
    let hand = try_parse_cards(input).expect("hardcoded valid card tokens");
    tokens(&sort_hand(&hand, variant))
}

#[test]
fn normal_game_small_hand() {
    // Heart ten leads the trump block, then queens, jacks, diamonds; plain suits after.
    assert_eq!(
        sorted_tokens(&["9C", "QC", "AD", "TH", "JS"], GameVariant::Normal),
        vec!["TH", "QC", "JS", "AD", "9C"]
    );
}

#[test]
fn normal_game_full_trump_block() {
    let all_trumps = [
        "9D", "KD", "TD", "AD", "JD", "JH", "JS", "JC", "QD", "QH", "QS", "QC", "TH",
    ];
    assert_eq!(
        sorted_tokens(&all_trumps, GameVariant::Normal),
        vec!["TH", "QC", "QS", "QH", "QD", "JC", "JS", "JH", "JD", "AD", "TD", "KD", "9D"]
    );
}

#[test]
fn non_trumps_group_by_suit_then_rank() {
    assert_eq!(
        sorted_tokens(&["9H", "AH", "KS", "TC", "AS", "9C"], GameVariant::Normal),
        vec!["TC", "9C", "AS", "KS", "AH", "9H"]
    );
}

#[test]
fn jack_solo_puts_plain_queens_back_in_suit() {
    assert_eq!(
        sorted_tokens(&["QC", "JD", "AC", "TH", "JC", "AD"], GameVariant::JackSolo),
        vec!["JC", "JD", "AC", "QC", "TH", "AD"]
    );
}

#[test]
fn king_solo_kings_first() {
    assert_eq!(
        sorted_tokens(&["QC", "KH", "AD", "KC", "JS"], GameVariant::KingSolo),
        vec!["KC", "KH", "QC", "JS", "AD"]
    );
}

#[test]
fn fleshless_has_no_trump_suit() {
    assert_eq!(
        sorted_tokens(&["AD", "JC", "TH", "QD", "9D"], GameVariant::Fleshless),
        vec!["QD", "JC", "TH", "AD", "9D"]
    );
}

#[test]
fn trump_solo_heart_ten_is_plain() {
    assert_eq!(
        sorted_tokens(&["TH", "9D", "QS", "AH"], GameVariant::TrumpSolo),
        vec!["QS", "9D", "AH", "TH"]
    );
}

#[test]
fn hochzeit_duplicate_queens_keep_their_order() {
    let hand = vec![
        Card::from_token("QC", "b").unwrap(),
        Card::from_token("9H", "c").unwrap(),
        Card::from_token("QC", "a").unwrap(),
    ];
    let sorted = sort_hand(&hand, GameVariant::Hochzeit);
    let ids: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}
