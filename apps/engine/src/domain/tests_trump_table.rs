//! Exact trump membership per variant over all 24 faces.

use std::collections::HashSet;

use crate::domain::{is_trump, Face, GameVariant};

fn faces(tokens: &[&str]) -> HashSet<Face> {
    tokens
        .iter()
        .map(|t| t.parse::<Face>().expect("hardcoded valid face token"))
        .collect()
}

fn trumps_under(variant: GameVariant) -> HashSet<Face> {
    Face::all().filter(|f| is_trump(*f, variant)).collect()
}

#[test]
fn normal_trumps_are_exactly_thirteen_faces() {
    let expected = faces(&[
        "TH", // heart ten
        "QC", "QS", "QH", "QD", // queens
        "JC", "JS", "JH", "JD", // jacks
        "AD", "TD", "KD", "9D", // remaining diamonds
    ]);
    assert_eq!(trumps_under(GameVariant::Normal), expected);
    assert_eq!(expected.len(), 13);
}

#[test]
fn hochzeit_matches_normal() {
    assert_eq!(
        trumps_under(GameVariant::Hochzeit),
        trumps_under(GameVariant::Normal)
    );
}

#[test]
fn fleshless_trumps_are_queens_and_jacks() {
    let expected = faces(&["QC", "QS", "QH", "QD", "JC", "JS", "JH", "JD"]);
    assert_eq!(trumps_under(GameVariant::Fleshless), expected);
}

#[test]
fn single_rank_solos() {
    assert_eq!(
        trumps_under(GameVariant::JackSolo),
        faces(&["JC", "JS", "JH", "JD"])
    );
    assert_eq!(
        trumps_under(GameVariant::QueenSolo),
        faces(&["QC", "QS", "QH", "QD"])
    );
    assert_eq!(
        trumps_under(GameVariant::KingSolo),
        faces(&["KC", "KS", "KH", "KD"])
    );
}

#[test]
fn trump_solo_drops_the_heart_ten() {
    let expected = faces(&[
        "QC", "QS", "QH", "QD", "JC", "JS", "JH", "JD", "AD", "TD", "KD", "9D",
    ]);
    assert_eq!(trumps_under(GameVariant::TrumpSolo), expected);
}

#[test]
fn classification_matches_decision_table_for_every_face() {
    use crate::domain::{Rank, Suit};

    for variant in GameVariant::ALL {
        for face in Face::all() {
            let Face { suit, rank } = face;
            let expected = match variant {
                GameVariant::Normal | GameVariant::Hochzeit => {
                    suit == Suit::Diamonds
                        || rank == Rank::Jack
                        || rank == Rank::Queen
                        || (suit == Suit::Hearts && rank == Rank::Ten)
                }
                GameVariant::Fleshless => rank == Rank::Jack || rank == Rank::Queen,
                GameVariant::JackSolo => rank == Rank::Jack,
                GameVariant::QueenSolo => rank == Rank::Queen,
                GameVariant::KingSolo => rank == Rank::King,
                GameVariant::TrumpSolo => {
                    suit == Suit::Diamonds || rank == Rank::Jack || rank == Rank::Queen
                }
            };
            assert_eq!(is_trump(face, variant), expected, "{face} under {variant:?}");
        }
    }
}
