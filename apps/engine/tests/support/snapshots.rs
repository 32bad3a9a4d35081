//! Snapshot builders shared by the engine scenarios.

use doko_engine::domain::try_parse_cards;
use doko_engine::{
    AnnounceFlags, Card, Engine, EngineConfig, GameSnapshot, GameVariant, PlayerId,
};

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied()).expect("valid card tokens")
}

/// Opening snapshot at `version` with every hand card legal.
pub fn opening(tokens: &[&str], current_player: PlayerId, version: u64) -> GameSnapshot {
    let mut snap = GameSnapshot::opening(cards(tokens), current_player, GameVariant::Normal);
    snap.version = version;
    snap
}

pub fn all_flags() -> AnnounceFlags {
    AnnounceFlags {
        re: true,
        contra: true,
        no90: true,
        no60: true,
        no30: true,
        black: true,
    }
}

pub fn engine_with(config: EngineConfig, snapshot: GameSnapshot) -> Engine {
    let mut engine = Engine::new(config);
    engine
        .apply_snapshot(snapshot)
        .expect("fixture snapshot applies");
    engine
}

pub fn ids(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.id.as_str()).collect()
}
