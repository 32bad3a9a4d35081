#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod report;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{ConfigError, EngineConfig};
pub use domain::{
    AnnounceFlags, AnnounceSide, AnnouncementLevel, Card, Face, GameSnapshot, GameVariant,
    PeerResponse, PlayerId, Rank, RevealEvent, SeatView, Suit, TeamSide, TrickRotation,
};
pub use engine::{Engine, EngineEvent, EngineObserver, Intent, IntentAction, Resolution, Ticket};
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
